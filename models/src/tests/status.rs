use crate::GcConnectionStatus;

/// **VALUE**: Verifies the numeric wire code round-trips through the status enum.
///
/// **WHY THIS MATTERS**: The session state machine compares statuses by variant while
/// the wire carries integers; a wrong mapping would flag live sessions as dropped.
///
/// **BUG THIS CATCHES**: Would catch a mismatched code in `from_code` or `code`.
#[test]
fn given_known_codes_when_mapped_then_variants_and_codes_agree() {
    // GIVEN: Every documented code
    for code in 0..=6 {
        // WHEN: Mapping to the enum and back
        let status = GcConnectionStatus::from_code(code);

        // THEN: Code is preserved and the variant is not Unknown
        assert_eq!(status.code(), code);
        assert!(!matches!(status, GcConnectionStatus::Unknown(_)));
    }

    assert_eq!(GcConnectionStatus::from_code(0), GcConnectionStatus::HaveSession);
    assert_eq!(GcConnectionStatus::from_code(2), GcConnectionStatus::NoSession);
}

/// **VALUE**: Verifies unknown codes are kept rather than coerced.
///
/// **WHY THIS MATTERS**: A future GC status must not be mistaken for HAVE_SESSION.
///
/// **BUG THIS CATCHES**: Would catch a catch-all arm mapping unknown codes to a known status.
#[test]
fn given_unknown_code_when_mapped_then_preserved_with_diagnostic_name() {
    // GIVEN/WHEN: An unassigned code
    let status = GcConnectionStatus::from_code(42);

    // THEN: Preserved and named for diagnostics
    assert_eq!(status, GcConnectionStatus::Unknown(42));
    assert_eq!(status.code(), 42);
    assert_eq!(status.to_string(), "GCConnectionStatus_UNKNOWN (42)");
}
