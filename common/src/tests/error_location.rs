use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` records the file and a real line/column.
///
/// **WHY THIS MATTERS**: Every decode, request and session error in the GC client carries
/// an `ErrorLocation`. If it records garbage, protocol failures in logs become untraceable.
///
/// **BUG THIS CATCHES**: Would catch if the file/line/column extraction is broken.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current location
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(location.file.contains("error_location.rs"));
    assert!(location.line > 0);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the `[file:line:column]` display format.
///
/// **WHY THIS MATTERS**: Every error message in the workspace ends with this suffix;
/// log scrapers and humans both rely on it.
///
/// **BUG THIS CATCHES**: Would catch a changed Display implementation.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed location
    let location = ErrorLocation {
        file: "src/session/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Bracketed, colon separated
    assert_eq!(formatted, "[src/session/mod.rs:42:7]");
}

/// **VALUE**: Verifies that `ErrorLocation::caller()` honours `#[track_caller]` propagation.
///
/// **WHY THIS MATTERS**: Error constructors call `caller()` from helper functions. Without
/// propagation every error would point at the helper instead of the failing call site.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[track_caller]` from `caller()`.
#[test]
fn given_multiple_call_sites_when_capturing_caller_then_each_has_unique_line() {
    // GIVEN: A helper that captures its caller
    #[track_caller]
    fn capture() -> ErrorLocation {
        ErrorLocation::caller()
    }

    // WHEN: Capturing from two consecutive lines
    let first = capture();
    let second = capture();

    // THEN: Same file, sequential lines
    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
}
