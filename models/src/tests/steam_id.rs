use crate::{ModelError, SteamId};

/// **VALUE**: Verifies that a well-formed SteamID64 parses and yields its account id.
///
/// **WHY THIS MATTERS**: Profile and match-list requests address players by account id,
/// which is the low 32 bits of the SteamID64. A wrong mask sends requests for a stranger.
///
/// **BUG THIS CATCHES**: Would catch a broken account-id mask or parse path.
#[test]
fn given_individual_steam_id64_when_parsed_then_exposes_account_id() {
    // GIVEN: Gabe's well-known SteamID64
    let input = "76561197960287930";

    // WHEN: Parsing
    let steam_id: SteamId = input.parse().expect("valid steam id");

    // THEN: Account id is the low 32 bits
    assert_eq!(steam_id.account_id(), 22202);
    assert_eq!(steam_id.as_u64(), 76561197960287930);
}

/// **VALUE**: Verifies that Steam3 notation maps to the same identity as SteamID64.
///
/// **WHY THIS MATTERS**: Users paste ids from many sources; both notations must agree.
///
/// **BUG THIS CATCHES**: Would catch a wrong universe/type/instance composition.
#[test]
fn given_steam3_id_when_parsed_then_matches_steam_id64() {
    // GIVEN/WHEN: The same account in both notations
    let steam3: SteamId = "[U:1:22202]".parse().expect("valid steam3 id");
    let steam64: SteamId = "76561197960287930".parse().expect("valid steam id");

    // THEN: Identical
    assert_eq!(steam3, steam64);
}

/// **VALUE**: Verifies that garbage and non-individual identities are rejected.
///
/// **WHY THIS MATTERS**: Invalid identities must fail synchronously, before any
/// request reaches the GC.
///
/// **BUG THIS CATCHES**: Would catch validation being skipped for clan/game-server ids.
#[test]
fn given_invalid_identities_when_parsed_then_returns_validation_error() {
    // GIVEN: Non-numeric, clan-type (type 7) and zero-account inputs
    let inputs = ["not-a-steam-id", "103582791429521412", "76561197960265728", ""];

    for input in inputs {
        // WHEN: Parsing
        let result = input.parse::<SteamId>();

        // THEN: Validation error
        assert!(
            matches!(result, Err(ModelError::Validation { .. })),
            "{input:?} should be rejected"
        );
    }
}
