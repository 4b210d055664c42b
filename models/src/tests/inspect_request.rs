use crate::{InspectOwner, InspectRequestBuilder, ModelError};

/// **VALUE**: Verifies that a complete builder produces the expected request.
///
/// **WHY THIS MATTERS**: The request fields map one-to-one onto the S/M, A and D
/// parameters sent to the GC.
///
/// **BUG THIS CATCHES**: Would catch fields being swapped inside `build()`.
#[test]
fn given_complete_builder_when_built_then_returns_request() {
    // GIVEN: All parameters
    let builder = InspectRequestBuilder::default()
        .with_owner(76561198084749846)
        .with_asset_id(6806151163)
        .with_d(9489041596054094006);

    // WHEN: Building
    let request = builder.build().expect("valid request");

    // THEN: Fields are preserved
    assert_eq!(request.owner, InspectOwner::Player(76561198084749846));
    assert_eq!(request.asset_id, 6806151163);
    assert_eq!(request.d, 9489041596054094006);
}

/// **VALUE**: Verifies that missing or zero parameters are rejected.
///
/// **WHY THIS MATTERS**: The GC silently ignores malformed inspection requests, which
/// would surface as a confusing timeout ten seconds later instead of an immediate error.
///
/// **BUG THIS CATCHES**: Would catch a removed required-field or non-zero check.
#[test]
fn given_incomplete_builder_when_built_then_returns_validation_error() {
    // GIVEN: Builders missing owner, with zero asset id, and missing d
    let missing_owner = InspectRequestBuilder::default().with_asset_id(1).with_d(1);
    let zero_asset = InspectRequestBuilder::default()
        .with_market_listing(5)
        .with_asset_id(0)
        .with_d(1);
    let missing_d = InspectRequestBuilder::default().with_owner(7).with_asset_id(1);

    // WHEN/THEN: Each fails validation with a specific message
    match missing_owner.build().unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Owner or market listing is required")
        }
    }
    match zero_asset.build().unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Asset id must be non-zero"),
    }
    match missing_d.build().unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "D parameter is required"),
    }
}
