use gc_core::error::{RequestError, TransportError};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies timeout errors name what was waited for and for how long.
///
/// **WHY THIS MATTERS**: Consumers log these errors directly. "Timeout" alone does not say
/// whether an inspection or a casket load was lost.
///
/// **BUG THIS CATCHES**: Would catch the subject or duration being dropped from the
/// Display format.
#[test]
#[track_caller]
fn given_timeout_error_when_formatted_then_includes_subject_duration_and_location() {
    // GIVEN: A timeout error
    let err = RequestError::Timeout {
        subject: String::from("item inspection 42"),
        timeout_ms: 10_000,
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting
    let error_string = format!("{}", err);

    // THEN: Kind, subject, duration and file
    assert!(error_string.contains("Timeout Error"));
    assert!(error_string.contains("item inspection 42"));
    assert!(error_string.contains("10000 ms"));
    assert!(error_string.contains("request.rs"));
}

/// **VALUE**: Verifies transport failures keep the transport's message when surfaced to
/// the requesting caller.
///
/// **BUG THIS CATCHES**: Would catch the `From<TransportError>` conversion replacing the
/// cause with a generic message.
#[test]
fn given_transport_error_when_converted_then_message_preserved() {
    // GIVEN: A transport failure
    let transport_error = TransportError::NotConnected {
        message: String::from("socket closed"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Converting
    let err = RequestError::from(transport_error);

    // THEN: Transport variant carrying the original text
    match err {
        RequestError::Transport { message, .. } => {
            assert!(message.contains("Not Connected Error"));
            assert!(message.contains("socket closed"));
        }
        other => panic!("Expected Transport, got {other:?}"),
    }
}
