use gc_core::error::DecodeError;
use gc_core::wire::BinaryReader;

use prost::Message;

/// **VALUE**: Verifies a truncated binary read reports where it was raised.
///
/// **WHY THIS MATTERS**: Binary GC messages are decoded by several handlers; the location
/// tells developers which layout disagreed with the payload.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the reader, which
/// makes every truncation point at the same line inside the wire module.
#[test]
fn given_short_payload_when_read_then_error_names_calling_file() {
    // GIVEN: One byte
    let payload = [0x01];

    // WHEN: Reading a u64 from here
    let error = BinaryReader::new(&payload).read_u64_le().unwrap_err();

    // THEN: The message names the kind and this file
    let error_string = error.to_string();
    assert!(error_string.contains("Truncated Payload Error"));
    assert!(error_string.contains("decode.rs"), "Got: {error_string}");
}

/// **VALUE**: Verifies protobuf failures convert into `DecodeError::Protobuf` with context.
///
/// **BUG THIS CATCHES**: Would catch the `From<prost::DecodeError>` conversion losing the
/// underlying reason.
#[test]
fn given_invalid_protobuf_when_converted_then_protobuf_variant_with_reason() {
    // GIVEN: Bytes that end in the middle of a varint
    let bytes = [0x08, 0xFF];

    // WHEN: Decoding and converting
    let error: DecodeError = gc_core::proto::econ::EconItem::decode(bytes.as_slice())
        .unwrap_err()
        .into();

    // THEN: Protobuf variant with a non-empty message
    match error {
        DecodeError::Protobuf { message, .. } => assert!(!message.is_empty()),
        other => panic!("Expected Protobuf, got {other:?}"),
    }
}
