use crate::StickerSlot;

/// **VALUE**: Verifies sticker slots serialize every optional member, as `null` when absent.
///
/// **WHY THIS MATTERS**: Consumers rely on a fixed field set for stickers, keychains and
/// variations regardless of which sub-fields the GC supplied.
///
/// **BUG THIS CATCHES**: Would catch someone adding `skip_serializing_if` to the slot type.
#[test]
fn given_sparse_sticker_slot_when_serialized_then_all_fields_present() {
    // GIVEN: A slot with only id and wear
    let slot = StickerSlot {
        slot: 2,
        sticker_id: 4963,
        wear: Some(0.25),
        ..Default::default()
    };

    // WHEN: Serializing
    let json = serde_json::to_value(&slot).expect("serializable");

    // THEN: Absent fields are explicit nulls
    let object = json.as_object().expect("object");
    assert_eq!(object.len(), 12);
    assert!(object["scale"].is_null());
    assert!(object["wrapped_sticker"].is_null());
    assert_eq!(object["sticker_id"], 4963);
}
