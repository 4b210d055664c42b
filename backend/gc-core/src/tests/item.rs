use super::{attr_bytes, attr_u32, econ_item};

use crate::attributes::{CASKET_ITEM_COUNT, CUSTOM_NAME};
use crate::error::DecodeError;
use crate::item::{CASKET_DEF_INDEX, decode_item, normalize, position};
use crate::proto::econ::EconItem;

use prost::Message;

/// **VALUE**: Tests position extraction from the packed `inventory` field.
///
/// **WHY THIS MATTERS**: Newly acquired items have bit 30 set and garbage in the low bits;
/// showing that garbage as a backpack position misplaces the item.
///
/// **BUG THIS CATCHES**: Would catch the flag check being dropped or the wrong mask used.
#[test]
fn given_inventory_values_when_position_computed_then_flag_and_mask_respected() {
    // GIVEN / WHEN / THEN
    assert_eq!(position(0x0000_0007), 7);
    assert_eq!(position(0x8000_0012), 0x12);
    assert_eq!(position(0x4000_0012), 0, "Unpositioned items resolve to 0");
}

/// **VALUE**: Verifies storage units default their item count to zero.
///
/// **WHY THIS MATTERS**: An empty casket carries no count attribute. Without the default,
/// the casket-contents fast path cannot tell "empty" from "unknown".
///
/// **BUG THIS CATCHES**: Would catch the casket post-processing being skipped, or applied
/// to ordinary items.
#[test]
fn given_casket_without_count_when_normalized_then_count_defaults_to_zero() {
    // GIVEN: An empty casket, a filled casket and a weapon
    let empty = econ_item(10, CASKET_DEF_INDEX);
    let mut filled = econ_item(11, CASKET_DEF_INDEX);
    filled.attribute.push(attr_u32(CASKET_ITEM_COUNT, 3));
    let weapon = econ_item(12, 7);

    // WHEN: Normalizing
    let empty = normalize(&empty).unwrap();
    let filled = normalize(&filled).unwrap();
    let weapon = normalize(&weapon).unwrap();

    // THEN: Only caskets carry a count
    assert_eq!(empty.casket_contained_item_count, Some(0));
    assert_eq!(filled.casket_contained_item_count, Some(3));
    assert_eq!(weapon.casket_contained_item_count, None);
}

/// **VALUE**: Tests the custom-name fallback and id rendering.
///
/// **BUG THIS CATCHES**: Would catch the record-level name being ignored when no name
/// attribute exists, or the attribute losing priority over it.
#[test]
fn given_record_names_when_normalized_then_attribute_name_wins() {
    // GIVEN: One item named only on the record, one named both ways
    let mut record_only = econ_item(u64::MAX, 7);
    record_only.custom_name = Some(String::from("Record"));

    let mut both = econ_item(2, 7);
    both.custom_name = Some(String::from("Record"));
    both.attribute
        .push(attr_bytes(CUSTOM_NAME, b"\x06\x00Attribute"));

    // WHEN: Normalizing
    let record_only = normalize(&record_only).unwrap();
    let both = normalize(&both).unwrap();

    // THEN: Attribute first, record as fallback; ids in base 10
    assert_eq!(record_only.custom_name.as_deref(), Some("Record"));
    assert_eq!(record_only.id, "18446744073709551615");
    assert_eq!(both.custom_name.as_deref(), Some("Attribute"));
}

/// **VALUE**: Verifies that an item record without an id is rejected.
///
/// **WHY THIS MATTERS**: The store's uniqueness invariant is keyed by id.
///
/// **BUG THIS CATCHES**: Would catch a missing id silently becoming "0".
#[test]
fn given_record_without_id_when_normalized_then_returns_error() {
    // GIVEN: A record with no id
    let raw = EconItem {
        def_index: Some(7),
        ..Default::default()
    };

    // WHEN: Normalizing
    let result = normalize(&raw);

    // THEN: Rejected
    assert!(matches!(result, Err(DecodeError::UnexpectedType { .. })));
}

/// **VALUE**: Tests decoding straight from protobuf bytes, including the failure path.
///
/// **BUG THIS CATCHES**: Would catch protobuf errors panicking instead of mapping into
/// `DecodeError::Protobuf`.
#[test]
fn given_serialized_items_when_decoded_then_valid_ok_and_garbage_err() {
    // GIVEN: A valid encoded item and garbage bytes
    let bytes = econ_item(42, 7).encode_to_vec();
    let garbage = [0xFF, 0xFF, 0xFF];

    // WHEN: Decoding both
    let item = decode_item(&bytes).unwrap();
    let result = decode_item(&garbage);

    // THEN: One item, one protobuf error
    assert_eq!(item.id, "42");
    assert_eq!(item.position, 1);
    assert!(matches!(result, Err(DecodeError::Protobuf { .. })));
}
