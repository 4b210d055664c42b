use super::{attr_bytes, econ_item};

use crate::attributes::{CASKET_ID_HIGH, CASKET_ID_LOW, CASKET_ITEM_COUNT, CUSTOM_NAME};
use crate::inventory::{InventoryChange, InventoryStore};
use crate::item::{self, CASKET_DEF_INDEX};
use crate::proto::econ::EconItem;

use std::collections::HashMap;

fn named(id: u64, name: &str) -> EconItem {
    let mut value = vec![0x00, 0x00];
    value.extend_from_slice(name.as_bytes());
    let mut raw = econ_item(id, 7);
    raw.attribute.push(attr_bytes(CUSTOM_NAME, &value));
    raw
}

fn stored_in(id: u64, casket_id: u64) -> EconItem {
    let mut raw = econ_item(id, 7);
    raw.attribute.push(attr_bytes(
        CASKET_ID_LOW,
        &(casket_id as u32).to_le_bytes(),
    ));
    raw.attribute.push(attr_bytes(
        CASKET_ID_HIGH,
        &((casket_id >> 32) as u32).to_le_bytes(),
    ));
    raw
}

fn snapshot(store: &mut InventoryStore, raws: &[EconItem]) {
    let items = raws
        .iter()
        .map(|raw| item::normalize(raw).unwrap())
        .collect();
    store.load_snapshot(items);
}

/// **VALUE**: Verifies the store never mutates before its first snapshot.
///
/// **WHY THIS MATTERS**: Shared-object notifications can race ahead of the welcome
/// message. Applying them to an empty list would report a half-built inventory as if it
/// were the player's whole backpack.
///
/// **BUG THIS CATCHES**: Would catch the store lazily initializing itself on create.
#[test]
fn given_uninitialized_store_when_mutated_then_nothing_happens() {
    // GIVEN: A fresh store
    let mut store = InventoryStore::new();

    // WHEN: Creating, updating and removing
    let created = store.create(&econ_item(1, 7)).unwrap();
    let updated = store.update(&econ_item(1, 7)).unwrap();
    let removed = store.remove(&econ_item(1, 7));

    // THEN: No changes and still uninitialized
    assert_eq!(created, None);
    assert_eq!(updated, None);
    assert_eq!(removed, None);
    assert!(!store.is_initialized());
    assert!(store.items().is_none());
}

/// **VALUE**: Tests the unknown-id edge cases of update and remove.
///
/// **WHY THIS MATTERS**: An update for an item the store has never seen must not
/// resurrect it, and a removal of an unknown id is still reported so callers can react.
///
/// **BUG THIS CATCHES**: Would catch update falling back to insert, or remove swallowing
/// unknown ids.
#[test]
fn given_unknown_id_when_updated_or_removed_then_update_dropped_and_removal_reported() {
    // GIVEN: A store holding item 1
    let mut store = InventoryStore::new();
    snapshot(&mut store, &[econ_item(1, 7)]);

    // WHEN: Updating and removing item 99
    let updated = store.update(&econ_item(99, 7)).unwrap();
    let removed = store.remove(&econ_item(99, 7));

    // THEN: Update is dropped, removal is reported without an item
    assert_eq!(updated, None);
    assert_eq!(
        removed,
        Some(InventoryChange::Removed {
            id: String::from("99"),
            item: None
        })
    );
    assert_eq!(store.items().map(<[_]>::len), Some(1));
}

/// **VALUE**: Model-based check: a scripted mix of create/update/remove against a plain
/// map of the same operations.
///
/// **WHY THIS MATTERS**: The store's contract is "each id at most once, update replaces".
/// Comparing against a HashMap catches drift that single-operation tests miss.
///
/// **BUG THIS CATCHES**: Would catch duplicate ids after a create of an existing id being
/// updated, stale entries after remove, or update merging instead of replacing.
#[test]
fn given_operation_sequence_when_applied_then_store_matches_model() {
    // GIVEN: A store and a model seeded with items 1..=3
    let mut store = InventoryStore::new();
    snapshot(&mut store, &[econ_item(1, 7), econ_item(2, 7), econ_item(3, 7)]);
    let mut model: HashMap<String, Option<String>> = (1..=3)
        .map(|id| (id.to_string(), None))
        .collect();

    // WHEN: Running a scripted sequence on both
    store.create(&named(4, "four")).unwrap();
    model.insert(String::from("4"), Some(String::from("four")));

    store.update(&named(2, "two")).unwrap();
    model.insert(String::from("2"), Some(String::from("two")));

    store.remove(&econ_item(1, 7));
    model.remove("1");

    store.update(&econ_item(4, 7)).unwrap();
    model.insert(String::from("4"), None);

    store.update(&named(1, "ghost")).unwrap();

    let recreated = store.create(&named(3, "again")).unwrap();
    model.insert(String::from("3"), Some(String::from("again")));

    // THEN: The repeated create replaced item 3 instead of appending
    assert!(matches!(
        recreated,
        Some(InventoryChange::Changed { ref old, ref new })
            if old.id == "3" && old.custom_name.is_none()
                && new.custom_name.as_deref() == Some("again")
    ));

    // THEN: Same ids, same names, no duplicates
    let items = store.items().unwrap();
    assert_eq!(items.len(), model.len());
    for item in items {
        assert_eq!(
            model.get(&item.id),
            Some(&item.custom_name),
            "Item {} diverged from the model",
            item.id
        );
    }
}

/// **VALUE**: Verifies the three phases of a bulk update run in added, modified, removed
/// order and a bad entry does not stop the rest.
///
/// **WHY THIS MATTERS**: An item both added and modified in the same message must end up
/// with the modified fields; one corrupt entry must not lose the other changes.
///
/// **BUG THIS CATCHES**: Would catch phases being applied in message-field order or the
/// first error aborting the batch.
#[test]
fn given_bulk_update_when_applied_then_phases_ordered_and_errors_collected() {
    // GIVEN: A store with item 1, and a record whose name attribute is cut short
    let mut store = InventoryStore::new();
    snapshot(&mut store, &[econ_item(1, 7)]);
    let broken = EconItem {
        id: Some(6),
        attribute: vec![attr_bytes(CUSTOM_NAME, &[0x00])],
        ..Default::default()
    };

    // WHEN: Adding 5, modifying 5 and the broken one, removing 1
    let outcome = store.apply_bulk(
        &[econ_item(5, 7)],
        &[named(5, "renamed"), broken],
        &[econ_item(1, 7)],
    );

    // THEN: Acquired, Changed, Removed in order, plus one error
    assert_eq!(outcome.changes.len(), 3);
    assert!(matches!(outcome.changes[0], InventoryChange::Acquired(_)));
    assert!(matches!(
        &outcome.changes[1],
        InventoryChange::Changed { new, .. } if new.custom_name.as_deref() == Some("renamed")
    ));
    assert!(matches!(
        &outcome.changes[2],
        InventoryChange::Removed { id, item: Some(_) } if id == "1"
    ));
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(store.items().map(<[_]>::len), Some(1));
}

/// **VALUE**: Tests the casket-contents fast path condition.
///
/// **WHY THIS MATTERS**: Skipping the GC round trip is only safe when the declared count
/// matches what the mirror already holds.
///
/// **BUG THIS CATCHES**: Would catch the fast path answering with a partial list.
#[test]
fn given_casket_counts_when_contents_requested_then_fast_path_only_on_match() {
    // GIVEN: Casket 100 declaring 2 items with both mirrored, casket 200 declaring 3
    //        with one mirrored
    let mut full = econ_item(100, CASKET_DEF_INDEX);
    full.attribute
        .push(attr_bytes(CASKET_ITEM_COUNT, &2u32.to_le_bytes()));
    let mut partial = econ_item(200, CASKET_DEF_INDEX);
    partial
        .attribute
        .push(attr_bytes(CASKET_ITEM_COUNT, &3u32.to_le_bytes()));

    let mut store = InventoryStore::new();
    snapshot(
        &mut store,
        &[full, partial, stored_in(1, 100), stored_in(2, 100), stored_in(3, 200)],
    );

    // WHEN: Asking for known contents
    let known = store.known_casket_contents("100");
    let unknown = store.known_casket_contents("200");

    // THEN: Only the complete casket is answered locally
    let ids: Vec<_> = known.unwrap().into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![String::from("1"), String::from("2")]);
    assert_eq!(unknown, None);
    assert_eq!(store.casket_contents("200").len(), 1);
}
