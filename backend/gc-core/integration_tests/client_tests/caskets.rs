use crate::client_tests::helpers::{attribute, econ_item, start_client};

use gc_core::GcConfig;
use gc_core::attributes::{CASKET_ID_HIGH, CASKET_ID_LOW, CASKET_ITEM_COUNT};
use gc_core::item::CASKET_DEF_INDEX;
use gc_core::proto::base::SoSingleObject;
use gc_core::proto::econ::{CasketItem, EconItem, ItemCustomizationNotification};
use gc_core::proto::{CASKET_CONTENTS_NOTIFICATION, GcMsgType};

use prost::Message;

const CASKET_ID: u64 = 100;

fn casket(declared: u32) -> EconItem {
    let mut casket = econ_item(CASKET_ID, CASKET_DEF_INDEX);
    casket
        .attribute
        .push(attribute(CASKET_ITEM_COUNT, declared.to_le_bytes().to_vec()));
    casket
}

fn stored(id: u64) -> EconItem {
    let mut item = econ_item(id, 7);
    item.attribute.push(attribute(
        CASKET_ID_LOW,
        (CASKET_ID as u32).to_le_bytes().to_vec(),
    ));
    item.attribute
        .push(attribute(CASKET_ID_HIGH, 0u32.to_le_bytes().to_vec()));
    item
}

/// **VALUE**: Verifies a casket whose contents are all mirrored is answered locally.
///
/// **WHY THIS MATTERS**: Loading casket contents costs a GC round trip and a 30 s worst
/// case; when the mirror already holds every item, the answer is immediate.
///
/// **BUG THIS CATCHES**: Would catch the fast path being skipped (an unnecessary load
/// request on the wire).
#[tokio::test(start_paused = true)]
async fn given_fully_known_casket_when_contents_requested_then_answered_without_gc() {
    // GIVEN: A session whose snapshot holds a casket declaring 1 item, and that item
    let mut test = start_client(GcConfig::default(), true);
    test.establish_session(vec![casket(1), stored(7), econ_item(8, 7)])
        .await;
    let sent_before = test.transport.sent().len();

    // WHEN: Asking for its contents
    let contents = test.client.get_casket_contents(CASKET_ID).await.unwrap();

    // THEN: The stored item, and nothing sent
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0].id, "7");
    assert_eq!(test.transport.sent().len(), sent_before);
}

/// **VALUE**: Tests the slow path: a load request goes out and the GC's "contents loaded"
/// notification resolves the caller with what the mirror now holds.
///
/// **WHY THIS MATTERS**: The GC does not answer the load directly; it pushes the items
/// through the shared-object cache and then sends a customization notification.
///
/// **BUG THIS CATCHES**: Would catch the notification not being correlated with the
/// casket id, leaving the caller to time out.
#[tokio::test(start_paused = true)]
async fn given_partially_known_casket_when_contents_loaded_then_caller_resolved() {
    // GIVEN: A casket declaring 2 items, only 1 mirrored
    let mut test = start_client(GcConfig::default(), true);
    test.establish_session(vec![casket(2), stored(7)]).await;

    // WHEN: Asking for its contents
    let client = test.client.clone();
    let pending = tokio::spawn(async move { client.get_casket_contents(CASKET_ID).await });
    while test.client.pending_request_count().await.unwrap() == 0 {
        tokio::task::yield_now().await;
    }

    // THEN: A load request for the casket went out
    let loads = test.transport.sent_of(GcMsgType::CasketItemLoadContents);
    assert_eq!(loads.len(), 1);
    let load = CasketItem::decode(loads[0].body.as_slice()).unwrap();
    assert_eq!(load.casket_item_id, Some(CASKET_ID));
    assert_eq!(load.item_item_id, Some(CASKET_ID));

    // WHEN: The GC pushes the second item and signals completion
    let created = SoSingleObject {
        type_id: Some(1),
        object_data: Some(stored(9).encode_to_vec()),
        ..Default::default()
    };
    test.deliver(GcMsgType::SoCreate, &created).await;
    test.deliver(
        GcMsgType::ItemCustomizationNotification,
        &ItemCustomizationNotification {
            item_id: vec![CASKET_ID],
            request: Some(CASKET_CONTENTS_NOTIFICATION),
        },
    )
    .await;

    // THEN: Both stored items come back
    let mut ids: Vec<_> = pending
        .await
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec![String::from("7"), String::from("9")]);
}
