use crate::client_tests::helpers::{econ_item, named_item, start_client, welcome};

use gc_core::proto::GcMsgType;
use gc_core::proto::base::{ClientHello, ConnectionStatus, SoMultipleObject, SoMultipleObjects};
use gc_core::transport::TransportEvent;
use gc_core::{CSGO_APP_ID, GcConfig, GcEvent, SessionState};

use models::GcConnectionStatus;

use std::time::Duration;

use prost::Message;

/// **VALUE**: End-to-end session flow: launch, delayed hello, welcome snapshot, then a
/// bulk update that renames one item.
///
/// **WHY THIS MATTERS**: This is the path every consumer depends on. It crosses the
/// transport seam, the timer, the session machine, the dispatcher and the inventory.
///
/// **BUG THIS CATCHES**: Would catch:
/// - The first hello going out immediately instead of after the launch delay
/// - The hello missing its protobuf header or client version
/// - The welcome not loading the snapshot or not publishing `HaveSession`
/// - Bulk updates not reaching subscribers as `ItemChanged`
#[tokio::test(start_paused = true)]
async fn given_app_launch_when_gc_welcomes_then_inventory_mirrored_and_updates_emitted() {
    // GIVEN: A logged-in client
    let mut test = start_client(GcConfig::default(), true);
    let mut status = test.client.status_changes();

    // WHEN: The game launches
    test.signal(TransportEvent::AppLaunched(CSGO_APP_ID)).await;
    tokio::time::sleep(Duration::from_millis(400)).await;

    // THEN: No hello yet
    assert!(test.transport.sent_of(GcMsgType::ClientHello).is_empty());

    // WHEN: The launch delay passes
    tokio::time::sleep(Duration::from_millis(200)).await;

    // THEN: Exactly one hello with the configured version
    let hellos = test.transport.sent_of(GcMsgType::ClientHello);
    assert_eq!(hellos.len(), 1);
    assert!(hellos[0].header.is_some());
    let hello = ClientHello::decode(hellos[0].body.as_slice()).unwrap();
    assert_eq!(hello.version, Some(2000202));

    // WHEN: The GC welcomes us with two items
    test.deliver(
        GcMsgType::ClientWelcome,
        &welcome(vec![econ_item(5, 7), econ_item(6, 9)]),
    )
    .await;
    test.wait_for(|event| matches!(event, GcEvent::Connected))
        .await;

    // THEN: Session up and inventory mirrored
    status
        .wait_for(|state| *state == SessionState::HaveSession)
        .await
        .unwrap();
    let inventory = test.client.inventory().await.unwrap().unwrap();
    assert_eq!(inventory.len(), 2);

    // WHEN: A bulk update renames item 5
    let update = SoMultipleObjects {
        objects_modified: vec![SoMultipleObject {
            type_id: Some(1),
            object_data: Some(named_item(5, "Renamed").encode_to_vec()),
        }],
        ..Default::default()
    };
    test.deliver(GcMsgType::SoUpdateMultiple, &update).await;

    // THEN: Subscribers see the change, and the store holds the new name
    let changed = test
        .wait_for(|event| matches!(event, GcEvent::ItemChanged { .. }))
        .await;
    let GcEvent::ItemChanged { old, new } = changed else {
        unreachable!("Predicate only accepts ItemChanged");
    };
    assert_eq!(old.custom_name, None);
    assert_eq!(new.custom_name.as_deref(), Some("Renamed"));

    let inventory = test.client.inventory().await.unwrap().unwrap();
    let renamed = inventory.iter().find(|item| item.id == "5").unwrap();
    assert_eq!(renamed.custom_name.as_deref(), Some("Renamed"));
}

/// **VALUE**: Verifies the hello is retried with a doubling delay while the GC is silent.
///
/// **WHY THIS MATTERS**: Right after launch the GC is often not ready; the client must
/// keep trying without flooding it.
///
/// **BUG THIS CATCHES**: Would catch a single-shot hello, or retries at a fixed interval.
#[tokio::test(start_paused = true)]
async fn given_silent_gc_when_time_passes_then_hello_retried_with_backoff() {
    // GIVEN: A launched game and a GC that never answers
    let test = start_client(GcConfig::default(), true);
    test.signal(TransportEvent::AppLaunched(CSGO_APP_ID)).await;

    // WHEN: Hellos at 0.5s, 1.5s, 3.5s; stop just before 7.5s
    tokio::time::sleep(Duration::from_millis(7_400)).await;

    // THEN: Three attempts so far
    assert_eq!(test.transport.sent_of(GcMsgType::ClientHello).len(), 3);
    assert_eq!(test.client.status(), SessionState::Connecting);

    // WHEN: The fourth attempt is due
    tokio::time::sleep(Duration::from_millis(200)).await;

    // THEN: Four
    assert_eq!(test.transport.sent_of(GcMsgType::ClientHello).len(), 4);
}

/// **VALUE**: Tests that a GC-side drop is reported and the handshake restarts with the
/// launch delay.
///
/// **BUG THIS CATCHES**: Would catch the status message being ignored while in session,
/// or the reconnect waiting out the backoff instead of the first-attempt delay.
#[tokio::test(start_paused = true)]
async fn given_session_when_gc_reports_no_session_then_disconnected_and_hello_resent() {
    // GIVEN: An established session
    let mut test = start_client(GcConfig::default(), true);
    test.establish_session(vec![econ_item(1, 7)]).await;
    let hellos_before = test.transport.sent_of(GcMsgType::ClientHello).len();

    // WHEN: The GC says the session is gone
    test.deliver(
        GcMsgType::ClientConnectionStatus,
        &ConnectionStatus {
            status: Some(GcConnectionStatus::NoSession.code()),
            ..Default::default()
        },
    )
    .await;

    // THEN: Disconnected, and the loop is back in Connecting
    test.wait_for(|event| {
        matches!(
            event,
            GcEvent::Disconnected(GcConnectionStatus::NoSession)
        )
    })
    .await;
    assert_eq!(test.client.status(), SessionState::Connecting);
    assert_eq!(
        test.client.gc_status().await.unwrap(),
        Some(GcConnectionStatus::NoSession)
    );

    // WHEN: Less than the launch delay passes
    tokio::time::sleep(Duration::from_millis(400)).await;

    // THEN: No hello yet
    assert_eq!(
        test.transport.sent_of(GcMsgType::ClientHello).len(),
        hellos_before
    );

    // WHEN: The launch delay elapses
    tokio::time::sleep(Duration::from_millis(200)).await;

    // THEN: One new hello
    assert_eq!(
        test.transport.sent_of(GcMsgType::ClientHello).len(),
        hellos_before + 1
    );
}

/// **VALUE**: Verifies quitting the game stops the hello loop.
///
/// **BUG THIS CATCHES**: Would catch hellos continuing after the player left the game.
#[tokio::test(start_paused = true)]
async fn given_connecting_when_app_quits_then_no_more_hellos() {
    // GIVEN: A handshake in progress
    let test = start_client(GcConfig::default(), true);
    test.signal(TransportEvent::AppLaunched(CSGO_APP_ID)).await;
    tokio::time::sleep(Duration::from_millis(600)).await;
    let hellos = test.transport.sent_of(GcMsgType::ClientHello).len();

    // WHEN: The game quits and a long time passes
    test.signal(TransportEvent::AppQuit(CSGO_APP_ID)).await;
    tokio::time::sleep(Duration::from_secs(120)).await;

    // THEN: No further hellos
    assert_eq!(test.transport.sent_of(GcMsgType::ClientHello).len(), hellos);
    assert_eq!(test.client.status(), SessionState::NoSession);
}
