use crate::client_tests::helpers::{TEST_STEAM_ID, econ_item, start_client};

use gc_core::correlator::CorrelationKey;
use gc_core::error::RequestError;
use gc_core::proto::GcMsgType;
use gc_core::proto::cstrike::{
    MatchmakingGc2ClientHello, PlayerRankingInfo, PlayersProfile, PreviewDataBlock,
    PreviewDataBlockRequest, PreviewDataBlockResponse,
};
use gc_core::{GcConfig, GcEvent};

use models::{InspectOwner, SteamId};

use prost::Message;

const ASSET_ID: u64 = 698323590;
const D_PARAM: u64 = 7935523998312483177;

/// **VALUE**: Verifies an unanswered inspection fails with a timeout exactly once, and a
/// response that arrives afterwards does not resurrect it.
///
/// **WHY THIS MATTERS**: Inspections are the most common query and the GC silently drops
/// many of them. Callers must always get an answer, and late answers must not leak
/// watchers or fire twice.
///
/// **BUG THIS CATCHES**: Would catch:
/// - A query hanging forever when the GC never answers
/// - The timeout not carrying the configured duration
/// - A late response still being counted as pending, or delivered to nobody with a panic
#[tokio::test(start_paused = true)]
async fn given_silent_gc_when_inspecting_then_times_out_and_late_response_ignored() {
    // GIVEN: A client with a 10 ms inspection timeout
    let config = GcConfig {
        inspect_timeout_ms: 10,
        ..Default::default()
    };
    let mut test = start_client(config, true);

    // WHEN: Inspecting an item the GC never answers for
    let result = test
        .client
        .inspect_item(InspectOwner::Player(TEST_STEAM_ID), ASSET_ID, D_PARAM)
        .await;

    // THEN: Timeout error and timeout events
    assert!(
        matches!(result, Err(RequestError::Timeout { timeout_ms: 10, .. })),
        "Expected Timeout, got {result:?}"
    );
    test.wait_for(|event| {
        matches!(
            event,
            GcEvent::RequestTimedOut(CorrelationKey::Inspect(ASSET_ID))
        )
    })
    .await;
    test.wait_for(|event| {
        matches!(event, GcEvent::InspectItemTimedOut { item_id } if item_id == "698323590")
    })
    .await;

    // THEN: The request went out once with the owner in param_s
    let requests = test.transport.sent_of(GcMsgType::EconPreviewDataBlockRequest);
    assert_eq!(requests.len(), 1);
    let request = PreviewDataBlockRequest::decode(requests[0].body.as_slice()).unwrap();
    assert_eq!(request.param_s, Some(TEST_STEAM_ID));
    assert_eq!(request.param_m, Some(0));
    assert_eq!(request.param_a, Some(ASSET_ID));
    assert_eq!(request.param_d, Some(D_PARAM));

    // WHEN: The response finally arrives
    let late = PreviewDataBlockResponse {
        iteminfo: Some(PreviewDataBlock {
            itemid: Some(ASSET_ID),
            ..Default::default()
        }),
    };
    test.deliver(GcMsgType::EconPreviewDataBlockResponse, &late)
        .await;

    // THEN: Still broadcast, but nothing is pending
    test.wait_for(|event| matches!(event, GcEvent::InspectItemInfo(_)))
        .await;
    assert_eq!(test.client.pending_request_count().await.unwrap(), 0);
}

/// **VALUE**: Tests the happy path of a correlated query: the profile response resolves
/// the caller waiting on that account.
///
/// **BUG THIS CATCHES**: Would catch the watcher being keyed by the 64-bit Steam id while
/// the response carries the 32-bit account id.
#[tokio::test(start_paused = true)]
async fn given_profile_request_when_gc_answers_then_caller_receives_profile() {
    // GIVEN: A client
    let test = start_client(GcConfig::default(), true);
    let account_id = SteamId::from_u64(TEST_STEAM_ID).unwrap().account_id();

    // WHEN: Requesting a profile and answering it from the "GC"
    let client = test.client.clone();
    let pending = tokio::spawn(async move { client.request_players_profile(TEST_STEAM_ID).await });
    tokio::task::yield_now().await;
    while test.client.pending_request_count().await.unwrap() == 0 {
        tokio::task::yield_now().await;
    }

    let answer = PlayersProfile {
        request_id: None,
        account_profiles: vec![MatchmakingGc2ClientHello {
            account_id: Some(account_id),
            ranking: Some(PlayerRankingInfo {
                account_id: Some(account_id),
                rank_id: Some(12),
                wins: Some(340),
                ..Default::default()
            }),
            ..Default::default()
        }],
    };
    test.deliver(GcMsgType::PlayersProfile, &answer).await;

    // THEN: The caller gets the profile
    let profile = pending.await.unwrap().unwrap();
    assert_eq!(profile.account_id, account_id);
    assert_eq!(profile.ranking.and_then(|ranking| ranking.rank_id), Some(12));
}

/// **VALUE**: Verifies argument validation and the logged-in check run before anything
/// reaches the transport.
///
/// **WHY THIS MATTERS**: Bad ids sent to the GC can get the account flagged; sends before
/// Steam logon would be silently lost.
///
/// **BUG THIS CATCHES**: Would catch validation moved after the send, or the logged-in
/// check being skipped for fire-and-forget commands.
#[tokio::test(start_paused = true)]
async fn given_invalid_input_or_no_logon_when_requesting_then_rejected_without_sending() {
    // GIVEN: A client whose Steam connection is not logged in
    let test = start_client(GcConfig::default(), false);

    // WHEN: Issuing bad and good requests
    let zero_item = test.client.delete_item(0).await;
    let no_items = test.client.craft(&[], None).await;
    let bad_name = test.client.name_item(0, 5, "").await;
    let bad_steam_id = test.client.request_recent_games(42).await;
    let not_logged_in = test.client.request_recent_games(TEST_STEAM_ID).await;
    let inspect_not_logged_in = test.client.inspect_link("S1A2D3").await;

    // THEN: Validation for bad input, NotLoggedIn otherwise, nothing sent
    for result in [&zero_item, &no_items, &bad_name, &bad_steam_id] {
        assert!(
            matches!(result, Err(RequestError::Validation { .. })),
            "Expected Validation, got {result:?}"
        );
    }
    assert!(matches!(
        not_logged_in,
        Err(RequestError::NotLoggedIn { .. })
    ));
    assert!(matches!(
        inspect_not_logged_in,
        Err(RequestError::NotLoggedIn { .. })
    ));
    assert!(test.transport.sent().is_empty());
    assert_eq!(test.client.pending_request_count().await.unwrap(), 0);
}

/// **VALUE**: Tests the binary layout of outbound item commands.
///
/// **BUG THIS CATCHES**: Would catch a missing NUL terminator on names, or the automatic
/// recipe not being sent as -2.
#[tokio::test(start_paused = true)]
async fn given_item_commands_when_sent_then_binary_bodies_match_gc_layout() {
    // GIVEN: A logged-in client with a session
    let mut test = start_client(GcConfig::default(), true);
    test.establish_session(vec![econ_item(5, 7)]).await;

    // WHEN: Renaming and crafting
    test.client.name_item(0, 5, "Ab").await.unwrap();
    test.client.craft(&[5, 6], None).await.unwrap();

    // THEN: Name body is tag, item, NUL, text, NUL; craft body is recipe, count, ids
    let names = test.transport.sent_of(GcMsgType::NameItem);
    let mut expected_name = Vec::new();
    expected_name.extend_from_slice(&0u64.to_le_bytes());
    expected_name.extend_from_slice(&5u64.to_le_bytes());
    expected_name.extend_from_slice(b"\0Ab\0");
    assert_eq!(names[0].body, expected_name);
    assert!(names[0].header.is_none());

    let crafts = test.transport.sent_of(GcMsgType::Craft);
    let mut expected_craft = Vec::new();
    expected_craft.extend_from_slice(&(-2i16).to_le_bytes());
    expected_craft.extend_from_slice(&2u16.to_le_bytes());
    expected_craft.extend_from_slice(&5u64.to_le_bytes());
    expected_craft.extend_from_slice(&6u64.to_le_bytes());
    assert_eq!(crafts[0].body, expected_craft);
}
