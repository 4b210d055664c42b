use crate::correlator::{CorrelationKey, Correlator, Response};
use crate::error::RequestError;

use models::PlayerProfile;

use std::time::Duration;

use tokio::sync::oneshot;

fn profile(account_id: u32) -> Response {
    Response::Profile(PlayerProfile {
        account_id,
        ..Default::default()
    })
}

/// **VALUE**: Verifies a resolved watcher cannot also time out.
///
/// **WHY THIS MATTERS**: The timeout timer and the response race each other. The caller
/// must see exactly one outcome; a second send would be silently lost but the timeout
/// would still be logged and emitted as an event.
///
/// **BUG THIS CATCHES**: Would catch `resolve` leaving the watcher registered, making a
/// later `expire` report a timeout for a request that already succeeded.
#[test]
fn given_resolved_watcher_when_expired_then_expire_is_noop() {
    // GIVEN: One watcher for a profile
    let mut correlator = Correlator::new();
    let (reply, mut answer) = oneshot::channel();
    let id = correlator.next_watcher_id();
    let key = CorrelationKey::Profile(42);
    correlator.register(key, id, reply, Duration::from_secs(10), None);

    // WHEN: The response arrives, then the timer fires
    let resolved = correlator.resolve(key, profile(42));
    let expired = correlator.expire(key, id);

    // THEN: Exactly one success
    assert_eq!(resolved, 1);
    assert!(!expired);
    assert_eq!(answer.try_recv().unwrap().unwrap(), profile(42));
    assert_eq!(correlator.pending_count(), 0);
}

/// **VALUE**: Verifies the reverse race: a timed-out watcher ignores the late response.
///
/// **BUG THIS CATCHES**: Would catch `expire` not removing the watcher, so a late reply
/// is counted as delivered.
#[test]
fn given_expired_watcher_when_response_arrives_then_response_ignored() {
    // GIVEN: One watcher for an inspection
    let mut correlator = Correlator::new();
    let (reply, mut answer) = oneshot::channel();
    let id = correlator.next_watcher_id();
    let key = CorrelationKey::Inspect(7);
    correlator.register(key, id, reply, Duration::from_millis(250), None);

    // WHEN: The timer fires, then the response arrives
    let expired = correlator.expire(key, id);
    let resolved = correlator.resolve(key, profile(1));

    // THEN: Exactly one timeout carrying the subject and duration
    assert!(expired);
    assert_eq!(resolved, 0);
    match answer.try_recv().unwrap() {
        Err(RequestError::Timeout {
            subject,
            timeout_ms,
            ..
        }) => {
            assert_eq!(subject, "item inspection 7");
            assert_eq!(timeout_ms, 250);
        }
        other => panic!("Expected Timeout, got {other:?}"),
    }
    assert!(!correlator.is_watching(key));
}

/// **VALUE**: Tests that concurrent watchers of one key all receive the answer, while
/// expiring one leaves the others waiting.
///
/// **WHY THIS MATTERS**: Two callers inspecting the same item share one GC response.
///
/// **BUG THIS CATCHES**: Would catch `expire` dropping every watcher of the key.
#[test]
fn given_two_watchers_when_one_expires_then_other_still_resolves() {
    // GIVEN: Two watchers for the same profile
    let mut correlator = Correlator::new();
    let key = CorrelationKey::Profile(5);
    let (first_reply, mut first) = oneshot::channel();
    let (second_reply, mut second) = oneshot::channel();
    let first_id = correlator.next_watcher_id();
    let second_id = correlator.next_watcher_id();
    correlator.register(key, first_id, first_reply, Duration::from_secs(1), None);
    correlator.register(key, second_id, second_reply, Duration::from_secs(5), None);

    // WHEN: The first times out, then the response arrives
    correlator.expire(key, first_id);
    let resolved = correlator.resolve(key, profile(5));

    // THEN: First timed out, second resolved
    assert_eq!(resolved, 1);
    assert!(matches!(
        first.try_recv().unwrap(),
        Err(RequestError::Timeout { .. })
    ));
    assert!(second.try_recv().unwrap().is_ok());
}

/// **VALUE**: Verifies resolving aborts the watcher's timer task.
///
/// **BUG THIS CATCHES**: Would catch timers outliving their watcher and later flooding
/// the actor with stale timeout commands.
#[tokio::test]
async fn given_watcher_with_timer_when_resolved_then_timer_aborted() {
    // GIVEN: A watcher with a long-running timer task
    let mut correlator = Correlator::new();
    let key = CorrelationKey::CasketContents(9);
    let (reply, _answer) = oneshot::channel();
    let timer = tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(3600)).await;
    });
    let id = correlator.next_watcher_id();
    correlator.register(key, id, reply, Duration::from_secs(30), Some(timer.abort_handle()));

    // WHEN: Resolving
    correlator.resolve(key, Response::CasketContents(Vec::new()));

    // THEN: The timer task was cancelled
    let joined = timer.await;
    assert!(joined.unwrap_err().is_cancelled());
}
