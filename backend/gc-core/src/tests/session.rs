use crate::error::SessionError;
use crate::events::GcEvent;
use crate::session::{HandshakeBackoff, SessionAction, SessionMachine, SessionState};

use common::ErrorLocation;
use models::GcConnectionStatus;

use std::panic::Location;
use std::time::Duration;

const HELLO_DELAY: Duration = Duration::from_millis(500);

fn machine() -> SessionMachine {
    SessionMachine::new(
        HELLO_DELAY,
        HandshakeBackoff::new(Duration::from_secs(1), Duration::from_secs(60)),
    )
}

fn scheduled(actions: &[SessionAction]) -> Option<Duration> {
    actions.iter().find_map(|action| match action {
        SessionAction::ScheduleHandshake(delay) => Some(*delay),
        _ => None,
    })
}

fn emitted(actions: &[SessionAction]) -> Vec<&GcEvent> {
    actions
        .iter()
        .filter_map(|action| match action {
            SessionAction::Emit(event) => Some(event),
            _ => None,
        })
        .collect()
}

/// **VALUE**: Verifies the hello retry delay doubles from 1s and resets after a welcome.
///
/// **WHY THIS MATTERS**: A GC that is down must not be hammered, but a fresh outage after
/// a good session should retry quickly again.
///
/// **BUG THIS CATCHES**: Would catch jitter leaking in (non-deterministic delays), the
/// multiplier being wrong, or the reset being forgotten.
#[test]
fn given_backoff_when_advanced_and_reset_then_doubles_and_restarts() {
    // GIVEN: The default backoff
    let mut backoff = HandshakeBackoff::new(Duration::from_secs(1), Duration::from_secs(60));

    // WHEN: Advancing three times, resetting, advancing again
    let first = backoff.next_delay();
    let second = backoff.next_delay();
    let third = backoff.next_delay();
    backoff.reset();
    let after_reset = backoff.next_delay();

    // THEN: 1s, 2s, 4s, then 1s
    assert_eq!(first, Duration::from_millis(1000));
    assert_eq!(second, Duration::from_millis(2000));
    assert_eq!(third, Duration::from_millis(4000));
    assert_eq!(after_reset, Duration::from_millis(1000));
}

/// **VALUE**: Tests that the delay stops growing at the cap.
///
/// **BUG THIS CATCHES**: Would catch `max_elapsed_time` ending the retry loop (a `None`
/// backoff) instead of holding at the maximum.
#[test]
fn given_many_attempts_when_advanced_then_capped_at_max() {
    // GIVEN: The default backoff
    let mut backoff = HandshakeBackoff::new(Duration::from_secs(1), Duration::from_secs(60));

    // WHEN: Advancing well past the cap
    let last = (0..20).map(|_| backoff.next_delay()).last().unwrap();

    // THEN: Held at 60s
    assert_eq!(last, Duration::from_secs(60));
}

/// **VALUE**: Walks the happy path: launch, two hello attempts, welcome.
///
/// **WHY THIS MATTERS**: This is the only path to a usable session. Each step decides
/// whether the actor arms, re-arms or cancels the timer.
///
/// **BUG THIS CATCHES**: Would catch the first hello going out without the launch delay,
/// the retry delay not growing, or the welcome leaving the retry timer armed.
#[test]
fn given_app_launch_when_handshake_completes_then_session_established() {
    // GIVEN: A fresh machine
    let mut machine = machine();
    assert_eq!(machine.state(), SessionState::NoSession);

    // WHEN: Launching
    let launched = machine.app_launched();

    // THEN: Connecting, with the first hello delayed
    assert_eq!(machine.state(), SessionState::Connecting);
    assert_eq!(scheduled(&launched), Some(HELLO_DELAY));

    // WHEN: The timer fires twice
    let first = machine.handshake_tick();
    let second = machine.handshake_tick();

    // THEN: Each tick sends a hello and re-arms with a growing delay
    assert!(matches!(first[0], SessionAction::SendHello));
    assert_eq!(scheduled(&first), Some(Duration::from_secs(1)));
    assert_eq!(scheduled(&second), Some(Duration::from_secs(2)));

    // WHEN: The GC welcomes us
    let welcomed = machine.welcome();

    // THEN: Session up, timer cancelled, Connected emitted
    assert_eq!(machine.state(), SessionState::HaveSession);
    assert_eq!(machine.gc_status(), Some(GcConnectionStatus::HaveSession));
    assert!(matches!(welcomed[0], SessionAction::CancelHandshake));
    assert!(matches!(emitted(&welcomed)[..], [GcEvent::Connected]));
}

/// **VALUE**: Verifies a lost GC session re-enters the handshake loop at once, with the
/// same first-attempt delay as a launch.
///
/// **WHY THIS MATTERS**: After a GC-side drop the player is still in game; waiting out a
/// long backoff would leave the client dead for a minute.
///
/// **BUG THIS CATCHES**: Would catch a HaveSession status triggering a reconnect, a
/// drop not emitting Disconnected, or the restart using a different first delay.
#[test]
fn given_session_when_status_drops_then_disconnected_and_handshake_restarted() {
    // GIVEN: An established session
    let mut machine = machine();
    machine.app_launched();
    machine.welcome();

    // WHEN: The GC reports HaveSession, then NoSession
    let still_up = machine.connection_status(GcConnectionStatus::HaveSession);
    let dropped = machine.connection_status(GcConnectionStatus::NoSession);

    // THEN: Only the drop reacts
    assert!(still_up.is_empty());
    assert_eq!(machine.state(), SessionState::Connecting);
    assert_eq!(scheduled(&dropped), Some(HELLO_DELAY));
    assert!(matches!(
        emitted(&dropped)[..],
        [GcEvent::Disconnected(GcConnectionStatus::NoSession)]
    ));
}

/// **VALUE**: Tests that quitting the game ends the loop silently.
///
/// **BUG THIS CATCHES**: Would catch app quit emitting Disconnected, or a stale tick after
/// the quit sending another hello.
#[test]
fn given_connecting_when_app_quits_then_loop_stops_without_event() {
    // GIVEN: A machine mid-handshake
    let mut machine = machine();
    machine.app_launched();
    machine.handshake_tick();

    // WHEN: The app quits and a stale tick still arrives
    let quit = machine.app_quit();
    let tick = machine.handshake_tick();

    // THEN: No events, no hello
    assert_eq!(machine.state(), SessionState::NoSession);
    assert!(emitted(&quit).is_empty());
    assert!(!machine.app_running());
    assert!(
        tick.iter()
            .all(|action| !matches!(action, SessionAction::SendHello))
    );
}

/// **VALUE**: Verifies transport loss only reports a disconnect for a live session.
///
/// **BUG THIS CATCHES**: Would catch a Disconnected event fired while never connected.
#[test]
fn given_transport_lost_when_session_state_varies_then_event_only_for_live_session() {
    // GIVEN: One machine connecting, one with a session
    let mut connecting = machine();
    connecting.app_launched();
    let mut connected = machine();
    connected.app_launched();
    connected.welcome();

    // WHEN: Both lose the transport
    let quiet = connecting.transport_lost();
    let loud = connected.transport_lost();

    // THEN: Only the live session emits
    assert!(emitted(&quiet).is_empty());
    assert!(matches!(emitted(&loud)[..], [GcEvent::Disconnected(_)]));
    assert_eq!(connected.state(), SessionState::NoSession);
}

/// **VALUE**: Tests that a fatal logon error stops the retry loop and is reported.
///
/// **BUG THIS CATCHES**: Would catch the hello loop continuing after the GC refused us.
#[test]
fn given_connecting_when_fatal_logon_then_loop_cancelled_and_error_emitted() {
    // GIVEN: A machine mid-handshake
    let mut machine = machine();
    machine.app_launched();

    // WHEN: The GC refuses the logon
    let actions = machine.fatal_logon(SessionError::FatalLogon {
        code: 7,
        message: String::from("Banned"),
        country: Some(String::from("NZ")),
        location: ErrorLocation::from(Location::caller()),
    });

    // THEN: Back to NoSession with the error emitted
    assert_eq!(machine.state(), SessionState::NoSession);
    assert!(matches!(actions[0], SessionAction::CancelHandshake));
    assert!(matches!(
        emitted(&actions)[..],
        [GcEvent::FatalLogon(SessionError::FatalLogon { code: 7, .. })]
    ));
}
