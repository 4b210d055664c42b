//! GC session state machine.
//!
//! Pure: every input returns the [`SessionAction`]s the owner must carry out
//! (send a hello, arm or cancel the handshake timer, emit an event). The actor
//! in [`crate::client`] owns the timer and the transport.

use crate::error::SessionError;
use crate::events::GcEvent;

use models::GcConnectionStatus;

use std::time::Duration;

use backoff::{ExponentialBackoff, backoff::Backoff};
use log::{debug, info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    NoSession,
    /// Handshake retry loop is running.
    Connecting,
    HaveSession,
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    SendHello,
    ScheduleHandshake(Duration),
    CancelHandshake,
    Emit(GcEvent),
}

/// Doubling delay between hello attempts, without jitter.
pub struct HandshakeBackoff {
    inner: ExponentialBackoff,
}

impl HandshakeBackoff {
    pub fn new(initial: Duration, max: Duration) -> Self {
        Self {
            inner: ExponentialBackoff {
                current_interval: initial,
                initial_interval: initial,
                randomization_factor: 0.0,
                multiplier: 2.0,
                max_interval: max,
                max_elapsed_time: None,
                ..Default::default()
            },
        }
    }

    /// Delay before the next attempt; grows on every call up to the cap.
    pub fn next_delay(&mut self) -> Duration {
        self.inner
            .next_backoff()
            .unwrap_or(self.inner.max_interval)
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

pub struct SessionMachine {
    state: SessionState,
    gc_status: Option<GcConnectionStatus>,
    app_running: bool,
    hello_delay: Duration,
    backoff: HandshakeBackoff,
}

impl SessionMachine {
    pub fn new(hello_delay: Duration, backoff: HandshakeBackoff) -> Self {
        Self {
            state: SessionState::NoSession,
            gc_status: None,
            app_running: false,
            hello_delay,
            backoff,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn gc_status(&self) -> Option<GcConnectionStatus> {
        self.gc_status
    }

    pub fn app_running(&self) -> bool {
        self.app_running
    }

    pub fn app_launched(&mut self) -> Vec<SessionAction> {
        self.app_running = true;

        if self.state != SessionState::NoSession {
            debug!("App launched while {:?}, handshake already handled", self.state);
            return Vec::new();
        }

        info!("App launched, starting GC handshake");
        self.state = SessionState::Connecting;
        vec![SessionAction::ScheduleHandshake(self.hello_delay)]
    }

    /// The handshake timer fired.
    pub fn handshake_tick(&mut self) -> Vec<SessionAction> {
        if !self.app_running || self.state == SessionState::HaveSession {
            debug!("Stopping handshake loop (state {:?})", self.state);
            if self.state == SessionState::Connecting {
                self.state = SessionState::NoSession;
            }
            return vec![SessionAction::CancelHandshake];
        }

        self.state = SessionState::Connecting;
        let delay = self.backoff.next_delay();
        debug!("Sending GC hello, next attempt in {} ms", delay.as_millis());

        vec![
            SessionAction::SendHello,
            SessionAction::ScheduleHandshake(delay),
        ]
    }

    /// `ClientWelcome` arrived. The caller loads the snapshot before acting.
    pub fn welcome(&mut self) -> Vec<SessionAction> {
        info!("GC session established");
        self.backoff.reset();
        self.state = SessionState::HaveSession;
        self.gc_status = Some(GcConnectionStatus::HaveSession);

        vec![
            SessionAction::CancelHandshake,
            SessionAction::Emit(GcEvent::Connected),
        ]
    }

    pub fn connection_status(&mut self, status: GcConnectionStatus) -> Vec<SessionAction> {
        self.gc_status = Some(status);

        if status == GcConnectionStatus::HaveSession || self.state != SessionState::HaveSession {
            return Vec::new();
        }

        warn!("GC session lost: {status}, restarting handshake");
        self.state = SessionState::Connecting;

        vec![
            SessionAction::Emit(GcEvent::Disconnected(status)),
            SessionAction::ScheduleHandshake(self.hello_delay),
        ]
    }

    /// The player left the game; not a GC-side disconnect, so nothing is emitted.
    pub fn app_quit(&mut self) -> Vec<SessionAction> {
        self.app_running = false;
        self.state = SessionState::NoSession;
        self.gc_status = None;
        vec![SessionAction::CancelHandshake]
    }

    /// The transport disconnected or failed.
    pub fn transport_lost(&mut self) -> Vec<SessionAction> {
        let had_session = self.state == SessionState::HaveSession;
        self.app_running = false;
        self.state = SessionState::NoSession;

        let mut actions = vec![SessionAction::CancelHandshake];
        if had_session {
            self.gc_status = Some(GcConnectionStatus::NoSession);
            actions.push(SessionAction::Emit(GcEvent::Disconnected(
                GcConnectionStatus::NoSession,
            )));
        }
        actions
    }

    /// Stops the retry loop only; an established session is left to the
    /// following connection-status or disconnect to tear down.
    pub fn fatal_logon(&mut self, error: SessionError) -> Vec<SessionAction> {
        warn!("{error}");
        if self.state == SessionState::Connecting {
            self.state = SessionState::NoSession;
        }

        vec![
            SessionAction::CancelHandshake,
            SessionAction::Emit(GcEvent::FatalLogon(error)),
        ]
    }
}
