//! The task that owns every piece of mutable client state.
//!
//! Transport events, timer firings and consumer calls all arrive here and are
//! handled one at a time, so no handler ever runs concurrently with another.

use crate::config::GcConfig;
use crate::correlator::{CorrelationKey, Correlator, Reply, Response, WatcherId};
use crate::dispatcher::Dispatcher;
use crate::error::RequestError;
use crate::events::{EventBus, GcEvent};
use crate::inventory::InventoryStore;
use crate::proto::GcMsgType;
use crate::proto::base::ClientHello;
use crate::proto::econ::CasketItem;
use crate::session::{SessionAction, SessionMachine, SessionState};
use crate::transport::{GcTransport, ProtoHeader, TransportEvent};

use common::ErrorLocation;
use models::{GcConnectionStatus, InventoryItem};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, trace, warn};
use prost::Message;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::AbortHandle;
use tokio::time::sleep as TokioSleep;

/// Everything the actor can be asked to do.
pub(crate) enum Command {
    /// Handshake timer fired. Ticks from a timer that has since been cancelled or
    /// replaced carry an older `generation` and are ignored.
    HandshakeTick {
        generation: u64,
    },
    RequestTimeout {
        key: CorrelationKey,
        watcher: WatcherId,
    },
    /// Fire-and-forget message.
    Send {
        msg_type: GcMsgType,
        body: Vec<u8>,
        protobuf: bool,
        reply: oneshot::Sender<Result<(), RequestError>>,
    },
    /// Message whose answer is matched back by `key`.
    Query {
        key: CorrelationKey,
        msg_type: GcMsgType,
        body: Vec<u8>,
        timeout: Duration,
        reply: Reply,
    },
    CasketContents {
        casket_id: u64,
        reply: Reply,
    },
    Inventory {
        reply: oneshot::Sender<Option<Vec<InventoryItem>>>,
    },
    GcStatus {
        reply: oneshot::Sender<Option<GcConnectionStatus>>,
    },
    PendingRequests {
        reply: oneshot::Sender<usize>,
    },
}

pub(crate) struct GcState {
    pub(crate) config: GcConfig,
    transport: Arc<dyn GcTransport>,
    pub(crate) session: SessionMachine,
    pub(crate) inventory: InventoryStore,
    pub(crate) correlator: Correlator,
    pub(crate) events: EventBus,
    status_tx: watch::Sender<SessionState>,
    timer_tx: mpsc::WeakSender<Command>,
    handshake_timer: Option<AbortHandle>,
    handshake_generation: u64,
}

impl GcState {
    pub(crate) fn new(
        config: GcConfig,
        transport: Arc<dyn GcTransport>,
        session: SessionMachine,
        events: EventBus,
        status_tx: watch::Sender<SessionState>,
        timer_tx: mpsc::WeakSender<Command>,
    ) -> Self {
        Self {
            config,
            transport,
            session,
            inventory: InventoryStore::new(),
            correlator: Correlator::new(),
            events,
            status_tx,
            timer_tx,
            handshake_timer: None,
            handshake_generation: 0,
        }
    }

    /// Send one message to the GC.
    ///
    /// # Errors
    ///
    /// [`RequestError::NotLoggedIn`] without touching the transport when there is
    /// no Steam identity yet; [`RequestError::Transport`] if the send fails.
    #[track_caller]
    pub(crate) fn send(
        &self,
        msg_type: GcMsgType,
        body: &[u8],
        protobuf: bool,
    ) -> Result<(), RequestError> {
        if !self.transport.is_logged_in() {
            return Err(RequestError::NotLoggedIn {
                message: format!("Cannot send {msg_type} before logging on to Steam"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let header = protobuf.then(ProtoHeader::default);
        self.transport
            .send_to_gc(self.config.app_id, msg_type.code(), header, body)?;

        trace!("Sent {msg_type} ({} bytes)", body.len());
        Ok(())
    }

    pub(crate) fn send_proto<M: Message>(
        &self,
        msg_type: GcMsgType,
        message: &M,
    ) -> Result<(), RequestError> {
        self.send(msg_type, &message.encode_to_vec(), true)
    }

    /// Carry out what the session machine decided, then publish the new state.
    pub(crate) fn apply_session(&mut self, actions: Vec<SessionAction>) {
        for action in actions {
            match action {
                SessionAction::SendHello => {
                    let hello = ClientHello {
                        version: Some(self.config.client_version),
                        ..Default::default()
                    };
                    if let Err(e) = self.send_proto(GcMsgType::ClientHello, &hello) {
                        debug!("Hello not sent: {e}");
                    }
                }
                SessionAction::ScheduleHandshake(delay) => {
                    self.cancel_handshake();
                    let tick = Command::HandshakeTick {
                        generation: self.handshake_generation,
                    };
                    self.handshake_timer = Some(self.spawn_timer(delay, tick));
                }
                SessionAction::CancelHandshake => self.cancel_handshake(),
                SessionAction::Emit(event) => self.events.emit(event),
            }
        }

        self.status_tx.send_replace(self.session.state());
    }

    /// Abort the armed timer. Its tick may already be queued, so the generation
    /// moves on as well.
    fn cancel_handshake(&mut self) {
        self.handshake_generation += 1;
        if let Some(timer) = self.handshake_timer.take() {
            timer.abort();
        }
    }

    pub(crate) fn handshake_generation(&self) -> u64 {
        self.handshake_generation
    }

    fn handshake_tick(&mut self, generation: u64) {
        if generation != self.handshake_generation || self.handshake_timer.is_none() {
            trace!("Ignoring stale handshake tick {generation}");
            return;
        }

        self.handshake_timer = None;
        let actions = self.session.handshake_tick();
        self.apply_session(actions);
    }

    /// Post `command` back to the actor after `delay`.
    fn spawn_timer(&self, delay: Duration, command: Command) -> AbortHandle {
        let timer_tx = self.timer_tx.clone();

        tokio::spawn(async move {
            TokioSleep(delay).await;
            if let Some(tx) = timer_tx.upgrade() {
                let _ = tx.send(command).await;
            }
        })
        .abort_handle()
    }

    fn query(
        &mut self,
        key: CorrelationKey,
        msg_type: GcMsgType,
        body: &[u8],
        timeout: Duration,
        reply: Reply,
    ) {
        if let Err(e) = self.send(msg_type, body, true) {
            let _ = reply.send(Err(e));
            return;
        }

        let watcher = self.correlator.next_watcher_id();
        let timer = self.spawn_timer(timeout, Command::RequestTimeout { key, watcher });
        self.correlator
            .register(key, watcher, reply, timeout, Some(timer));
    }

    fn request_timed_out(&mut self, key: CorrelationKey, watcher: WatcherId) {
        if !self.correlator.expire(key, watcher) {
            trace!("Timer for {key} fired after it resolved");
            return;
        }

        self.events.emit(GcEvent::RequestTimedOut(key));
        if let CorrelationKey::Inspect(item_id) = key {
            self.events.emit(GcEvent::InspectItemTimedOut {
                item_id: item_id.to_string(),
            });
        }
    }

    fn casket_contents(&mut self, casket_id: u64, reply: Reply) {
        if let Some(items) = self.inventory.known_casket_contents(&casket_id.to_string()) {
            debug!("Casket {casket_id} contents already known ({} items)", items.len());
            let _ = reply.send(Ok(Response::CasketContents(items)));
            return;
        }

        let body = CasketItem {
            casket_item_id: Some(casket_id),
            item_item_id: Some(casket_id),
        }
        .encode_to_vec();

        let timeout = self.config.casket_timeout();
        self.query(
            CorrelationKey::CasketContents(casket_id),
            GcMsgType::CasketItemLoadContents,
            &body,
            timeout,
            reply,
        );
    }

    pub(crate) fn handle_command(&mut self, command: Command) {
        match command {
            Command::HandshakeTick { generation } => self.handshake_tick(generation),
            Command::RequestTimeout { key, watcher } => self.request_timed_out(key, watcher),
            Command::Send {
                msg_type,
                body,
                protobuf,
                reply,
            } => {
                let _ = reply.send(self.send(msg_type, &body, protobuf));
            }
            Command::Query {
                key,
                msg_type,
                body,
                timeout,
                reply,
            } => self.query(key, msg_type, &body, timeout, reply),
            Command::CasketContents { casket_id, reply } => self.casket_contents(casket_id, reply),
            Command::Inventory { reply } => {
                let _ = reply.send(self.inventory.items().map(<[InventoryItem]>::to_vec));
            }
            Command::GcStatus { reply } => {
                let _ = reply.send(self.session.gc_status());
            }
            Command::PendingRequests { reply } => {
                let _ = reply.send(self.correlator.pending_count());
            }
        }
    }

    pub(crate) fn handle_transport_event(&mut self, dispatcher: &Dispatcher, event: TransportEvent) {
        let app_id = self.config.app_id;

        match event {
            TransportEvent::Message(message) if message.app_id == app_id => {
                dispatcher.dispatch(self, &message);
            }
            TransportEvent::AppLaunched(id) if id == app_id => {
                let actions = self.session.app_launched();
                self.apply_session(actions);
            }
            TransportEvent::AppQuit(id) if id == app_id => {
                let actions = self.session.app_quit();
                self.apply_session(actions);
            }
            TransportEvent::Disconnected => {
                info!("Steam connection lost");
                let actions = self.session.transport_lost();
                self.apply_session(actions);
            }
            TransportEvent::Error(message) => {
                warn!("Steam connection error: {message}");
                let actions = self.session.transport_lost();
                self.apply_session(actions);
            }
            other => trace!("Ignoring event for another app: {other:?}"),
        }
    }
}

/// Actor loop. Ends once every [`GcClient`](crate::client::GcClient) handle is dropped.
pub(crate) async fn run(
    mut state: GcState,
    mut command_rx: mpsc::Receiver<Command>,
    mut transport_rx: mpsc::Receiver<TransportEvent>,
) {
    let dispatcher = Dispatcher::new();
    let mut transport_open = true;

    info!("GC client actor started");

    loop {
        tokio::select! {
            command = command_rx.recv() => match command {
                Some(command) => state.handle_command(command),
                None => break,
            },
            event = transport_rx.recv(), if transport_open => match event {
                Some(event) => state.handle_transport_event(&dispatcher, event),
                None => {
                    info!("Transport event stream closed");
                    transport_open = false;
                }
            },
        }
    }

    state.cancel_handshake();
    info!("GC client actor stopped");
}
