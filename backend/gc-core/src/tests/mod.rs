mod correlator;
mod inventory;
mod item;
mod logger;
mod session;

use crate::client::actor::{Command, GcState};
use crate::config::GcConfig;
use crate::dispatcher::Dispatcher;
use crate::error::TransportError;
use crate::events::{EventBus, GcEvent};
use crate::proto::econ::{EconItem, EconItemAttribute};
use crate::session::{HandshakeBackoff, SessionMachine, SessionState};
use crate::transport::{GcTransport, ProtoHeader};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast::Receiver;
use tokio::sync::{mpsc, watch};

pub(crate) fn attr_u32(def_index: u32, value: u32) -> EconItemAttribute {
    EconItemAttribute {
        def_index: Some(def_index),
        value: None,
        value_bytes: Some(value.to_le_bytes().to_vec()),
    }
}

pub(crate) fn attr_f32(def_index: u32, value: f32) -> EconItemAttribute {
    EconItemAttribute {
        def_index: Some(def_index),
        value: None,
        value_bytes: Some(value.to_le_bytes().to_vec()),
    }
}

pub(crate) fn attr_bytes(def_index: u32, bytes: &[u8]) -> EconItemAttribute {
    EconItemAttribute {
        def_index: Some(def_index),
        value: None,
        value_bytes: Some(bytes.to_vec()),
    }
}

pub(crate) fn econ_item(id: u64, def_index: u32) -> EconItem {
    EconItem {
        id: Some(id),
        def_index: Some(def_index),
        inventory: Some(1),
        ..Default::default()
    }
}

/// Sent message as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SentMessage {
    pub msg_type: u32,
    pub header: Option<ProtoHeader>,
    pub body: Vec<u8>,
}

pub(crate) struct RecordingTransport {
    logged_in: AtomicBool,
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingTransport {
    pub(crate) fn new(logged_in: bool) -> Self {
        Self {
            logged_in: AtomicBool::new(logged_in),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl GcTransport for RecordingTransport {
    fn send_to_gc(
        &self,
        _app_id: u32,
        msg_type: u32,
        header: Option<ProtoHeader>,
        body: &[u8],
    ) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(SentMessage {
            msg_type,
            header,
            body: body.to_vec(),
        });
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }
}

/// Actor state wired to a recording transport, driven directly by the tests.
pub(crate) struct Harness {
    pub state: GcState,
    pub transport: Arc<RecordingTransport>,
    pub events: Receiver<GcEvent>,
    pub dispatcher: Dispatcher,
    // Keeps the timer channel alive for the weak sender.
    _commands: mpsc::Sender<Command>,
}

pub(crate) fn harness() -> Harness {
    let config = GcConfig::default();
    let transport = Arc::new(RecordingTransport::new(true));
    let bus = EventBus::new(config.event_capacity);
    let events = bus.subscribe();
    let (status_tx, _) = watch::channel(SessionState::NoSession);
    let (commands, _command_rx) = mpsc::channel(16);
    let session = SessionMachine::new(
        config.hello_delay(),
        HandshakeBackoff::new(config.backoff_initial(), config.backoff_max()),
    );

    let state = GcState::new(
        config,
        transport.clone(),
        session,
        bus,
        status_tx,
        commands.downgrade(),
    );

    Harness {
        state,
        transport,
        events,
        dispatcher: Dispatcher::new(),
        _commands: commands,
    }
}

pub(crate) fn drain(events: &mut Receiver<GcEvent>) -> Vec<GcEvent> {
    std::iter::from_fn(|| events.try_recv().ok()).collect()
}
