//! Test helpers for GC client integration tests.
//!
//! This module provides:
//! - A recording transport standing in for the Steam connection
//! - A started client wired to that transport
//! - Builders for inbound GC messages
//! - Waiting on a specific event

use gc_core::attributes::CUSTOM_NAME;
use gc_core::error::TransportError;
use gc_core::proto::GcMsgType;
use gc_core::proto::base::{ClientWelcome, SoCacheSubscribed, SoCacheSubscribedType};
use gc_core::proto::econ::{EconItem, EconItemAttribute};
use gc_core::transport::{
    GcTransport, InboundMessage, InboundPayload, ProtoHeader, TransportEvent,
};
use gc_core::{CSGO_APP_ID, GcClient, GcConfig, GcEvent};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use prost::Message;
use tokio::sync::broadcast::Receiver;
use tokio::sync::mpsc;

/// Generous bound for event waits; time is paused in these tests, so it only
/// elapses while every task is idle.
pub const EVENT_WAIT: Duration = Duration::from_secs(5);

/// A Steam identity that passes `SteamId` validation.
pub const TEST_STEAM_ID: u64 = 76561198084749846;

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub msg_type: u32,
    pub header: Option<ProtoHeader>,
    pub body: Vec<u8>,
}

/// Transport double: records every outbound message.
pub struct MockTransport {
    logged_in: AtomicBool,
    sent: Mutex<Vec<SentMessage>>,
}

impl MockTransport {
    pub fn new(logged_in: bool) -> Self {
        Self {
            logged_in: AtomicBool::new(logged_in),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_of(&self, msg_type: GcMsgType) -> Vec<SentMessage> {
        self.sent()
            .into_iter()
            .filter(|message| message.msg_type == msg_type.code())
            .collect()
    }
}

impl GcTransport for MockTransport {
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

pub struct TestClient {
    pub client: GcClient,
    pub transport: Arc<MockTransport>,
    pub transport_tx: mpsc::Sender<TransportEvent>,
    pub events: Receiver<GcEvent>,
}

impl TestClient {
    /// Deliver a protobuf GC message as if Steam had received it.
    pub async fn deliver<M: Message>(&self, msg_type: GcMsgType, message: &M) {
        self.transport_tx
            .send(TransportEvent::Message(InboundMessage {
                app_id: CSGO_APP_ID,
                msg_type: msg_type.code(),
                payload: InboundPayload::Protobuf(message.encode_to_vec()),
            }))
            .await
            .expect("Actor should be listening for transport events");
    }

    pub async fn signal(&self, event: TransportEvent) {
        self.transport_tx
            .send(event)
            .await
            .expect("Actor should be listening for transport events");
    }

    /// Wait for the first event matching `predicate`, skipping everything before it.
    pub async fn wait_for(&mut self, predicate: impl Fn(&GcEvent) -> bool) -> GcEvent {
        tokio::time::timeout(EVENT_WAIT, async {
            loop {
                let event = self.events.recv().await.expect("Event bus closed");
                if predicate(&event) {
                    return event;
                }
            }
        })
        .await
        .expect("Timed out waiting for event")
    }

    /// Launch the game and complete the handshake with `items` as the inventory.
    pub async fn establish_session(&mut self, items: Vec<EconItem>) {
        self.signal(TransportEvent::AppLaunched(CSGO_APP_ID)).await;
        self.deliver(GcMsgType::ClientWelcome, &welcome(items))
            .await;
        self.wait_for(|event| matches!(event, GcEvent::Connected))
            .await;
    }
}

pub fn start_client(config: GcConfig, logged_in: bool) -> TestClient {
    let transport = Arc::new(MockTransport::new(logged_in));
    let (transport_tx, transport_rx) = mpsc::channel(32);

    let client = GcClient::start(config, transport.clone(), transport_rx)
        .expect("Test config should be valid");
    let events = client.subscribe();

    TestClient {
        client,
        transport,
        transport_tx,
        events,
    }
}

pub fn econ_item(id: u64, def_index: u32) -> EconItem {
    EconItem {
        id: Some(id),
        def_index: Some(def_index),
        inventory: Some(1),
        ..Default::default()
    }
}

pub fn attribute(def_index: u32, value_bytes: Vec<u8>) -> EconItemAttribute {
    EconItemAttribute {
        def_index: Some(def_index),
        value: None,
        value_bytes: Some(value_bytes),
    }
}

pub fn named_item(id: u64, name: &str) -> EconItem {
    let mut value = vec![0x00, 0x00];
    value.extend_from_slice(name.as_bytes());

    let mut item = econ_item(id, 7);
    item.attribute.push(attribute(CUSTOM_NAME, value));
    item
}

pub fn welcome(items: Vec<EconItem>) -> ClientWelcome {
    ClientWelcome {
        version: Some(2000202),
        outofdate_subscribed_caches: vec![SoCacheSubscribed {
            objects: vec![SoCacheSubscribedType {
                type_id: Some(1),
                object_data: items.iter().map(Message::encode_to_vec).collect(),
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}
