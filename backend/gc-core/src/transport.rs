//! Seam to the Steam connection that actually carries GC traffic.
//!
//! The client never frames bytes itself: it hands a message type, an optional
//! protobuf header and a body to [`GcTransport::send_to_gc`], and consumes
//! [`TransportEvent`]s from whatever drives the connection.

use crate::error::TransportError;

/// Job routing header of protobuf-framed GC messages.
///
/// Its presence is what marks a message as protobuf rather than binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtoHeader {
    pub job_id_source: Option<u64>,
    pub job_id_target: Option<u64>,
}

pub trait GcTransport: Send + Sync {
    fn send_to_gc(
        &self,
        app_id: u32,
        msg_type: u32,
        header: Option<ProtoHeader>,
        body: &[u8],
    ) -> Result<(), TransportError>;

    /// Whether an authenticated Steam identity exists; sends are refused otherwise.
    fn is_logged_in(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundPayload {
    Protobuf(Vec<u8>),
    Binary(Vec<u8>),
}

impl InboundPayload {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Protobuf(bytes) | Self::Binary(bytes) => bytes,
        }
    }

    pub fn is_protobuf(&self) -> bool {
        matches!(self, Self::Protobuf(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub app_id: u32,
    pub msg_type: u32,
    pub payload: InboundPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Message(InboundMessage),
    /// The player entered the given app.
    AppLaunched(u32),
    AppQuit(u32),
    Disconnected,
    Error(String),
}
