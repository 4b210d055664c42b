//! Routes inbound GC messages to their handlers by message type.
//!
//! Unknown types are traced and dropped. A handler that fails to decode its
//! payload leaves state untouched; the failure becomes a
//! [`GcEvent::ProtocolError`] naming the message type and the session carries on.

mod handlers;
mod shared_object;

pub use shared_object::SharedObject;

use crate::client::actor::GcState;
use crate::error::DecodeError;
use crate::events::GcEvent;
use crate::proto::GcMsgType;
use crate::transport::{InboundMessage, InboundPayload};
use crate::wire::BinaryReader;

use common::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;

use log::{trace, warn};

type Handler = fn(&mut GcState, &mut BinaryReader<'_>) -> Result<(), DecodeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadKind {
    Protobuf,
    Binary,
}

#[derive(Clone, Copy)]
struct Route {
    kind: PayloadKind,
    handler: Handler,
}

impl Route {
    #[track_caller]
    fn check(&self, payload: &InboundPayload) -> Result<(), DecodeError> {
        let actual = if payload.is_protobuf() {
            PayloadKind::Protobuf
        } else {
            PayloadKind::Binary
        };

        if actual != self.kind {
            return Err(DecodeError::UnexpectedType {
                message: format!("Expected a {:?} payload, got {actual:?}", self.kind),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

pub(crate) struct Dispatcher {
    routes: HashMap<GcMsgType, Route>,
}

impl Dispatcher {
    pub(crate) fn new() -> Self {
        use PayloadKind::{Binary, Protobuf};

        let table: [(GcMsgType, PayloadKind, Handler); 14] = [
            (GcMsgType::ClientWelcome, Protobuf, handlers::client_welcome),
            (GcMsgType::ClientConnectionStatus, Protobuf, handlers::connection_status),
            (GcMsgType::ClientLogonFatalError, Protobuf, handlers::logon_fatal_error),
            (GcMsgType::SoCacheSubscribed, Protobuf, handlers::so_cache_subscribed),
            (GcMsgType::SoCreate, Protobuf, handlers::so_create),
            (GcMsgType::SoUpdate, Protobuf, handlers::so_update),
            (GcMsgType::SoDestroy, Protobuf, handlers::so_destroy),
            (GcMsgType::SoUpdateMultiple, Protobuf, handlers::so_update_multiple),
            (GcMsgType::ItemCustomizationNotification, Protobuf, handlers::item_customization),
            (GcMsgType::CraftResponse, Binary, handlers::craft_response),
            (GcMsgType::EconPreviewDataBlockResponse, Protobuf, handlers::preview_data_block),
            (GcMsgType::PlayersProfile, Protobuf, handlers::players_profile),
            (GcMsgType::MatchmakingGc2ClientHello, Protobuf, handlers::account_data),
            (GcMsgType::MatchList, Protobuf, handlers::match_list),
        ];

        let routes = table
            .into_iter()
            .map(|(msg_type, kind, handler)| (msg_type, Route { kind, handler }))
            .collect();

        Self { routes }
    }

    pub(crate) fn dispatch(&self, state: &mut GcState, message: &InboundMessage) {
        let route = GcMsgType::from_code(message.msg_type)
            .and_then(|msg_type| Some((msg_type, *self.routes.get(&msg_type)?)));

        let Some((msg_type, route)) = route else {
            state
                .events
                .debug(format!("Unhandled GC message {}", message.msg_type));
            return;
        };

        trace!(
            "Dispatching {msg_type} ({} bytes)",
            message.payload.bytes().len()
        );

        let result = route.check(&message.payload).and_then(|()| {
            let mut reader = BinaryReader::new(message.payload.bytes());
            (route.handler)(state, &mut reader)
        });

        if let Err(error) = result {
            warn!("Dropping {msg_type}: {error}");
            state.events.emit(GcEvent::ProtocolError {
                msg_type: msg_type.to_string(),
                error,
            });
        }
    }
}
