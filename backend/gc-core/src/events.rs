//! Consumer-facing notifications.
//!
//! Subject-keyed events carry their key (`item_id`, `account_id`) as a field, so
//! a subscriber filters on data instead of on a concatenated event name.

use crate::correlator::CorrelationKey;
use crate::error::{DecodeError, SessionError};
use crate::proto::base::ConnectionStatus;

use models::{GcConnectionStatus, InspectedItem, InventoryItem, MatchList, PlayerProfile};

use log::debug;
use tokio::sync::broadcast;

#[derive(Debug, Clone)]
pub enum GcEvent {
    Debug(String),
    /// A message could not be decoded and was dropped.
    ProtocolError {
        msg_type: String,
        error: DecodeError,
    },
    Connected,
    Disconnected(GcConnectionStatus),
    ConnectionStatusChanged {
        status: GcConnectionStatus,
        raw: ConnectionStatus,
    },
    FatalLogon(SessionError),
    ItemAcquired(InventoryItem),
    ItemChanged {
        old: InventoryItem,
        new: InventoryItem,
    },
    ItemRemoved {
        id: String,
        item: Option<InventoryItem>,
    },
    ItemCustomizationNotification {
        item_ids: Vec<String>,
        notification_type: u32,
    },
    InspectItemInfo(InspectedItem),
    InspectItemTimedOut {
        item_id: String,
    },
    RequestTimedOut(CorrelationKey),
    AccountData(PlayerProfile),
    MatchList(MatchList),
    PlayersProfile(PlayerProfile),
    CraftingComplete {
        recipe: u16,
        item_ids: Vec<String>,
    },
}

/// Broadcast fan-out of [`GcEvent`]s; sending never fails for lack of listeners.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<GcEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GcEvent> {
        self.sender.subscribe()
    }

    pub fn emit(&self, event: GcEvent) {
        // No subscribers is fine.
        let _ = self.sender.send(event);
    }

    pub fn debug(&self, message: impl Into<String>) {
        let message = message.into();
        debug!("{message}");
        self.emit(GcEvent::Debug(message));
    }
}
