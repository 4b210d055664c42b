//! Public handle to a running GC client.
//!
//! [`GcClient::start`] spawns the actor in [`actor`] and returns a cheap,
//! cloneable handle. Every operation validates its arguments first (no network
//! activity on bad input), then becomes a command on the actor's queue. Queries
//! resolve exactly once: with the matching response, or with
//! [`RequestError::Timeout`].

pub(crate) mod actor;

use actor::{Command, GcState};

use crate::config::GcConfig;
use crate::correlator::{CorrelationKey, Response};
use crate::error::{ConfigError, RequestError};
use crate::events::{EventBus, GcEvent};
use crate::inspect::{InspectTarget, decode_share_token, parse_inspect_link};
use crate::proto::GcMsgType;
use crate::proto::cstrike::{
    ClientRequestPlayersProfile, MatchListRequestCurrentLiveGames,
    MatchListRequestLiveGameForUser, MatchListRequestRecentUserGames, PreviewDataBlockRequest,
};
use crate::proto::econ::CasketItem;
use crate::session::{HandshakeBackoff, SessionMachine, SessionState};
use crate::transport::{GcTransport, TransportEvent};
use crate::wire::BinaryWriter;

use common::ErrorLocation;
use models::{
    GcConnectionStatus, InspectOwner, InspectRequest, InspectRequestBuilder, InspectedItem,
    InventoryItem, PlayerProfile, SteamId,
};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use prost::Message;
use tokio::sync::{broadcast, mpsc, oneshot, watch};

const COMMAND_QUEUE_SIZE: usize = 100;
/// Craft recipe that lets the GC pick the recipe from the inputs.
pub const CRAFT_RECIPE_AUTO: i16 = -2;
/// Detail level asked for in profile requests.
const PROFILE_REQUEST_LEVEL: u32 = 32;
const NAME_TERMINATOR: u8 = 0;

#[derive(Clone)]
pub struct GcClient {
    command_tx: mpsc::Sender<Command>,
    status_rx: watch::Receiver<SessionState>,
    events: EventBus,
    config: Arc<GcConfig>,
}

impl GcClient {
    /// Spawn the client actor on the current tokio runtime.
    ///
    /// `transport_rx` carries everything the Steam connection reports; the actor
    /// keeps running after it closes for as long as any handle is alive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `config` is invalid.
    pub fn start(
        config: GcConfig,
        transport: Arc<dyn GcTransport>,
        transport_rx: mpsc::Receiver<TransportEvent>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
        let (status_tx, status_rx) = watch::channel(SessionState::NoSession);
        let events = EventBus::new(config.event_capacity);

        let session = SessionMachine::new(
            config.hello_delay(),
            HandshakeBackoff::new(config.backoff_initial(), config.backoff_max()),
        );

        let state = GcState::new(
            config.clone(),
            transport,
            session,
            events.clone(),
            status_tx,
            command_tx.downgrade(),
        );

        tokio::spawn(actor::run(state, command_rx, transport_rx));
        info!("GC client started for app {}", config.app_id);

        Ok(Self {
            command_tx,
            status_rx,
            events,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &GcConfig {
        &self.config
    }

    pub fn status(&self) -> SessionState {
        *self.status_rx.borrow()
    }

    /// Watch session state transitions.
    pub fn status_changes(&self) -> watch::Receiver<SessionState> {
        self.status_rx.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GcEvent> {
        self.events.subscribe()
    }

    /// Last connection status the GC reported, if any.
    pub async fn gc_status(&self) -> Result<Option<GcConnectionStatus>, RequestError> {
        self.ask(|reply| Command::GcStatus { reply }).await
    }

    /// Current inventory, or `None` before the first snapshot.
    pub async fn inventory(&self) -> Result<Option<Vec<InventoryItem>>, RequestError> {
        self.ask(|reply| Command::Inventory { reply }).await
    }

    pub async fn pending_request_count(&self) -> Result<usize, RequestError> {
        self.ask(|reply| Command::PendingRequests { reply }).await
    }

    /// Inspect an item owned by a player or listed on the market.
    pub async fn inspect_item(
        &self,
        owner: InspectOwner,
        asset_id: u64,
        d: u64,
    ) -> Result<InspectedItem, RequestError> {
        let builder = match owner {
            InspectOwner::Player(steam_id) => InspectRequestBuilder::default().with_owner(steam_id),
            InspectOwner::Market(listing_id) => {
                InspectRequestBuilder::default().with_market_listing(listing_id)
            }
        };
        let request = builder.with_asset_id(asset_id).with_d(d).build()?;

        self.inspect_request(request).await
    }

    /// Inspect from a `steam://` link, its `S…A…D…` / `M…A…D…` part, or a share token.
    ///
    /// Share tokens decode locally without contacting the GC.
    pub async fn inspect_link(&self, link: &str) -> Result<InspectedItem, RequestError> {
        match parse_inspect_link(link)? {
            InspectTarget::Request(request) => self.inspect_request(request).await,
            InspectTarget::ShareToken(token) => decode_share_token(&token),
        }
    }

    async fn inspect_request(&self, request: InspectRequest) -> Result<InspectedItem, RequestError> {
        let (param_s, param_m) = match request.owner {
            InspectOwner::Player(steam_id) => (Some(steam_id), Some(0)),
            InspectOwner::Market(listing_id) => (Some(0), Some(listing_id)),
        };

        let body = PreviewDataBlockRequest {
            param_s,
            param_a: Some(request.asset_id),
            param_d: Some(request.d),
            param_m,
        };

        let response = self
            .query(
                CorrelationKey::Inspect(request.asset_id),
                GcMsgType::EconPreviewDataBlockRequest,
                body.encode_to_vec(),
                self.config.inspect_timeout(),
            )
            .await?;

        match response {
            Response::Inspect(item) => Ok(item),
            other => Err(unexpected_response(&other)),
        }
    }

    pub async fn request_players_profile(
        &self,
        steam_id: u64,
    ) -> Result<PlayerProfile, RequestError> {
        let account_id = SteamId::from_u64(steam_id)?.account_id();

        let body = ClientRequestPlayersProfile {
            account_id: Some(account_id),
            request_level: Some(PROFILE_REQUEST_LEVEL),
        };

        let response = self
            .query(
                CorrelationKey::Profile(account_id),
                GcMsgType::ClientRequestPlayersProfile,
                body.encode_to_vec(),
                self.config.profile_timeout(),
            )
            .await?;

        match response {
            Response::Profile(profile) => Ok(profile),
            other => Err(unexpected_response(&other)),
        }
    }

    /// Ask for a player's recent matches; the answer arrives as [`GcEvent::MatchList`].
    pub async fn request_recent_games(&self, steam_id: u64) -> Result<(), RequestError> {
        let account_id = SteamId::from_u64(steam_id)?.account_id();
        let body = MatchListRequestRecentUserGames {
            accountid: Some(account_id),
        };
        self.send_proto(GcMsgType::MatchListRequestRecentUserGames, &body)
            .await
    }

    /// Ask for the match a player is in right now; answered by [`GcEvent::MatchList`].
    pub async fn request_live_game_for_user(&self, steam_id: u64) -> Result<(), RequestError> {
        let account_id = SteamId::from_u64(steam_id)?.account_id();
        let body = MatchListRequestLiveGameForUser {
            accountid: Some(account_id),
        };
        self.send_proto(GcMsgType::MatchListRequestLiveGameForUser, &body)
            .await
    }

    pub async fn request_current_live_games(&self) -> Result<(), RequestError> {
        self.send_proto(
            GcMsgType::MatchListRequestCurrentLiveGames,
            &MatchListRequestCurrentLiveGames {},
        )
        .await
    }

    /// Rename an item. A `name_tag_id` of 0 uses the item's own naming rather than a tag.
    pub async fn name_item(
        &self,
        name_tag_id: u64,
        item_id: u64,
        name: &str,
    ) -> Result<(), RequestError> {
        require_item_id(item_id, "Item")?;

        if name.is_empty() || name.as_bytes().contains(&NAME_TERMINATOR) {
            return Err(RequestError::Validation {
                message: String::from("Name must be non-empty and contain no NUL bytes"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = BinaryWriter::new()
            .put_u64_le(name_tag_id)
            .put_u64_le(item_id)
            .put_u8(NAME_TERMINATOR)
            .put_slice(name.as_bytes())
            .put_u8(NAME_TERMINATOR)
            .into_vec();

        self.send_binary(GcMsgType::NameItem, body).await
    }

    pub async fn delete_item(&self, item_id: u64) -> Result<(), RequestError> {
        require_item_id(item_id, "Item")?;
        let body = BinaryWriter::new().put_u64_le(item_id).into_vec();
        self.send_binary(GcMsgType::Delete, body).await
    }

    /// Craft `item_ids` together. `None` lets the GC pick the recipe.
    ///
    /// The result arrives as [`GcEvent::CraftingComplete`].
    pub async fn craft(&self, item_ids: &[u64], recipe: Option<i16>) -> Result<(), RequestError> {
        let count = u16::try_from(item_ids.len())
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| RequestError::Validation {
                message: format!("Craft needs 1-{} items, got {}", u16::MAX, item_ids.len()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        for item_id in item_ids {
            require_item_id(*item_id, "Craft input")?;
        }

        let body = item_ids
            .iter()
            .fold(
                BinaryWriter::new()
                    .put_i16_le(recipe.unwrap_or(CRAFT_RECIPE_AUTO))
                    .put_u16_le(count),
                |writer, item_id| writer.put_u64_le(*item_id),
            )
            .into_vec();

        self.send_binary(GcMsgType::Craft, body).await
    }

    pub async fn add_to_casket(&self, casket_id: u64, item_id: u64) -> Result<(), RequestError> {
        self.casket_move(GcMsgType::CasketItemAdd, casket_id, item_id)
            .await
    }

    pub async fn remove_from_casket(
        &self,
        casket_id: u64,
        item_id: u64,
    ) -> Result<(), RequestError> {
        self.casket_move(GcMsgType::CasketItemExtract, casket_id, item_id)
            .await
    }

    async fn casket_move(
        &self,
        msg_type: GcMsgType,
        casket_id: u64,
        item_id: u64,
    ) -> Result<(), RequestError> {
        require_item_id(casket_id, "Casket")?;
        require_item_id(item_id, "Item")?;

        let body = CasketItem {
            casket_item_id: Some(casket_id),
            item_item_id: Some(item_id),
        };
        self.send_proto(msg_type, &body).await
    }

    /// Items stored in `casket_id`, loading them from the GC unless all are known.
    pub async fn get_casket_contents(
        &self,
        casket_id: u64,
    ) -> Result<Vec<InventoryItem>, RequestError> {
        require_item_id(casket_id, "Casket")?;

        let (reply, reply_rx) = oneshot::channel();
        self.command(Command::CasketContents { casket_id, reply })
            .await?;

        match reply_rx.await.map_err(|_| actor_stopped())?? {
            Response::CasketContents(items) => Ok(items),
            other => Err(unexpected_response(&other)),
        }
    }

    async fn query(
        &self,
        key: CorrelationKey,
        msg_type: GcMsgType,
        body: Vec<u8>,
        timeout: Duration,
    ) -> Result<Response, RequestError> {
        let (reply, reply_rx) = oneshot::channel();
        self.command(Command::Query {
            key,
            msg_type,
            body,
            timeout,
            reply,
        })
        .await?;

        reply_rx.await.map_err(|_| actor_stopped())?
    }

    async fn send_proto<M: Message>(
        &self,
        msg_type: GcMsgType,
        message: &M,
    ) -> Result<(), RequestError> {
        self.send(msg_type, message.encode_to_vec(), true).await
    }

    async fn send_binary(&self, msg_type: GcMsgType, body: Vec<u8>) -> Result<(), RequestError> {
        self.send(msg_type, body, false).await
    }

    async fn send(
        &self,
        msg_type: GcMsgType,
        body: Vec<u8>,
        protobuf: bool,
    ) -> Result<(), RequestError> {
        self.ask(|reply| Command::Send {
            msg_type,
            body,
            protobuf,
            reply,
        })
        .await?
    }

    async fn ask<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, RequestError> {
        let (reply, reply_rx) = oneshot::channel();
        self.command(command(reply)).await?;
        reply_rx.await.map_err(|_| actor_stopped())
    }

    async fn command(&self, command: Command) -> Result<(), RequestError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| actor_stopped())
    }
}

#[track_caller]
fn require_item_id(id: u64, what: &str) -> Result<(), RequestError> {
    if id == 0 {
        return Err(RequestError::Validation {
            message: format!("{what} id must be non-zero"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
fn actor_stopped() -> RequestError {
    RequestError::ActorStopped {
        message: String::from("GC client actor is no longer running"),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn unexpected_response(response: &Response) -> RequestError {
    RequestError::UnexpectedResponse {
        message: format!("Response of the wrong kind: {response:?}"),
        location: ErrorLocation::from(Location::caller()),
    }
}
