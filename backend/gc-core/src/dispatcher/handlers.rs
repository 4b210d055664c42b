use super::SharedObject;

use crate::client::actor::GcState;
use crate::correlator::{CorrelationKey, Response};
use crate::error::{DecodeError, SessionError};
use crate::events::{EventBus, GcEvent};
use crate::inspect::inspected_item;
use crate::inventory::InventoryChange;
use crate::item;
use crate::proto::base::{
    ClientWelcome, ConnectionStatus, SoCacheSubscribed, SoMultipleObject, SoMultipleObjects,
    SoSingleObject,
};
use crate::proto::cstrike::{
    ClientLogonFatalError, MatchList as MatchListMessage, MatchmakingClient2GcHello,
    MatchmakingGc2ClientHello, PlayersProfile, PreviewDataBlockResponse,
};
use crate::proto::econ::{EconItem, ItemCustomizationNotification};
use crate::proto::{CASKET_CONTENTS_NOTIFICATION, GcMsgType, SO_TYPE_ECON_ITEM};
use crate::wire::BinaryReader;

use common::ErrorLocation;
use models::{
    Commendation, GcConnectionStatus, InventoryItem, MatchList, MatchSummary, PlayerProfile,
    PlayerRanking,
};

use std::panic::Location;

use log::{debug, warn};
use prost::Message;

pub(super) fn client_welcome(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let welcome = ClientWelcome::decode(reader.read_rest())?;
    state.events.debug(format!(
        "GC welcome, version {}",
        welcome.version.unwrap_or_default()
    ));

    let items = snapshot_items(
        &state.events,
        GcMsgType::ClientWelcome,
        &welcome.outofdate_subscribed_caches,
    )
    .unwrap_or_default();

    let actions = state.session.welcome();
    state.inventory.load_snapshot(items);
    state.apply_session(actions);

    if let Err(e) = state.send_proto(
        GcMsgType::MatchmakingClient2GcHello,
        &MatchmakingClient2GcHello {},
    ) {
        debug!("Account data not requested: {e}");
    }

    Ok(())
}

/// Items of every type-1 object list in `caches`; `None` if there was none.
///
/// A malformed item is skipped and reported; the rest of the snapshot loads.
fn snapshot_items(
    events: &EventBus,
    msg_type: GcMsgType,
    caches: &[SoCacheSubscribed],
) -> Option<Vec<InventoryItem>> {
    let mut items: Option<Vec<InventoryItem>> = None;

    for objects in caches.iter().flat_map(|cache| &cache.objects) {
        let type_id = objects.type_id.unwrap_or_default();
        if type_id != SO_TYPE_ECON_ITEM {
            debug!(
                "Ignoring {} cached objects of type {type_id}",
                objects.object_data.len()
            );
            continue;
        }

        let snapshot = items.get_or_insert_with(Vec::new);

        for data in &objects.object_data {
            let decoded = SharedObject::decode(type_id, data).and_then(|object| match object {
                SharedObject::Item(raw) => item::normalize(&raw).map(Some),
                SharedObject::Unhandled { .. } => Ok(None),
            });

            match decoded {
                Ok(Some(decoded)) => snapshot.push(decoded),
                Ok(None) => {}
                Err(error) => {
                    warn!("Skipping malformed item in snapshot: {error}");
                    events.emit(GcEvent::ProtocolError {
                        msg_type: msg_type.to_string(),
                        error,
                    });
                }
            }
        }
    }

    items
}

pub(super) fn so_cache_subscribed(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let cache = SoCacheSubscribed::decode(reader.read_rest())?;

    if let Some(items) = snapshot_items(
        &state.events,
        GcMsgType::SoCacheSubscribed,
        std::slice::from_ref(&cache),
    ) {
        state.inventory.load_snapshot(items);
    }

    Ok(())
}

pub(super) fn connection_status(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let raw = ConnectionStatus::decode(reader.read_rest())?;
    let status = GcConnectionStatus::from_code(
        raw.status
            .unwrap_or(GcConnectionStatus::NoSession.code()),
    );

    state.events.debug(format!("GC connection status: {status}"));
    state
        .events
        .emit(GcEvent::ConnectionStatusChanged { status, raw });

    let actions = state.session.connection_status(status);
    state.apply_session(actions);
    Ok(())
}

pub(super) fn logon_fatal_error(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let raw = ClientLogonFatalError::decode(reader.read_rest())?;

    let error = SessionError::FatalLogon {
        code: raw.errorcode.unwrap_or_default(),
        message: raw.message.unwrap_or_default(),
        country: raw.country,
        location: ErrorLocation::from(Location::caller()),
    };

    let actions = state.session.fatal_logon(error);
    state.apply_session(actions);
    Ok(())
}

/// The item carried by a single-object message, if it is one.
fn single_item(
    events: &EventBus,
    reader: &mut BinaryReader<'_>,
) -> Result<Option<EconItem>, DecodeError> {
    let object = SoSingleObject::decode(reader.read_rest())?;
    let type_id = object.type_id.unwrap_or_default();

    match SharedObject::decode(type_id, object.object_data.as_deref().unwrap_or_default())? {
        SharedObject::Item(raw) => Ok(Some(raw)),
        SharedObject::Unhandled { type_id } => {
            events.debug(format!("Ignoring shared object of type {type_id}"));
            Ok(None)
        }
    }
}

fn emit_change(events: &EventBus, change: InventoryChange) {
    let event = match change {
        InventoryChange::Acquired(item) => GcEvent::ItemAcquired(item),
        InventoryChange::Changed { old, new } => GcEvent::ItemChanged { old, new },
        InventoryChange::Removed { id, item } => GcEvent::ItemRemoved { id, item },
    };
    events.emit(event);
}

pub(super) fn so_create(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let Some(raw) = single_item(&state.events, reader)? else {
        return Ok(());
    };

    if let Some(change) = state.inventory.create(&raw)? {
        emit_change(&state.events, change);
    }
    Ok(())
}

pub(super) fn so_update(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let Some(raw) = single_item(&state.events, reader)? else {
        return Ok(());
    };

    if let Some(change) = state.inventory.update(&raw)? {
        emit_change(&state.events, change);
    }
    Ok(())
}

pub(super) fn so_destroy(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let Some(raw) = single_item(&state.events, reader)? else {
        return Ok(());
    };

    if let Some(change) = state.inventory.remove(&raw) {
        emit_change(&state.events, change);
    }
    Ok(())
}

pub(super) fn so_update_multiple(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let message = SoMultipleObjects::decode(reader.read_rest())?;
    let mut errors = Vec::new();

    let mut items = |objects: &[SoMultipleObject]| -> Vec<EconItem> {
        objects
            .iter()
            .filter_map(|object| {
                let type_id = object.type_id.unwrap_or_default();
                let data = object.object_data.as_deref().unwrap_or_default();
                match SharedObject::decode(type_id, data) {
                    Ok(SharedObject::Item(raw)) => Some(raw),
                    Ok(SharedObject::Unhandled { type_id }) => {
                        debug!("Ignoring shared object of type {type_id} in bulk update");
                        None
                    }
                    Err(error) => {
                        warn!("Skipping undecodable object in bulk update: {error}");
                        errors.push(error);
                        None
                    }
                }
            })
            .collect()
    };

    let added = items(&message.objects_added);
    let modified = items(&message.objects_modified);
    let removed = items(&message.objects_removed);

    let outcome = state.inventory.apply_bulk(&added, &modified, &removed);
    errors.extend(outcome.errors);

    for change in outcome.changes {
        emit_change(&state.events, change);
    }

    for error in errors {
        state.events.emit(GcEvent::ProtocolError {
            msg_type: GcMsgType::SoUpdateMultiple.to_string(),
            error,
        });
    }

    Ok(())
}

pub(super) fn item_customization(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let notification = ItemCustomizationNotification::decode(reader.read_rest())?;
    let notification_type = notification.request.unwrap_or_default();

    state.events.emit(GcEvent::ItemCustomizationNotification {
        item_ids: notification.item_id.iter().map(u64::to_string).collect(),
        notification_type,
    });

    if notification_type == CASKET_CONTENTS_NOTIFICATION
        && let Some(&casket_id) = notification.item_id.first()
    {
        let contents = state.inventory.casket_contents(&casket_id.to_string());
        state.correlator.resolve(
            CorrelationKey::CasketContents(casket_id),
            Response::CasketContents(contents),
        );
    }

    Ok(())
}

/// `u16 recipe, u32 unused, u16 count, count × u64 item id`.
pub(super) fn craft_response(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let recipe = reader.read_u16_le()?;
    let _unused = reader.read_u32_le()?;
    let count = reader.read_u16_le()?;

    let item_ids = (0..count)
        .map(|_| reader.read_u64_le().map(|id| id.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    state
        .events
        .emit(GcEvent::CraftingComplete { recipe, item_ids });
    Ok(())
}

pub(super) fn preview_data_block(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let response = PreviewDataBlockResponse::decode(reader.read_rest())?;
    let block = response.iteminfo.ok_or_else(|| DecodeError::UnexpectedType {
        message: String::from("Preview response carries no item"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let inspected = inspected_item(&block);
    state.events.emit(GcEvent::InspectItemInfo(inspected.clone()));
    state.correlator.resolve(
        CorrelationKey::Inspect(block.itemid.unwrap_or_default()),
        Response::Inspect(inspected),
    );
    Ok(())
}

pub(super) fn players_profile(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let message = PlayersProfile::decode(reader.read_rest())?;

    for raw in &message.account_profiles {
        let profile = player_profile(raw);
        state.events.emit(GcEvent::PlayersProfile(profile.clone()));
        state.correlator.resolve(
            CorrelationKey::Profile(profile.account_id),
            Response::Profile(profile),
        );
    }
    Ok(())
}

pub(super) fn account_data(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let raw = MatchmakingGc2ClientHello::decode(reader.read_rest())?;
    state.events.emit(GcEvent::AccountData(player_profile(&raw)));
    Ok(())
}

pub(super) fn match_list(
    state: &mut GcState,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let raw = MatchListMessage::decode(reader.read_rest())?;

    let matches = raw
        .matches
        .iter()
        .map(|info| {
            let watchable = info.watchablematchinfo.as_ref();
            MatchSummary {
                match_id: info.matchid.map(|id| id.to_string()),
                match_time: info.matchtime,
                watchable_match_id: watchable
                    .and_then(|w| w.match_id)
                    .map(|id| id.to_string()),
                server_ip: watchable.and_then(|w| w.server_ip),
                tv_port: watchable.and_then(|w| w.tv_port),
            }
        })
        .collect();

    state.events.emit(GcEvent::MatchList(MatchList {
        request_id: raw.msgrequestid,
        account_id: raw.accountid,
        server_time: raw.servertime,
        matches,
    }));
    Ok(())
}

fn player_profile(raw: &MatchmakingGc2ClientHello) -> PlayerProfile {
    PlayerProfile {
        account_id: raw.account_id.unwrap_or_default(),
        player_level: raw.player_level,
        player_cur_xp: raw.player_cur_xp,
        vac_banned: raw.vac_banned,
        penalty_seconds: raw.penalty_seconds,
        penalty_reason: raw.penalty_reason,
        ranking: raw.ranking.as_ref().map(|ranking| PlayerRanking {
            rank_id: ranking.rank_id,
            wins: ranking.wins,
            rank_type_id: ranking.rank_type_id,
        }),
        commendation: raw.commendation.as_ref().map(|commendation| Commendation {
            friendly: commendation.cmd_friendly,
            teaching: commendation.cmd_teaching,
            leader: commendation.cmd_leader,
        }),
    }
}
