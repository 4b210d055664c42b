//! Turns raw `CSOEconItem` records into [`InventoryItem`]s.

use crate::attributes::{self, DecodedAttributes};
use crate::error::DecodeError;
use crate::proto::econ::EconItem;

use common::ErrorLocation;
use models::InventoryItem;

use std::panic::Location;

use prost::Message;

/// Definition index of the storage unit ("casket").
pub const CASKET_DEF_INDEX: u32 = 1201;

/// Set on `inventory` for items the player has not placed yet.
const UNPOSITIONED_FLAG: u32 = 1 << 30;
const POSITION_MASK: u32 = 0xFFFF;

pub fn position(inventory: u32) -> u32 {
    if inventory & UNPOSITIONED_FLAG != 0 {
        0
    } else {
        inventory & POSITION_MASK
    }
}

/// Decode one serialized `CSOEconItem` and normalize it.
#[track_caller]
pub fn decode_item(bytes: &[u8]) -> Result<InventoryItem, DecodeError> {
    let raw = EconItem::decode(bytes)?;
    normalize(&raw)
}

/// Recompute every field of the item from `raw`.
#[track_caller]
pub fn normalize(raw: &EconItem) -> Result<InventoryItem, DecodeError> {
    let id = raw.id.ok_or_else(|| DecodeError::UnexpectedType {
        message: String::from("Item record has no id"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let def_index = raw.def_index.unwrap_or_default();
    let inventory = raw.inventory.unwrap_or_default();

    let DecodedAttributes {
        paint_index,
        paint_seed,
        paint_wear,
        custom_name,
        tradable_after,
        kill_eater_value,
        kill_eater_score_type,
        quest_id,
        casket_id,
        casket_contained_item_count,
        stickers,
        keychains,
        variations,
    } = attributes::decode(&raw.attribute)?;

    let casket_contained_item_count = if def_index == CASKET_DEF_INDEX {
        Some(casket_contained_item_count.unwrap_or(0))
    } else {
        None
    };

    Ok(InventoryItem {
        id: id.to_string(),
        original_id: raw.original_id.map(|original| original.to_string()),
        account_id: raw.account_id,
        def_index,
        inventory,
        position: position(inventory),
        quantity: raw.quantity,
        level: raw.level,
        quality: raw.quality,
        flags: raw.flags,
        origin: raw.origin,
        rarity: raw.rarity,
        in_use: raw.in_use,
        style: raw.style,
        custom_name: custom_name.or_else(|| raw.custom_name.clone()),
        custom_desc: raw.custom_desc.clone(),
        paint_index,
        paint_seed,
        paint_wear,
        tradable_after,
        kill_eater_value,
        kill_eater_score_type,
        quest_id,
        casket_id,
        casket_contained_item_count,
        stickers,
        keychains,
        variations,
    })
}
