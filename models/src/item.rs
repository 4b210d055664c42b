use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One item owned by the player, as mirrored from the GC's shared-object cache.
///
/// Every field is recomputed from the raw record on each update; nothing is merged.
/// Optional fields are `None` when the corresponding attribute was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 64-bit item id rendered in base 10.
    pub id: String,
    pub original_id: Option<String>,
    pub account_id: Option<u32>,
    pub def_index: u32,
    /// Raw packed position/flags field.
    pub inventory: u32,
    /// Backpack position; 0 for new, unpositioned items.
    pub position: u32,
    pub quantity: Option<u32>,
    pub level: Option<u32>,
    pub quality: Option<u32>,
    pub flags: Option<u32>,
    pub origin: Option<u32>,
    pub rarity: Option<u32>,
    pub in_use: Option<bool>,
    pub style: Option<u32>,
    pub custom_name: Option<String>,
    pub custom_desc: Option<String>,
    pub paint_index: Option<u32>,
    pub paint_seed: Option<u32>,
    pub paint_wear: Option<f32>,
    pub tradable_after: Option<DateTime<Utc>>,
    pub kill_eater_value: Option<u32>,
    pub kill_eater_score_type: Option<u32>,
    pub quest_id: Option<u32>,
    /// Storage unit this item currently lives in.
    pub casket_id: Option<String>,
    /// Only set when this item is itself a storage unit.
    pub casket_contained_item_count: Option<u32>,
    pub stickers: Vec<StickerSlot>,
    pub keychains: Vec<StickerSlot>,
    pub variations: Vec<StickerSlot>,
}

impl InventoryItem {
    /// True when this item sits inside the storage unit `casket_id`.
    pub fn is_in_casket(&self, casket_id: &str) -> bool {
        self.casket_id.as_deref() == Some(casket_id)
    }
}

/// Shared shape for stickers, keychains and variations.
///
/// All optional members are always present in serialized output (as `null`
/// when unknown) so consumers see the same field set for every slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StickerSlot {
    pub slot: u32,
    pub sticker_id: u32,
    pub wear: Option<f32>,
    pub scale: Option<f32>,
    pub rotation: Option<f32>,
    pub tint_id: Option<u32>,
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub offset_z: Option<f32>,
    pub pattern: Option<u32>,
    pub highlight_reel: Option<u32>,
    pub wrapped_sticker: Option<u32>,
}
