//! Typed decoding of an item's generic attribute list.
//!
//! The GC attaches attributes to items as `(def_index, value_bytes)` pairs. Each
//! known definition index has a fixed little-endian layout: `u32`, `f32`, or a
//! length-prefixed UTF-8 string. Absent attributes leave the output unset; only a
//! present-but-malformed value is an error.

use crate::error::DecodeError;
use crate::proto::econ::EconItemAttribute;
use crate::wire::BinaryReader;

use models::StickerSlot;

use chrono::{DateTime, Utc};

pub const PAINT_INDEX: u32 = 6;
pub const PAINT_SEED: u32 = 7;
pub const PAINT_WEAR: u32 = 8;
pub const TRADABLE_AFTER: u32 = 75;
pub const KILL_EATER_VALUE: u32 = 80;
pub const KILL_EATER_SCORE_TYPE: u32 = 81;
pub const CUSTOM_NAME: u32 = 111;
pub const QUEST_ID: u32 = 168;
pub const CASKET_ITEM_COUNT: u32 = 270;
pub const CASKET_ID_LOW: u32 = 272;
pub const CASKET_ID_HIGH: u32 = 273;

pub const STICKER_SLOTS: u32 = 6;
const STICKER_ID_BASE: u32 = 113;
const STICKER_STRIDE: u32 = 4;
const STICKER_OFFSET_BASE: u32 = 278;
const STICKER_OFFSET_STRIDE: u32 = 2;
const STICKER_SCHEMA_BASE: u32 = 290;

pub const KEYCHAIN_ID: u32 = 299;
pub const KEYCHAIN_OFFSET_X: u32 = 300;
pub const KEYCHAIN_OFFSET_Y: u32 = 301;
pub const KEYCHAIN_OFFSET_Z: u32 = 302;
pub const KEYCHAIN_PATTERN: u32 = 306;
pub const KEYCHAIN_HIGHLIGHT_REEL: u32 = 314;
pub const KEYCHAIN_WRAPPED_STICKER: u32 = 321;

pub const VARIATION_ID: u32 = 330;
pub const VARIATION_WEAR: u32 = 331;

/// Custom names carry a two-byte prefix ahead of the UTF-8 text.
const STRING_PREFIX_LEN: usize = 2;

pub const fn sticker_id_index(slot: u32) -> u32 {
    STICKER_ID_BASE + STICKER_STRIDE * slot
}

pub const fn sticker_wear_index(slot: u32) -> u32 {
    sticker_id_index(slot) + 1
}

pub const fn sticker_scale_index(slot: u32) -> u32 {
    sticker_id_index(slot) + 2
}

pub const fn sticker_rotation_index(slot: u32) -> u32 {
    sticker_id_index(slot) + 3
}

pub const fn sticker_offset_x_index(slot: u32) -> u32 {
    STICKER_OFFSET_BASE + STICKER_OFFSET_STRIDE * slot
}

pub const fn sticker_offset_y_index(slot: u32) -> u32 {
    sticker_offset_x_index(slot) + 1
}

pub const fn sticker_schema_index(slot: u32) -> u32 {
    STICKER_SCHEMA_BASE + slot
}

/// Borrowed view over an item's attributes with typed accessors.
#[derive(Clone, Copy)]
pub struct Attributes<'a> {
    entries: &'a [EconItemAttribute],
}

impl<'a> Attributes<'a> {
    pub fn new(entries: &'a [EconItemAttribute]) -> Self {
        Self { entries }
    }

    /// Raw bytes of the first entry with `def_index`.
    pub fn bytes(&self, def_index: u32) -> Option<&'a [u8]> {
        self.entries
            .iter()
            .find(|entry| entry.def_index == Some(def_index))
            .and_then(|entry| entry.value_bytes.as_deref())
    }

    #[track_caller]
    pub fn u32(&self, def_index: u32) -> Result<Option<u32>, DecodeError> {
        self.bytes(def_index)
            .map(|bytes| BinaryReader::new(bytes).read_u32_le())
            .transpose()
    }

    #[track_caller]
    pub fn f32(&self, def_index: u32) -> Result<Option<f32>, DecodeError> {
        self.bytes(def_index)
            .map(|bytes| BinaryReader::new(bytes).read_f32_le())
            .transpose()
    }

    /// A float attribute that really stores a whole number (paint index, seed).
    #[track_caller]
    pub fn floored(&self, def_index: u32) -> Result<Option<u32>, DecodeError> {
        Ok(self.f32(def_index)?.map(|value| value.floor() as u32))
    }

    #[track_caller]
    pub fn string(&self, def_index: u32) -> Result<Option<String>, DecodeError> {
        let Some(bytes) = self.bytes(def_index) else {
            return Ok(None);
        };

        let mut reader = BinaryReader::new(bytes);
        reader.skip(STRING_PREFIX_LEN)?;
        let text = String::from_utf8(reader.read_rest().to_vec())?;
        Ok(Some(text))
    }

    #[track_caller]
    pub fn timestamp(&self, def_index: u32) -> Result<Option<DateTime<Utc>>, DecodeError> {
        Ok(self
            .u32(def_index)?
            .and_then(|seconds| DateTime::from_timestamp(i64::from(seconds), 0)))
    }
}

/// Every attribute-backed field of an inventory item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedAttributes {
    pub paint_index: Option<u32>,
    pub paint_seed: Option<u32>,
    pub paint_wear: Option<f32>,
    pub custom_name: Option<String>,
    pub tradable_after: Option<DateTime<Utc>>,
    pub kill_eater_value: Option<u32>,
    pub kill_eater_score_type: Option<u32>,
    pub quest_id: Option<u32>,
    pub casket_id: Option<String>,
    pub casket_contained_item_count: Option<u32>,
    pub stickers: Vec<StickerSlot>,
    pub keychains: Vec<StickerSlot>,
    pub variations: Vec<StickerSlot>,
}

pub fn decode(entries: &[EconItemAttribute]) -> Result<DecodedAttributes, DecodeError> {
    let attributes = Attributes::new(entries);

    Ok(DecodedAttributes {
        paint_index: attributes.floored(PAINT_INDEX)?,
        paint_seed: attributes.floored(PAINT_SEED)?,
        paint_wear: attributes.f32(PAINT_WEAR)?,
        custom_name: attributes.string(CUSTOM_NAME)?,
        tradable_after: attributes.timestamp(TRADABLE_AFTER)?,
        kill_eater_value: attributes.u32(KILL_EATER_VALUE)?,
        kill_eater_score_type: attributes.u32(KILL_EATER_SCORE_TYPE)?,
        quest_id: attributes.u32(QUEST_ID)?,
        casket_id: casket_id(&attributes)?,
        casket_contained_item_count: attributes.u32(CASKET_ITEM_COUNT)?,
        stickers: stickers(&attributes)?,
        keychains: keychains(&attributes)?,
        variations: variations(&attributes)?,
    })
}

/// Combine the two 32-bit halves of the owning storage unit's id.
pub fn casket_id(attributes: &Attributes<'_>) -> Result<Option<String>, DecodeError> {
    let low = attributes.u32(CASKET_ID_LOW)?;
    let high = attributes.u32(CASKET_ID_HIGH)?;

    if low.is_none() && high.is_none() {
        return Ok(None);
    }

    let combined = (u64::from(high.unwrap_or(0)) << 32) | u64::from(low.unwrap_or(0));
    Ok(Some(combined.to_string()))
}

pub fn stickers(attributes: &Attributes<'_>) -> Result<Vec<StickerSlot>, DecodeError> {
    let mut stickers = Vec::new();

    for index in 0..STICKER_SLOTS {
        let Some(sticker_id) = attributes.u32(sticker_id_index(index))? else {
            continue;
        };

        // An explicit schema slot replaces the loop index outright.
        let slot = attributes
            .u32(sticker_schema_index(index))?
            .unwrap_or(index);

        stickers.push(StickerSlot {
            slot,
            sticker_id,
            wear: attributes.f32(sticker_wear_index(index))?,
            scale: attributes.f32(sticker_scale_index(index))?,
            rotation: attributes.f32(sticker_rotation_index(index))?,
            offset_x: attributes.f32(sticker_offset_x_index(index))?,
            offset_y: attributes.f32(sticker_offset_y_index(index))?,
            ..StickerSlot::default()
        });
    }

    Ok(stickers)
}

pub fn keychains(attributes: &Attributes<'_>) -> Result<Vec<StickerSlot>, DecodeError> {
    let Some(sticker_id) = attributes.u32(KEYCHAIN_ID)? else {
        return Ok(Vec::new());
    };

    Ok(vec![StickerSlot {
        slot: 0,
        sticker_id,
        offset_x: attributes.f32(KEYCHAIN_OFFSET_X)?,
        offset_y: attributes.f32(KEYCHAIN_OFFSET_Y)?,
        offset_z: attributes.f32(KEYCHAIN_OFFSET_Z)?,
        pattern: attributes.u32(KEYCHAIN_PATTERN)?,
        highlight_reel: attributes.u32(KEYCHAIN_HIGHLIGHT_REEL)?,
        wrapped_sticker: attributes.u32(KEYCHAIN_WRAPPED_STICKER)?,
        ..StickerSlot::default()
    }])
}

pub fn variations(attributes: &Attributes<'_>) -> Result<Vec<StickerSlot>, DecodeError> {
    let Some(sticker_id) = attributes.u32(VARIATION_ID)? else {
        return Ok(Vec::new());
    };

    Ok(vec![StickerSlot {
        slot: 0,
        sticker_id,
        wear: attributes.f32(VARIATION_WEAR)?,
        ..StickerSlot::default()
    }])
}
