//! Inspect links and share tokens.
//!
//! An inspect link either names an item the GC must look up (`S…A…D…` for an
//! owned item, `M…A…D…` for a market listing) or embeds the whole preview block
//! as a hex "share token" that decodes locally.

use crate::INSPECT_LINK_PREFIX;
use crate::error::RequestError;
use crate::proto::cstrike::{PreviewDataBlock, PreviewSticker};

use common::ErrorLocation;
use models::{InspectOwner, InspectRequest, InspectRequestBuilder, InspectedItem, StickerSlot};

use std::panic::Location;
use std::sync::OnceLock;

use prost::Message;
use regex::Regex;

const PREVIEW_ACTION: &str = "csgo_econ_action_preview";
const ENCODED_SPACE: &str = "%20";
const INSPECT_PARAMS_PATTERN: &str = r"^(?:S(?P<s>\d+)|M(?P<m>\d+))A(?P<a>\d+)D(?P<d>\d+)$";
/// Key byte up front, checksum at the end.
const TOKEN_KEY_LEN: usize = 1;
const TOKEN_CHECKSUM_LEN: usize = 4;

static INSPECT_PARAMS_REGEX: OnceLock<Regex> = OnceLock::new();

fn inspect_params_regex() -> &'static Regex {
    INSPECT_PARAMS_REGEX
        .get_or_init(|| Regex::new(INSPECT_PARAMS_PATTERN).expect("valid regex pattern"))
}

#[derive(Debug, Clone, PartialEq)]
pub enum InspectTarget {
    Request(InspectRequest),
    ShareToken(String),
}

/// Parse a full `steam://` inspect link or just its parameter part.
#[track_caller]
pub fn parse_inspect_link(link: &str) -> Result<InspectTarget, RequestError> {
    let params = match link.find(PREVIEW_ACTION) {
        Some(index) => &link[index + PREVIEW_ACTION.len()..],
        None => link,
    };
    let params = params.trim();
    let params = params.strip_prefix(ENCODED_SPACE).unwrap_or(params).trim();

    if let Some(captures) = inspect_params_regex().captures(params) {
        let number = |name: &str| -> Result<Option<u64>, RequestError> {
            captures
                .name(name)
                .map(|value| {
                    value.as_str().parse::<u64>().map_err(|e| RequestError::Validation {
                        message: format!("Inspect parameter {name} is out of range: {e}"),
                        location: ErrorLocation::from(Location::caller()),
                    })
                })
                .transpose()
        };

        let mut builder = InspectRequestBuilder::default();
        if let Some(owner) = number("s")? {
            builder = builder.with_owner(owner);
        }
        if let Some(listing) = number("m")? {
            builder = builder.with_market_listing(listing);
        }
        if let Some(asset_id) = number("a")? {
            builder = builder.with_asset_id(asset_id);
        }
        if let Some(d) = number("d")? {
            builder = builder.with_d(d);
        }

        return Ok(InspectTarget::Request(builder.build()?));
    }

    if !params.is_empty() && params.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(InspectTarget::ShareToken(params.to_string()));
    }

    Err(RequestError::Validation {
        message: format!("Not an inspect link: '{link}'"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Full `steam://` link for `request`, as the game client would open it.
pub fn format_inspect_link(request: &InspectRequest) -> String {
    let owner = match request.owner {
        InspectOwner::Player(steam_id) => format!("S{steam_id}"),
        InspectOwner::Market(listing_id) => format!("M{listing_id}"),
    };
    format!(
        "{INSPECT_LINK_PREFIX}{owner}A{}D{}",
        request.asset_id, request.d
    )
}

/// Decode a hex share token into the item it describes.
///
/// The trailing checksum is not verified.
#[track_caller]
pub fn decode_share_token(token: &str) -> Result<InspectedItem, RequestError> {
    let mut bytes = hex::decode(token).map_err(|e| RequestError::Validation {
        message: format!("Share token is not valid hex: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if bytes.len() <= TOKEN_KEY_LEN + TOKEN_CHECKSUM_LEN {
        return Err(RequestError::Validation {
            message: format!("Share token is too short ({} bytes)", bytes.len()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let key = bytes[0];
    for byte in bytes.iter_mut() {
        *byte ^= key;
    }

    let body = &bytes[TOKEN_KEY_LEN..bytes.len() - TOKEN_CHECKSUM_LEN];
    let block = PreviewDataBlock::decode(body).map_err(|e| RequestError::Validation {
        message: format!("Share token does not hold an item: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(inspected_item(&block))
}

pub fn inspected_item(block: &PreviewDataBlock) -> InspectedItem {
    InspectedItem {
        item_id: block.itemid.unwrap_or_default().to_string(),
        account_id: block.accountid,
        def_index: block.defindex,
        paint_index: block.paintindex,
        rarity: block.rarity,
        quality: block.quality,
        paint_wear: block.paintwear.map(f32::from_bits),
        paint_seed: block.paintseed,
        kill_eater_score_type: block.killeaterscoretype,
        kill_eater_value: block.killeatervalue,
        custom_name: block.customname.clone(),
        inventory: block.inventory,
        origin: block.origin,
        quest_id: block.questid,
        drop_reason: block.dropreason,
        music_index: block.musicindex,
        ent_index: block.entindex,
        pet_index: block.petindex,
        style: block.style,
        upgrade_level: block.upgrade_level,
        stickers: block.stickers.iter().map(sticker_slot).collect(),
        keychains: block.keychains.iter().map(sticker_slot).collect(),
        variations: block.variations.iter().map(sticker_slot).collect(),
    }
}

fn sticker_slot(sticker: &PreviewSticker) -> StickerSlot {
    StickerSlot {
        slot: sticker.slot.unwrap_or_default(),
        sticker_id: sticker.sticker_id.unwrap_or_default(),
        wear: sticker.wear,
        scale: sticker.scale,
        rotation: sticker.rotation,
        tint_id: sticker.tint_id,
        offset_x: sticker.offset_x,
        offset_y: sticker.offset_y,
        offset_z: sticker.offset_z,
        pattern: sticker.pattern,
        highlight_reel: sticker.highlight_reel,
        wrapped_sticker: sticker.wrapped_sticker,
    }
}
