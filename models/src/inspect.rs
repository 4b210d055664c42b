use crate::{ErrorLocation, ModelError, StickerSlot};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Whose copy of the item is being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectOwner {
    /// SteamID64 of the player holding the item (`S` parameter).
    Player(u64),
    /// Community market listing id (`M` parameter).
    Market(u64),
}

/// Parameters of an item-inspection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectRequest {
    pub owner: InspectOwner,
    pub asset_id: u64,
    pub d: u64,
}

/// Builder for validated [`InspectRequest`] instances.
#[derive(Debug, Default)]
pub struct InspectRequestBuilder {
    owner: Option<InspectOwner>,
    asset_id: Option<u64>,
    d: Option<u64>,
}

impl InspectRequestBuilder {
    pub fn with_owner(mut self, owner_steam_id: u64) -> Self {
        self.owner = Some(InspectOwner::Player(owner_steam_id));
        self
    }

    pub fn with_market_listing(mut self, listing_id: u64) -> Self {
        self.owner = Some(InspectOwner::Market(listing_id));
        self
    }

    pub fn with_asset_id(mut self, asset_id: u64) -> Self {
        self.asset_id = Some(asset_id);
        self
    }

    pub fn with_d(mut self, d: u64) -> Self {
        self.d = Some(d);
        self
    }

    /// Build the request with validation.
    #[track_caller]
    pub fn build(self) -> Result<InspectRequest, ModelError> {
        let owner = self.owner.ok_or_else(|| ModelError::Validation {
            message: String::from("Owner or market listing is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let owner_id = match owner {
            InspectOwner::Player(id) | InspectOwner::Market(id) => id,
        };

        if owner_id == 0 {
            return Err(ModelError::Validation {
                message: String::from("Owner id must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let asset_id = self.asset_id.ok_or_else(|| ModelError::Validation {
            message: String::from("Asset id is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if asset_id == 0 {
            return Err(ModelError::Validation {
                message: String::from("Asset id must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let d = self.d.ok_or_else(|| ModelError::Validation {
            message: String::from("D parameter is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(InspectRequest { owner, asset_id, d })
    }
}

/// Item details returned by an inspection, whether resolved by the GC or
/// decoded locally from a share token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectedItem {
    pub item_id: String,
    pub account_id: Option<u32>,
    pub def_index: Option<u32>,
    pub paint_index: Option<u32>,
    pub rarity: Option<u32>,
    pub quality: Option<u32>,
    pub paint_wear: Option<f32>,
    pub paint_seed: Option<u32>,
    pub kill_eater_score_type: Option<u32>,
    pub kill_eater_value: Option<u32>,
    pub custom_name: Option<String>,
    pub inventory: Option<u32>,
    pub origin: Option<u32>,
    pub quest_id: Option<u32>,
    pub drop_reason: Option<u32>,
    pub music_index: Option<u32>,
    pub ent_index: Option<i32>,
    pub pet_index: Option<u32>,
    pub style: Option<u32>,
    pub upgrade_level: Option<u32>,
    pub stickers: Vec<StickerSlot>,
    pub keychains: Vec<StickerSlot>,
    pub variations: Vec<StickerSlot>,
}
