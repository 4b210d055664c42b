//! Domain models for the GC client.
//!
//! Pure data structures shared between the protocol layer and its consumers:
//! inventory items and their sticker-like attachments, inspection results,
//! player profiles and match lists, connection statuses and Steam identities.
//! Nothing here performs I/O; validation lives next to the type it guards.

pub mod error;
pub mod inspect;
pub mod item;
pub mod profile;
pub mod status;
pub mod steam_id;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use inspect::{InspectOwner, InspectRequest, InspectRequestBuilder, InspectedItem};
pub use item::{InventoryItem, StickerSlot};
pub use profile::{Commendation, MatchList, MatchSummary, PlayerProfile, PlayerRanking};
pub use status::GcConnectionStatus;
pub use steam_id::SteamId;

#[cfg(test)]
mod tests;
