//! GC wire messages.
//!
//! Protobuf payloads are declared directly with `prost` derives (proto2 semantics,
//! so optional scalars are `Option<T>`). Grouped the way the GC groups them:
//! session/shared-object plumbing in [`base`], item economy in [`econ`], and
//! game-specific queries in [`cstrike`]. [`GcMsgType`] maps wire codes to names.

pub mod base;
pub mod cstrike;
pub mod econ;
mod msg_type;

pub use msg_type::GcMsgType;

/// Shared-object type tag of inventory items inside SO caches.
pub const SO_TYPE_ECON_ITEM: i32 = 1;

/// `ItemCustomizationNotification.request` sent once a storage unit's contents
/// have been pushed into the SO cache.
pub const CASKET_CONTENTS_NOTIFICATION: u32 = 1012;
