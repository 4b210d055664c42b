//! Client-side protocol layer for the Counter-Strike game coordinator.
//!
//! Keeps a GC session alive over an injected [`transport::GcTransport`], mirrors
//! the player's inventory from shared-object cache traffic, and exposes
//! inspection, profile and casket queries with bounded waits.
//!
//! Start with [`client::GcClient::start`].

pub mod attributes;
pub mod client;
pub mod config;
pub mod correlator;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod inspect;
pub mod inventory;
pub mod item;
pub mod logger;
pub mod proto;
pub mod session;
pub mod transport;
pub mod wire;

#[cfg(test)]
mod tests;

pub use client::GcClient;
pub use config::GcConfig;
pub use events::GcEvent;
pub use session::SessionState;

pub const CSGO_APP_ID: u32 = 730;
/// `ClientHello` version the GC currently expects.
pub const DEFAULT_CLIENT_VERSION: u32 = 2000202;
pub const INSPECT_LINK_PREFIX: &str = const_format::concatcp!(
    "steam://rungame/",
    CSGO_APP_ID,
    "/76561202255233023/+csgo_econ_action_preview%20"
);
