//! Primitives shared by every crate in the GC client workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): cross-cutting error plumbing
//! - **models**: Pure data structures (items, profiles, identities)
//! - **gc-core**: Protocol logic operating on models
//!
//! Keeping the error location type here lets `models` and `gc-core` share
//! one `[file:line:column]` format without depending on each other.

pub mod error;

pub use error::error_location::ErrorLocation;

#[cfg(test)]
mod tests;
