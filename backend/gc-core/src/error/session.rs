use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum SessionError {
    /// The GC refused to establish a session.
    #[error("Fatal Logon Error: code {code}: {message} {location}")]
    FatalLogon {
        code: u32,
        message: String,
        country: Option<String>,
        location: ErrorLocation,
    },
}
