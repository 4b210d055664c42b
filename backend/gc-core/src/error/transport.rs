use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Errors a [`GcTransport`](crate::transport::GcTransport) implementation reports back.
#[derive(Debug, Clone, ThisError)]
pub enum TransportError {
    #[error("Send Error: {message} {location}")]
    Send {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not Connected Error: {message} {location}")]
    NotConnected {
        message: String,
        location: ErrorLocation,
    },
}
