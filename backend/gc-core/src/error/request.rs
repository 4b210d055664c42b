use crate::error::TransportError;

use common::ErrorLocation;
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failure of a consumer-issued command or query.
///
/// Only ever surfaced to the caller that issued the request.
#[derive(Debug, Clone, ThisError)]
pub enum RequestError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not Logged In Error: {message} {location}")]
    NotLoggedIn {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timeout Error: no response for {subject} within {timeout_ms} ms {location}")]
    Timeout {
        subject: String,
        timeout_ms: u64,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Actor Stopped Error: {message} {location}")]
    ActorStopped {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected Response Error: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ModelError> for RequestError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Validation { message, location } => {
                RequestError::Validation { message, location }
            }
        }
    }
}

impl From<TransportError> for RequestError {
    #[track_caller]
    fn from(error: TransportError) -> Self {
        RequestError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
