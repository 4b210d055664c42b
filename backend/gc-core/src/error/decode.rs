use common::ErrorLocation;

use std::panic::Location;
use std::string::FromUtf8Error;

use thiserror::Error as ThisError;

/// A payload that could not be turned into a structured record.
///
/// Always recoverable: the offending message is dropped and the session continues.
#[derive(Debug, Clone, ThisError)]
pub enum DecodeError {
    #[error("Protobuf Decode Error: {message} {location}")]
    Protobuf {
        message: String,
        location: ErrorLocation,
    },

    #[error("Truncated Payload Error: {message} {location}")]
    Truncated {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid UTF-8 Error: {message} {location}")]
    InvalidUtf8 {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected Payload Error: {message} {location}")]
    UnexpectedType {
        message: String,
        location: ErrorLocation,
    },
}

impl From<prost::DecodeError> for DecodeError {
    #[track_caller]
    fn from(error: prost::DecodeError) -> Self {
        DecodeError::Protobuf {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<FromUtf8Error> for DecodeError {
    #[track_caller]
    fn from(error: FromUtf8Error) -> Self {
        DecodeError::InvalidUtf8 {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
