pub mod config;
pub mod decode;
pub mod request;
pub mod session;
pub mod transport;

pub use config::{ConfigAction, ConfigError};
pub use decode::DecodeError;
pub use request::RequestError;
pub use session::SessionError;
pub use transport::TransportError;

use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Decode(#[from] decode::DecodeError),

    #[error(transparent)]
    Request(#[from] request::RequestError),

    #[error(transparent)]
    Session(#[from] session::SessionError),

    #[error(transparent)]
    Transport(#[from] transport::TransportError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}
