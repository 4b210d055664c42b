use serde::{Deserialize, Serialize};

use std::fmt::{Display, Formatter, Result as FormatResult};

/// Connection status the GC reports about our session.
///
/// The numeric code is the wire value; `name()` exists for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GcConnectionStatus {
    HaveSession,
    GcGoingDown,
    NoSession,
    NoSessionInLogonQueue,
    NoSteam,
    Suspended,
    SteamGoingDown,
    Unknown(i32),
}

impl GcConnectionStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::HaveSession,
            1 => Self::GcGoingDown,
            2 => Self::NoSession,
            3 => Self::NoSessionInLogonQueue,
            4 => Self::NoSteam,
            5 => Self::Suspended,
            6 => Self::SteamGoingDown,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::HaveSession => 0,
            Self::GcGoingDown => 1,
            Self::NoSession => 2,
            Self::NoSessionInLogonQueue => 3,
            Self::NoSteam => 4,
            Self::Suspended => 5,
            Self::SteamGoingDown => 6,
            Self::Unknown(code) => *code,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HaveSession => "GCConnectionStatus_HAVE_SESSION",
            Self::GcGoingDown => "GCConnectionStatus_GC_GOING_DOWN",
            Self::NoSession => "GCConnectionStatus_NO_SESSION",
            Self::NoSessionInLogonQueue => "GCConnectionStatus_NO_SESSION_IN_LOGON_QUEUE",
            Self::NoSteam => "GCConnectionStatus_NO_STEAM",
            Self::Suspended => "GCConnectionStatus_SUSPENDED",
            Self::SteamGoingDown => "GCConnectionStatus_STEAM_GOING_DOWN",
            Self::Unknown(_) => "GCConnectionStatus_UNKNOWN",
        }
    }
}

impl Display for GcConnectionStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{} ({})", self.name(), self.code())
    }
}
