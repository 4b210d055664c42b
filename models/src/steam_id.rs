use crate::{ErrorLocation, ModelError};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const ACCOUNT_ID_MASK: u64 = 0xFFFF_FFFF;
const UNIVERSE_PUBLIC: u64 = 1;
const ACCOUNT_TYPE_INDIVIDUAL: u64 = 1;
const INSTANCE_DESKTOP: u64 = 1;
const STEAM3_INDIVIDUAL_PREFIX: &str = "[U:1:";
const STEAM3_SUFFIX: &str = "]";

/// A 64-bit Steam identity restricted to individual accounts in the public universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SteamId(u64);

impl SteamId {
    pub fn from_account_id(account_id: u32) -> Self {
        Self(
            (UNIVERSE_PUBLIC << 56)
                | (ACCOUNT_TYPE_INDIVIDUAL << 52)
                | (INSTANCE_DESKTOP << 32)
                | u64::from(account_id),
        )
    }

    /// Validate a raw SteamID64.
    #[track_caller]
    pub fn from_u64(raw: u64) -> Result<Self, ModelError> {
        let universe = raw >> 56;
        let account_type = (raw >> 52) & 0xF;

        if universe != UNIVERSE_PUBLIC || account_type != ACCOUNT_TYPE_INDIVIDUAL {
            return Err(ModelError::Validation {
                message: format!("{raw} is not an individual Steam account"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if raw & ACCOUNT_ID_MASK == 0 {
            return Err(ModelError::Validation {
                message: format!("{raw} has an empty account id"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(raw))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn account_id(&self) -> u32 {
        (self.0 & ACCOUNT_ID_MASK) as u32
    }
}

impl FromStr for SteamId {
    type Err = ModelError;

    /// Accepts a SteamID64 (`76561197960287930`) or a Steam3 id (`[U:1:22202]`).
    #[track_caller]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if let Some(account) = trimmed
            .strip_prefix(STEAM3_INDIVIDUAL_PREFIX)
            .and_then(|rest| rest.strip_suffix(STEAM3_SUFFIX))
        {
            let account_id = account.parse::<u32>().map_err(|e| ModelError::Validation {
                message: format!("Invalid Steam3 account id '{account}': {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
            return Self::from_u64(Self::from_account_id(account_id).as_u64());
        }

        let raw = trimmed.parse::<u64>().map_err(|e| ModelError::Validation {
            message: format!("Invalid SteamID '{trimmed}': {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::from_u64(raw)
    }
}

impl Display for SteamId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.0)
    }
}
