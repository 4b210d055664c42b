use crate::error::DecodeError;
use crate::proto::SO_TYPE_ECON_ITEM;
use crate::proto::econ::EconItem;

use prost::Message;

/// A shared object decoded according to its type tag.
///
/// Only inventory items are understood; anything else is carried as
/// `Unhandled` so callers can log it and move on.
#[derive(Debug, Clone, PartialEq)]
pub enum SharedObject {
    Item(EconItem),
    Unhandled { type_id: i32 },
}

impl SharedObject {
    #[track_caller]
    pub fn decode(type_id: i32, bytes: &[u8]) -> Result<Self, DecodeError> {
        match type_id {
            SO_TYPE_ECON_ITEM => Ok(Self::Item(EconItem::decode(bytes)?)),
            other => Ok(Self::Unhandled { type_id: other }),
        }
    }
}
