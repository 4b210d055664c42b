//! Local mirror of the player's shared-object inventory.
//!
//! The store is absent until the first snapshot arrives; every create, update or
//! remove before that is a no-op. Updates replace the whole item, never merge.

use crate::error::DecodeError;
use crate::item;
use crate::proto::econ::EconItem;

use models::InventoryItem;

use log::{debug, warn};

/// One observable mutation of the store.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryChange {
    Acquired(InventoryItem),
    Changed {
        old: InventoryItem,
        new: InventoryItem,
    },
    /// `item` is `None` when the id was not in the store.
    Removed {
        id: String,
        item: Option<InventoryItem>,
    },
}

/// Result of applying one bulk update.
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub changes: Vec<InventoryChange>,
    pub errors: Vec<DecodeError>,
}

#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Option<Vec<InventoryItem>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.items.is_some()
    }

    pub fn items(&self) -> Option<&[InventoryItem]> {
        self.items.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.as_ref()?.iter().find(|item| item.id == id)
    }

    /// Replace everything with a fresh snapshot.
    pub fn load_snapshot(&mut self, items: Vec<InventoryItem>) {
        debug!("Loaded inventory snapshot with {} items", items.len());
        self.items = Some(items);
    }

    /// Add an item. A create for an id already held replaces that entry, so each id
    /// appears at most once.
    pub fn create(&mut self, raw: &EconItem) -> Result<Option<InventoryChange>, DecodeError> {
        let Some(items) = self.items.as_mut() else {
            return Ok(None);
        };

        let created = item::normalize(raw)?;

        if let Some(existing) = items.iter_mut().find(|item| item.id == created.id) {
            debug!("Create for known item {} replaces it", created.id);
            let old = std::mem::replace(existing, created.clone());
            return Ok(Some(InventoryChange::Changed { old, new: created }));
        }

        items.push(created.clone());
        Ok(Some(InventoryChange::Acquired(created)))
    }

    pub fn update(&mut self, raw: &EconItem) -> Result<Option<InventoryChange>, DecodeError> {
        let Some(items) = self.items.as_mut() else {
            return Ok(None);
        };

        if raw.id.is_none() {
            return Ok(None);
        }

        let updated = item::normalize(raw)?;

        let Some(existing) = items.iter_mut().find(|item| item.id == updated.id) else {
            debug!("Dropping update for unknown item {}", updated.id);
            return Ok(None);
        };

        let old = std::mem::replace(existing, updated.clone());
        Ok(Some(InventoryChange::Changed { old, new: updated }))
    }

    pub fn remove(&mut self, raw: &EconItem) -> Option<InventoryChange> {
        let items = self.items.as_mut()?;
        let id = raw.id?.to_string();

        let removed = items
            .iter()
            .position(|item| item.id == id)
            .map(|index| items.remove(index));

        Some(InventoryChange::Removed { id, item: removed })
    }

    /// Apply one bulk message: added, then modified, then removed.
    ///
    /// A malformed entry is logged and collected; the rest still apply.
    pub fn apply_bulk(
        &mut self,
        added: &[EconItem],
        modified: &[EconItem],
        removed: &[EconItem],
    ) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();

        for raw in added {
            match self.create(raw) {
                Ok(change) => outcome.changes.extend(change),
                Err(e) => {
                    warn!("Skipping added item in bulk update: {e}");
                    outcome.errors.push(e);
                }
            }
        }

        for raw in modified {
            match self.update(raw) {
                Ok(change) => outcome.changes.extend(change),
                Err(e) => {
                    warn!("Skipping modified item in bulk update: {e}");
                    outcome.errors.push(e);
                }
            }
        }

        for raw in removed {
            outcome.changes.extend(self.remove(raw));
        }

        outcome
    }

    /// Items currently tagged as stored in `casket_id`.
    pub fn casket_contents(&self, casket_id: &str) -> Vec<InventoryItem> {
        self.items
            .iter()
            .flatten()
            .filter(|item| item.is_in_casket(casket_id))
            .cloned()
            .collect()
    }

    /// Contents of `casket_id` if every item it declares is already mirrored locally.
    pub fn known_casket_contents(&self, casket_id: &str) -> Option<Vec<InventoryItem>> {
        let declared = self.get(casket_id)?.casket_contained_item_count?;
        let contents = self.casket_contents(casket_id);

        if contents.len() == declared as usize {
            Some(contents)
        } else {
            None
        }
    }
}
