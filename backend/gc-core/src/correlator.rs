//! One-shot watchers that pair outbound queries with their inbound answers.
//!
//! Each watcher resolves exactly once: either [`Correlator::resolve`] hands it the
//! matching response (and aborts its timer), or [`Correlator::expire`] fails it
//! with a timeout. Whichever runs first removes the watcher, so the other finds
//! nothing to do.

use crate::error::RequestError;

use common::ErrorLocation;
use models::{InspectedItem, InventoryItem, PlayerProfile};

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::time::Duration;

use log::{debug, trace};
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

/// What a pending query is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrelationKey {
    /// Inspection of the item with this asset id.
    Inspect(u64),
    /// Profile of this account id.
    Profile(u32),
    /// Contents of this storage unit.
    CasketContents(u64),
}

impl Display for CorrelationKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::Inspect(id) => write!(formatter, "item inspection {id}"),
            Self::Profile(account_id) => write!(formatter, "player profile {account_id}"),
            Self::CasketContents(id) => write!(formatter, "casket contents {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Inspect(InspectedItem),
    Profile(PlayerProfile),
    CasketContents(Vec<InventoryItem>),
}

pub type Reply = oneshot::Sender<Result<Response, RequestError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatcherId(u64);

struct Watcher {
    id: WatcherId,
    reply: Reply,
    timeout: Duration,
    timer: Option<AbortHandle>,
}

#[derive(Default)]
pub struct Correlator {
    watchers: HashMap<CorrelationKey, Vec<Watcher>>,
    next_id: u64,
}

impl Correlator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the id a watcher's timer will report back with.
    pub fn next_watcher_id(&mut self) -> WatcherId {
        self.next_id += 1;
        WatcherId(self.next_id)
    }

    pub fn register(
        &mut self,
        key: CorrelationKey,
        id: WatcherId,
        reply: Reply,
        timeout: Duration,
        timer: Option<AbortHandle>,
    ) {
        trace!("Watching for {key} ({} ms)", timeout.as_millis());
        self.watchers.entry(key).or_default().push(Watcher {
            id,
            reply,
            timeout,
            timer,
        });
    }

    /// Hand `response` to every watcher of `key`. Returns how many were waiting.
    pub fn resolve(&mut self, key: CorrelationKey, response: Response) -> usize {
        let Some(watchers) = self.watchers.remove(&key) else {
            return 0;
        };

        let count = watchers.len();
        for watcher in watchers {
            if let Some(timer) = watcher.timer {
                timer.abort();
            }
            // The caller may have stopped waiting.
            let _ = watcher.reply.send(Ok(response.clone()));
        }

        debug!("Resolved {count} watcher(s) for {key}");
        count
    }

    /// Fail watcher `id` of `key` with a timeout. Returns false if it already resolved.
    #[track_caller]
    pub fn expire(&mut self, key: CorrelationKey, id: WatcherId) -> bool {
        let Some(watchers) = self.watchers.get_mut(&key) else {
            return false;
        };

        let Some(index) = watchers.iter().position(|watcher| watcher.id == id) else {
            return false;
        };

        let watcher = watchers.remove(index);
        if watchers.is_empty() {
            self.watchers.remove(&key);
        }

        let _ = watcher.reply.send(Err(RequestError::Timeout {
            subject: key.to_string(),
            timeout_ms: watcher.timeout.as_millis() as u64,
            location: ErrorLocation::from(Location::caller()),
        }));

        debug!("Timed out waiting for {key}");
        true
    }

    pub fn pending_count(&self) -> usize {
        self.watchers.values().map(Vec::len).sum()
    }

    pub fn is_watching(&self, key: CorrelationKey) -> bool {
        self.watchers.contains_key(&key)
    }
}
