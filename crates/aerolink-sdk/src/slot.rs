//! Current-snapshot holder with stale-response protection.
//!
//! A [`FeedSlot`] owns the snapshot a view is showing. Each load is tagged
//! with a generation number when it starts; its result is only published if
//! no newer load has started and the slot has not been closed in the
//! meantime. A response that arrives after teardown or after a newer
//! refresh is dropped without touching the slot.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use aerolink_models::FeedSnapshot;
use tokio::sync::watch;
use tracing::debug;

use crate::feed::{ContentFeed, RemoteSpec};

/// Proof that a load was started; required to publish its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Holds the latest snapshot of one feed.
#[derive(Debug)]
pub struct FeedSlot {
    generation: AtomicU64,
    closed: AtomicBool,
    current: watch::Sender<Option<Arc<FeedSnapshot>>>,
}

impl Default for FeedSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSlot {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            generation: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            current,
        }
    }

    /// The snapshot currently on display, if any load has completed.
    pub fn current(&self) -> Option<Arc<FeedSnapshot>> {
        self.current.borrow().clone()
    }

    /// Watch for snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<FeedSnapshot>>> {
        self.current.subscribe()
    }

    /// Start a load. Any ticket issued earlier becomes stale.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Publish the result of the load identified by `ticket`.
    ///
    /// Returns the published snapshot, or `None` when the ticket is stale or
    /// the slot is closed.
    pub fn commit(&self, ticket: LoadTicket, snapshot: FeedSnapshot) -> Option<Arc<FeedSnapshot>> {
        let snapshot = Arc::new(snapshot);
        // The check runs under the channel's write lock so two commits
        // cannot interleave between check and store.
        let published = self.current.send_if_modified(|current| {
            if self.closed.load(Ordering::SeqCst)
                || self.generation.load(Ordering::SeqCst) != ticket.generation
            {
                return false;
            }
            *current = Some(Arc::clone(&snapshot));
            true
        });
        if published {
            Some(snapshot)
        } else {
            debug!(generation = ticket.generation, "discarding stale feed result");
            None
        }
    }

    /// Tear the slot down. Loads still in flight will not be published.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Load through `feed` and publish the result unless superseded.
    pub async fn refresh(
        &self,
        feed: &ContentFeed,
        source: &RemoteSpec,
        fallback_seed: u64,
        fallback_count: usize,
    ) -> Option<Arc<FeedSnapshot>> {
        let ticket = self.begin();
        let snapshot = feed.load(source, fallback_seed, fallback_count).await;
        self.commit(ticket, snapshot)
    }
}
