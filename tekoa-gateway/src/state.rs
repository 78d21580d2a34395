//! Shared gateway state
//!
//! One `Arc<RwLock<GatewayState>>` holds everything the handlers touch: the
//! configuration, the content store client, the like ledger, and the explore
//! cache with its refresh generation guard.

use crate::config::Args;
use crate::likes::LikeLedger;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tekoa_client::{Content, ContentStoreClient};
use tokio::sync::RwLock;
use tracing::debug;

pub type SharedState = Arc<RwLock<GatewayState>>;

pub struct GatewayState {
    pub config: Args,
    pub store: Arc<ContentStoreClient>,
    pub likes: LikeLedger,
    pub explore: ExploreCache,
}

impl GatewayState {
    pub fn new(config: Args, store: ContentStoreClient, likes: LikeLedger) -> Self {
        Self {
            config,
            store: Arc::new(store),
            likes,
            explore: ExploreCache::new(),
        }
    }
}

/// In-memory copy of the full content list, refreshed from the store
///
/// Every refresh is tagged with a monotonically increasing generation taken
/// at dispatch time. A completion whose generation is older than the newest
/// dispatched refresh lost the race and is discarded, so a superseded
/// request can never clobber fresher data.
pub struct ExploreCache {
    items: Vec<Content>,
    /// Generation handed to the most recently dispatched refresh
    dispatched: AtomicU64,
    /// Generation of the data currently held
    applied: u64,
    refreshed_at: Option<Instant>,
}

impl ExploreCache {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            dispatched: AtomicU64::new(0),
            applied: 0,
            refreshed_at: None,
        }
    }

    /// Whether the held list is recent enough to serve without a refetch
    ///
    /// Keystroke-driven view queries recompute over this list; only the
    /// page-level cadence goes back to the store.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.refreshed_at
            .map(|at| at.elapsed() < ttl)
            .unwrap_or(false)
    }

    /// Tag a refresh about to be dispatched; callable under a read lock
    pub fn begin_refresh(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a completed refresh; returns false if it was superseded
    pub fn apply(&mut self, generation: u64, items: Vec<Content>) -> bool {
        if generation < self.dispatched.load(Ordering::SeqCst) {
            debug!(
                "discarding stale content refresh (generation {} < {})",
                generation,
                self.dispatched.load(Ordering::SeqCst)
            );
            return false;
        }
        if generation <= self.applied {
            return false;
        }
        self.applied = generation;
        self.items = items;
        self.refreshed_at = Some(Instant::now());
        true
    }

    /// The cached list; empty until the first successful refresh
    pub fn items(&self) -> &[Content] {
        &self.items
    }

    /// Whether any refresh has landed yet
    pub fn is_populated(&self) -> bool {
        self.applied > 0
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Default for ExploreCache {
    fn default() -> Self {
        Self::new()
    }
}
