//! Like ledger
//!
//! Gateway-local persisted like state, keyed by content id: one map for the
//! liked flag, one for the counter, mirroring the two keys the browser keeps
//! in local storage. The ledger is the sole authority for both values once a
//! record has been observed; the store's `likesCount` only seeds the first
//! read. No server write ever happens for likes.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Like state for one content id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeEntry {
    pub liked: bool,
    pub count: u64,
}

/// Persisted ledger layout: two keyed mappings
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerState {
    /// content id -> liked flag
    #[serde(default)]
    liked: BTreeMap<String, bool>,
    /// content id -> like count
    #[serde(default)]
    counts: BTreeMap<String, u64>,
}

/// File-backed like ledger
///
/// Accessed only from the single request-handling path (behind the gateway
/// state lock), so there are no concurrent writers. Flag and count are
/// written together in one file replace; a reader never observes one
/// without the other.
pub struct LikeLedger {
    path: PathBuf,
    state: LedgerState,
}

impl LikeLedger {
    /// Load the ledger from `path`; a missing file starts an empty ledger
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => LedgerState::default(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Like ledger loaded: {} liked flags, {} counters ({})",
            state.liked.len(),
            state.counts.len(),
            path.display()
        );
        Ok(Self { path, state })
    }

    /// Current state for a content id
    ///
    /// A never-seen id reads as not-liked with `seed` as its count
    /// (typically the record's server-reported `likesCount`).
    pub fn get(&self, content_id: &str, seed: u64) -> LikeEntry {
        LikeEntry {
            liked: self.state.liked.get(content_id).copied().unwrap_or(false),
            count: self.state.counts.get(content_id).copied().unwrap_or(seed),
        }
    }

    /// Flip the liked flag and adjust the count by exactly one
    ///
    /// Both values persist together; if the write fails, the in-memory state
    /// is rolled back and the previous entry stays observable.
    pub fn toggle(&mut self, content_id: &str, seed: u64) -> Result<LikeEntry> {
        let prev = self.get(content_id, seed);
        let entry = LikeEntry {
            liked: !prev.liked,
            count: if prev.liked {
                prev.count.saturating_sub(1)
            } else {
                prev.count + 1
            },
        };

        self.state.liked.insert(content_id.to_string(), entry.liked);
        self.state.counts.insert(content_id.to_string(), entry.count);

        if let Err(e) = self.persist() {
            self.state.liked.insert(content_id.to_string(), prev.liked);
            self.state.counts.insert(content_id.to_string(), prev.count);
            return Err(e);
        }

        debug!(
            "like toggled: content={} liked={} count={}",
            content_id, entry.liked, entry.count
        );
        Ok(entry)
    }

    /// Number of ids with any recorded state
    pub fn tracked(&self) -> usize {
        self.state.counts.len()
    }

    /// Write the full state file via a temp file and rename, so the two
    /// maps always land on disk together
    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(&self.state)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Path helper for tests and callers that derive the ledger location
pub fn ledger_file(data_dir: &Path) -> PathBuf {
    data_dir.join("likes.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_id_reads_seed_and_not_liked() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = LikeLedger::load(ledger_file(dir.path())).unwrap();
        let entry = ledger.get("42", 5);
        assert!(!entry.liked);
        assert_eq!(entry.count, 5);
    }

    #[test]
    fn toggle_twice_is_a_net_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = LikeLedger::load(ledger_file(dir.path())).unwrap();

        let first = ledger.toggle("42", 5).unwrap();
        assert_eq!(first, LikeEntry { liked: true, count: 6 });

        let second = ledger.toggle("42", 5).unwrap();
        assert_eq!(second, LikeEntry { liked: false, count: 5 });
    }

    #[test]
    fn state_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = ledger_file(dir.path());

        let mut ledger = LikeLedger::load(&path).unwrap();
        ledger.toggle("7", 0).unwrap();
        drop(ledger);

        let reloaded = LikeLedger::load(&path).unwrap();
        let entry = reloaded.get("7", 0);
        assert!(entry.liked);
        assert_eq!(entry.count, 1);
        assert_eq!(reloaded.tracked(), 1);
    }

    #[test]
    fn seed_applies_only_before_first_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = LikeLedger::load(ledger_file(dir.path())).unwrap();

        ledger.toggle("9", 10).unwrap(); // liked, count 11
        // A later caller with a different seed sees the recorded value.
        let entry = ledger.get("9", 999);
        assert_eq!(entry.count, 11);
        assert!(entry.liked);
    }

    #[test]
    fn like_then_unlike_with_zero_seed_lands_on_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = LikeLedger::load(ledger_file(dir.path())).unwrap();

        ledger.toggle("1", 0).unwrap();
        let entry = ledger.toggle("1", 0).unwrap();
        assert_eq!(entry.count, 0);
    }
}
