use dashmap::{DashMap, mapref::entry::Entry};
use hubwatch_primitives::{Buf32, LogKey};
use tracing::*;

use crate::{CanonicalState, CheckpointSource, StoreResult};

/// Concurrent map of trusted snapshots, one per log.
///
/// Writers for the same log serialize on the key's shard lock. Readers copy
/// the whole [`CanonicalState`] out under the read lock, so root and count
/// always come from the same snapshot.
#[derive(Debug, Default)]
pub struct CanonicalStateStore {
    states: DashMap<LogKey, CanonicalState>,
}

impl CanonicalStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the observed `(root, count)` for `log`, replacing whatever was
    /// on file. Returns the previous snapshot.
    ///
    /// The caller vouches for the values. A count lower than the one on file
    /// is still recorded, but means the upstream reader is misbehaving.
    pub fn snapshot(&self, log: LogKey, root: Buf32, count: u32) -> Option<CanonicalState> {
        let new = CanonicalState::new(root, count);
        let prev = match self.states.entry(log) {
            Entry::Occupied(mut e) => {
                let prev = *e.get();
                if count < prev.count() {
                    warn!(%log, prev_count = prev.count(), count, "canonical count regressed");
                }
                e.insert(new);
                Some(prev)
            }
            Entry::Vacant(e) => {
                e.insert(new);
                None
            }
        };

        debug!(%log, %root, count, "stored canonical snapshot");
        prev
    }

    /// Last snapshot recorded for `log`.
    pub fn get(&self, log: &LogKey) -> Option<CanonicalState> {
        self.states.get(log).map(|e| *e.value())
    }

    /// Reads the latest state for `log` from `source` and records it.
    pub fn refresh_from<S>(&self, source: &S, log: LogKey) -> StoreResult<CanonicalState>
    where
        S: CheckpointSource + ?Sized,
    {
        let state = source.latest_state(&log)?;
        self.snapshot(log, state.root(), state.count());
        Ok(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Logs that currently have a snapshot, in no particular order.
    pub fn keys(&self) -> Vec<LogKey> {
        self.states.iter().map(|e| *e.key()).collect()
    }
}
