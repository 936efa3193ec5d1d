use borsh::{BorshDeserialize, BorshSerialize};
use hubwatch_primitives::Buf32;
use serde::{Deserialize, Serialize};

/// Trusted `(root, count)` pair for one log, read straight from the hub.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct CanonicalState {
    root: Buf32,
    count: u32,
}

impl CanonicalState {
    pub const fn new(root: Buf32, count: u32) -> Self {
        Self { root, count }
    }

    /// Builds the state from a hub's `(root, latest index)` checkpoint read.
    pub fn from_latest_checkpoint(root: Buf32, latest_index: u32) -> Self {
        Self {
            root,
            count: latest_index.saturating_add(1),
        }
    }

    pub const fn root(&self) -> Buf32 {
        self.root
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Index of the last appended leaf, if any.
    pub fn latest_index(&self) -> Option<u32> {
        self.count.checked_sub(1)
    }

    /// Whether the leaf at `index` had been appended when this snapshot was
    /// taken.
    pub fn contains_index(&self, index: u32) -> bool {
        index < self.count
    }
}
