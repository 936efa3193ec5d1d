use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use hubwatch_primitives::{Buf32, DomainId, LogId, LogKey};
use serde::{Deserialize, Serialize};

/// Attested claim about the state of one message log.
///
/// States that after the leaf at `index` was appended, the log's Merkle root
/// was `root` and that leaf was `message_id`. Only meaningful relative to the
/// log named by `origin` and `log_id`.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub struct Checkpoint {
    /// Domain that owns the log.
    origin: DomainId,

    /// Log instance on that domain.
    log_id: LogId,

    /// Claimed root after the leaf at `index`.
    root: Buf32,

    /// Zero-based index of the last included leaf.
    index: u32,

    /// Claimed leaf at `index`.
    message_id: Buf32,
}

impl Checkpoint {
    pub fn new(origin: DomainId, log_id: LogId, root: Buf32, index: u32, message_id: Buf32) -> Self {
        Self {
            origin,
            log_id,
            root,
            index,
            message_id,
        }
    }

    pub fn origin(&self) -> DomainId {
        self.origin
    }

    pub fn log_id(&self) -> LogId {
        self.log_id
    }

    pub fn log_key(&self) -> LogKey {
        LogKey::new(self.origin, self.log_id)
    }

    pub fn root(&self) -> Buf32 {
        self.root
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn message_id(&self) -> Buf32 {
        self.message_id
    }

    pub fn with_origin(mut self, origin: DomainId) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_root(mut self, root: Buf32) -> Self {
        self.root = root;
        self
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    pub fn with_message_id(mut self, message_id: Buf32) -> Self {
        self.message_id = message_id;
        self
    }
}
