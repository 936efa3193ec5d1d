use hubwatch_checkpoint_types::Checkpoint;
use hubwatch_merkle::{MerkleProof, MerkleProver};
use hubwatch_primitives::{Buf32, LogKey, hash::keccak256};
use hubwatch_state_store::{CanonicalState, CanonicalStateStore, CheckpointSource, SourceError};

/// Deterministic message id for the `n`th dispatched message.
pub fn message_id(n: u32) -> Buf32 {
    let mut buf = [0u8; 11];
    buf[..7].copy_from_slice(b"message");
    buf[7..].copy_from_slice(&n.to_be_bytes());
    keccak256(buf)
}

/// In-memory stand-in for a messaging hub that owns a single log.
///
/// Serves its `(root, count)` the way the on-chain hook does, through its
/// latest checkpoint, and hands out proofs for any dispatched leaf.
#[derive(Clone, Debug)]
pub struct TestHub {
    key: LogKey,
    prover: MerkleProver,
}

impl TestHub {
    pub fn new(key: LogKey) -> Self {
        Self {
            key,
            prover: MerkleProver::new(),
        }
    }

    /// Hub with messages `message_id(0)..message_id(n)` already dispatched.
    pub fn with_messages(key: LogKey, n: u32) -> Self {
        let mut hub = Self::new(key);
        hub.dispatch_n(n);
        hub
    }

    pub fn key(&self) -> LogKey {
        self.key
    }

    pub fn prover(&self) -> &MerkleProver {
        &self.prover
    }

    pub fn root(&self) -> Buf32 {
        self.prover.root()
    }

    pub fn count(&self) -> u32 {
        self.prover.count()
    }

    /// Appends `leaf` and returns its index.
    pub fn dispatch(&mut self, leaf: Buf32) -> u32 {
        self.prover.ingest(leaf).expect("test: hub full")
    }

    /// Dispatches the next `n` deterministic message ids.
    pub fn dispatch_n(&mut self, n: u32) {
        for _ in 0..n {
            let next = self.count();
            self.dispatch(message_id(next));
        }
    }

    pub fn leaf(&self, index: u32) -> Buf32 {
        self.prover.leaf(index).expect("test: leaf not dispatched")
    }

    pub fn proof(&self, index: u32) -> MerkleProof {
        self.prover.proof(index).expect("test: proof for dispatched leaf")
    }

    /// Honest checkpoint over the current tree, if anything was dispatched.
    pub fn latest_checkpoint(&self) -> Option<Checkpoint> {
        let (root, index) = self.prover.latest_checkpoint()?;
        Some(Checkpoint::new(
            self.key.origin(),
            self.key.log_id(),
            root,
            index,
            self.leaf(index),
        ))
    }

    /// Snapshots the hub's current state into `store`.
    pub fn snapshot_into(&self, store: &CanonicalStateStore) -> CanonicalState {
        store
            .refresh_from(self, self.key)
            .expect("test: hub serves its own log")
    }
}

impl CheckpointSource for TestHub {
    fn latest_state(&self, log: &LogKey) -> Result<CanonicalState, SourceError> {
        if *log != self.key {
            return Err(SourceError::UnknownLog(*log));
        }

        Ok(match self.prover.latest_checkpoint() {
            Some((root, index)) => CanonicalState::from_latest_checkpoint(root, index),
            None => CanonicalState::new(self.root(), 0),
        })
    }
}
