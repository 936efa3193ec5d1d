use std::sync::Arc;

use hubwatch_checkpoint_types::Checkpoint;
use hubwatch_merkle::MerkleProof;
use hubwatch_primitives::{Buf32, DomainId};
use hubwatch_state_store::{CanonicalState, CanonicalStateStore};
use tracing::*;

use crate::{FraudProofError, FraudProofResult};

/// Evaluates fraud predicates for checkpoints of logs owned by
/// `local_domain`.
///
/// Holds no state of its own beyond the shared store handle, so clones are
/// cheap and can be handed to any number of threads.
#[derive(Clone, Debug)]
pub struct FraudProofVerifier {
    local_domain: DomainId,
    store: Arc<CanonicalStateStore>,
}

impl FraudProofVerifier {
    pub fn new(local_domain: DomainId, store: Arc<CanonicalStateStore>) -> Self {
        Self {
            local_domain,
            store,
        }
    }

    pub fn local_domain(&self) -> DomainId {
        self.local_domain
    }

    pub fn store(&self) -> &Arc<CanonicalStateStore> {
        &self.store
    }

    pub fn is_non_local(&self, ck: &Checkpoint) -> bool {
        ck.origin() != self.local_domain
    }

    /// Whether the checkpoint claims a leaf the log hasn't appended yet.
    ///
    /// A log with no snapshot on file counts as empty, so every index is
    /// premature for it.
    pub fn is_premature(&self, ck: &Checkpoint) -> FraudProofResult<bool> {
        self.ensure_local(ck)?;

        let log = ck.log_key();
        let count = self.store.get(&log).map_or(0, |st| st.count());
        let premature = ck.index() >= count;
        debug!(%log, index = ck.index(), count, premature, "checked premature");
        Ok(premature)
    }

    /// Whether the checkpoint names the wrong message at its index.
    ///
    /// `actual` must be proven to sit at `ck.index()` under the stored root
    /// before the claimed message id is compared against it.
    pub fn is_fraudulent_message_id(
        &self,
        ck: &Checkpoint,
        proof: &MerkleProof,
        actual: Buf32,
    ) -> FraudProofResult<bool> {
        self.ensure_local(ck)?;
        self.check_membership(ck, actual, proof)?;

        let fraudulent = ck.message_id() != actual;
        debug!(log = %ck.log_key(), index = ck.index(), fraudulent, "checked message id");
        Ok(fraudulent)
    }

    /// Whether the checkpoint names the wrong root for its leaf.
    ///
    /// The claimed message id must be proven to sit at `ck.index()` under
    /// the stored root, and that root is what the claimed one is compared
    /// against.
    pub fn is_fraudulent_root(&self, ck: &Checkpoint, proof: &MerkleProof) -> FraudProofResult<bool> {
        self.ensure_local(ck)?;
        let stored = self.check_membership(ck, ck.message_id(), proof)?;

        let fraudulent = ck.root() != stored.root();
        debug!(log = %ck.log_key(), index = ck.index(), fraudulent, "checked root");
        Ok(fraudulent)
    }

    fn ensure_local(&self, ck: &Checkpoint) -> FraudProofResult<()> {
        if self.is_non_local(ck) {
            return Err(FraudProofError::NotLocal {
                origin: ck.origin(),
                local: self.local_domain,
            });
        }
        Ok(())
    }

    /// Proves `leaf` sits at `ck.index()` in the stored snapshot for the
    /// checkpoint's log and returns that snapshot.
    ///
    /// Root and count come from a single store read. An index at or past
    /// the stored count is rejected even if the proof reproduces the root,
    /// since those slots are empty padding.
    fn check_membership(
        &self,
        ck: &Checkpoint,
        leaf: Buf32,
        proof: &MerkleProof,
    ) -> FraudProofResult<CanonicalState> {
        let log = ck.log_key();
        let index = ck.index();

        match self.store.get(&log) {
            Some(stored)
                if stored.contains_index(index) && proof.branch_root(leaf, index) == stored.root() =>
            {
                Ok(stored)
            }
            stored => {
                debug!(%log, index, has_snapshot = stored.is_some(), "proof is not a member");
                Err(FraudProofError::NotMemberOfStoredCheckpoint { log, index })
            }
        }
    }
}
