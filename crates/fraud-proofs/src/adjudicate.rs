use std::fmt;

use hubwatch_checkpoint_types::Checkpoint;
use hubwatch_merkle::MerkleProof;
use hubwatch_primitives::Buf32;
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{FraudProofResult, FraudProofVerifier};

/// Evidence a challenger presents against a checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Challenge {
    /// The checkpoint's index is past the log's canonical count.
    Premature,

    /// `actual` is the real leaf at the checkpoint's index.
    MessageId { proof: MerkleProof, actual: Buf32 },

    /// The checkpoint's message id sits under a different root.
    Root { proof: MerkleProof },
}

impl Challenge {
    pub fn kind(&self) -> FraudKind {
        match self {
            Challenge::Premature => FraudKind::Premature,
            Challenge::MessageId { .. } => FraudKind::MessageId,
            Challenge::Root { .. } => FraudKind::Root,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudKind {
    Premature,
    MessageId,
    Root,
}

impl fmt::Display for FraudKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FraudKind::Premature => "premature",
            FraudKind::MessageId => "message_id",
            FraudKind::Root => "root",
        };
        f.write_str(s)
    }
}

/// Outcome of a challenge that could be evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// The checkpoint agrees with canonical state on the challenged point.
    Consistent,

    /// The checkpoint contradicts canonical state.
    Fraudulent(FraudKind),
}

impl Verdict {
    pub fn is_fraudulent(&self) -> bool {
        matches!(self, Verdict::Fraudulent(_))
    }
}

impl FraudProofVerifier {
    /// Runs the predicate matching `challenge` against `ck`.
    ///
    /// Errors mean the challenge itself was invalid (wrong domain, proof not
    /// anchored in canonical state) and say nothing about the checkpoint.
    pub fn adjudicate(&self, ck: &Checkpoint, challenge: &Challenge) -> FraudProofResult<Verdict> {
        let kind = challenge.kind();
        let fraudulent = match challenge {
            Challenge::Premature => self.is_premature(ck),
            Challenge::MessageId { proof, actual } => {
                self.is_fraudulent_message_id(ck, proof, *actual)
            }
            Challenge::Root { proof } => self.is_fraudulent_root(ck, proof),
        }
        .inspect_err(|err| debug!(log = %ck.log_key(), %kind, %err, "challenge rejected"))?;

        if fraudulent {
            warn!(log = %ck.log_key(), index = ck.index(), %kind, "fraudulent checkpoint");
            Ok(Verdict::Fraudulent(kind))
        } else {
            info!(log = %ck.log_key(), index = ck.index(), %kind, "checkpoint consistent");
            Ok(Verdict::Consistent)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hubwatch_merkle::{MerkleProver, TREE_DEPTH};
    use hubwatch_primitives::{DomainId, LogId, LogKey, hash::keccak256};
    use hubwatch_state_store::CanonicalStateStore;

    use super::*;
    use crate::FraudProofError;

    const LOCAL: DomainId = DomainId::new(7);

    fn setup() -> (MerkleProver, FraudProofVerifier, Checkpoint) {
        let leaves = (0u32..3).map(|i| keccak256(i.to_be_bytes()));
        let prover: MerkleProver = MerkleProver::from_leaves(leaves).unwrap();
        let log_id = LogId::from_address([3; 20]);
        let store = Arc::new(CanonicalStateStore::new());
        store.snapshot(LogKey::new(LOCAL, log_id), prover.root(), prover.count());

        let (root, index) = prover.latest_checkpoint().unwrap();
        let leaf = prover.leaf(index).unwrap();
        let ck = Checkpoint::new(LOCAL, log_id, root, index, leaf);
        (prover, FraudProofVerifier::new(LOCAL, store), ck)
    }

    #[test]
    fn test_honest_checkpoint_consistent_under_all_challenges() {
        let (prover, verifier, ck) = setup();
        let proof = prover.proof(ck.index()).unwrap();
        let challenges = [
            Challenge::Premature,
            Challenge::MessageId {
                proof: proof.clone(),
                actual: ck.message_id(),
            },
            Challenge::Root { proof },
        ];
        for c in &challenges {
            assert_eq!(verifier.adjudicate(&ck, c), Ok(Verdict::Consistent));
        }
    }

    #[test]
    fn test_fraud_kinds() {
        let (prover, verifier, ck) = setup();
        let proof = prover.proof(ck.index()).unwrap();

        let ahead = ck.with_index(ck.index() + 1);
        assert_eq!(
            verifier.adjudicate(&ahead, &Challenge::Premature),
            Ok(Verdict::Fraudulent(FraudKind::Premature))
        );

        let bad_msg = ck.with_message_id(keccak256(b"bogus"));
        let c = Challenge::MessageId {
            proof: proof.clone(),
            actual: ck.message_id(),
        };
        assert_eq!(
            verifier.adjudicate(&bad_msg, &c),
            Ok(Verdict::Fraudulent(FraudKind::MessageId))
        );

        let bad_root = ck.with_root(!ck.root());
        assert_eq!(
            verifier.adjudicate(&bad_root, &Challenge::Root { proof }),
            Ok(Verdict::Fraudulent(FraudKind::Root))
        );
    }

    #[test]
    fn test_invalid_challenge_is_error() {
        let (_, verifier, ck) = setup();
        let junk = MerkleProof::new([Buf32::zero(); TREE_DEPTH]);
        let res = verifier.adjudicate(&ck, &Challenge::Root { proof: junk });
        assert!(matches!(
            res,
            Err(FraudProofError::NotMemberOfStoredCheckpoint { .. })
        ));
    }

    #[test]
    fn test_challenge_json() {
        let json = serde_json::json!({ "kind": "premature" });
        let c: Challenge = serde_json::from_value(json).unwrap();
        assert_eq!(c, Challenge::Premature);

        let v = serde_json::to_value(Verdict::Fraudulent(FraudKind::MessageId)).unwrap();
        assert_eq!(v, serde_json::json!({ "verdict": "fraudulent", "kind": "message_id" }));
        let v = serde_json::to_value(Verdict::Consistent).unwrap();
        assert_eq!(v, serde_json::json!({ "verdict": "consistent" }));
    }

    #[test]
    fn test_short_proof_rejected_on_decode() {
        let json = serde_json::json!({
            "kind": "root",
            "proof": vec![format!("0x{}", "00".repeat(32)); 31],
        });
        let err = serde_json::from_value::<Challenge>(json).unwrap_err();
        assert!(err.to_string().contains("31"), "{err}");
    }
}
