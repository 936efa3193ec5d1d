//! `check` subcommand.

use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use hubwatch_checkpoint_types::Checkpoint;
use hubwatch_fraud_proofs::{FraudProofResult, FraudProofVerifier};
use hubwatch_merkle::MerkleProof;
use hubwatch_primitives::{Buf32, DomainId, LogKey};
use hubwatch_state_store::{CanonicalState, CanonicalStateStore};
use serde::{Deserialize, Serialize};
use tracing::*;

/// Everything needed to evaluate a checkpoint offline.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChallengeFile {
    pub checkpoint: Checkpoint,

    /// Trusted `(root, count)` read from the hub.
    pub canonical: CanonicalState,

    /// Proof for the leaf at the checkpoint's index.
    #[serde(default)]
    pub proof: Option<MerkleProof>,

    /// The real leaf at the checkpoint's index.
    #[serde(default)]
    pub actual_message_id: Option<Buf32>,
}

impl ChallengeFile {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse challenge {}", path.display()))
    }
}

/// Result of a single predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Outcome {
    Fraudulent(bool),
    Rejected(String),
    Skipped,
}

impl From<FraudProofResult<bool>> for Outcome {
    fn from(res: FraudProofResult<bool>) -> Self {
        match res {
            Ok(v) => Outcome::Fraudulent(v),
            Err(e) => Outcome::Rejected(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CheckReport {
    pub log: LogKey,
    pub index: u32,
    pub non_local: bool,
    pub premature: Outcome,
    pub fraudulent_message_id: Outcome,
    pub fraudulent_root: Outcome,
}

impl CheckReport {
    pub(crate) fn any_fraud(&self) -> bool {
        [
            &self.premature,
            &self.fraudulent_message_id,
            &self.fraudulent_root,
        ]
        .into_iter()
        .any(|o| *o == Outcome::Fraudulent(true))
    }
}

/// Runs every predicate that the file carries enough evidence for.
pub(crate) fn run(input: &ChallengeFile, local_domain: DomainId) -> CheckReport {
    let ck = &input.checkpoint;
    let store = Arc::new(CanonicalStateStore::new());
    store.snapshot(ck.log_key(), input.canonical.root(), input.canonical.count());
    let verifier = FraudProofVerifier::new(local_domain, store);

    let fraudulent_message_id = match (&input.proof, input.actual_message_id) {
        (Some(proof), Some(actual)) => verifier.is_fraudulent_message_id(ck, proof, actual).into(),
        _ => Outcome::Skipped,
    };
    let fraudulent_root = match &input.proof {
        Some(proof) => verifier.is_fraudulent_root(ck, proof).into(),
        None => Outcome::Skipped,
    };

    let report = CheckReport {
        log: ck.log_key(),
        index: ck.index(),
        non_local: verifier.is_non_local(ck),
        premature: verifier.is_premature(ck).into(),
        fraudulent_message_id,
        fraudulent_root,
    };

    if report.any_fraud() {
        warn!(log = %report.log, index = report.index, "checkpoint is fraudulent");
    } else {
        info!(log = %report.log, index = report.index, "no fraud found");
    }
    report
}
