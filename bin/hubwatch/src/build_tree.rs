//! `build-tree` subcommand.

use std::{fs, path::Path};

use anyhow::Context;
use hubwatch_merkle::{MerkleProof, MerkleProver};
use hubwatch_primitives::Buf32;
use serde::Serialize;
use tracing::*;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LatestCheckpoint {
    pub root: Buf32,
    pub index: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LeafProof {
    pub index: u32,
    pub leaf: Buf32,
    pub proof: MerkleProof,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TreeReport {
    pub root: Buf32,
    pub count: u32,
    pub latest_checkpoint: Option<LatestCheckpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<LeafProof>,
}

pub(crate) fn load_leaves(path: &Path) -> anyhow::Result<Vec<Buf32>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse leaves {}", path.display()))
}

pub(crate) fn run(leaves: Vec<Buf32>, proof_index: Option<u32>) -> anyhow::Result<TreeReport> {
    let prover: MerkleProver = MerkleProver::from_leaves(leaves).context("build tree")?;
    debug!(count = prover.count(), root = %prover.root(), "built tree");

    let proof = proof_index
        .map(|index| -> anyhow::Result<LeafProof> {
            let proof = prover.proof(index)?;
            let leaf = prover
                .leaf(index)
                .context("leaf missing for proven index")?;
            Ok(LeafProof { index, leaf, proof })
        })
        .transpose()
        .context("build proof")?;

    Ok(TreeReport {
        root: prover.root(),
        count: prover.count(),
        latest_checkpoint: prover
            .latest_checkpoint()
            .map(|(root, index)| LatestCheckpoint { root, index }),
        proof,
    })
}
