//! Fixed-depth incremental Merkle accumulator over message ids.
//!
//! The tree is append-only. [`IncrementalMerkle`] keeps one partial-subtree
//! hash per level and can produce the current root without storing the
//! leaves. [`MerkleProver`] additionally retains leaves so it can hand out
//! inclusion proofs, which are checked with [`branch_root`].

mod errors;
mod hasher;
mod incremental;
mod proof;
mod prover;

pub use errors::{MerkleError, MerkleResult};
pub use hasher::{hash_node, zero_hashes};
pub use incremental::IncrementalMerkle;
pub use proof::{MerkleProof, branch_root};
pub use prover::MerkleProver;

/// Depth of the message tree.
pub const TREE_DEPTH: usize = 32;
