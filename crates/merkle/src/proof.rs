use borsh::{BorshDeserialize, BorshSerialize};
use hubwatch_primitives::Buf32;
use serde::{Deserialize, Serialize};

use crate::{MerkleError, TREE_DEPTH, hash_node};

/// Recomputes a candidate root from `leaf`, its `index` and one sibling per
/// level, bottom-up.
///
/// At level `i`, bit `i` of `index` picks the side: when clear the running
/// hash is the left operand, when set it is the right operand.
pub fn branch_root<const DEPTH: usize>(leaf: Buf32, proof: &[Buf32; DEPTH], index: u32) -> Buf32 {
    let mut node = leaf;
    for (level, sibling) in proof.iter().enumerate() {
        let bit = u32::try_from(level)
            .ok()
            .and_then(|shift| index.checked_shr(shift))
            .unwrap_or(0)
            & 1;
        node = if bit == 1 {
            hash_node(sibling, &node)
        } else {
            hash_node(&node, sibling)
        };
    }
    node
}

/// Inclusion proof for a leaf of the message tree, one sibling per level
/// starting at the leaf level.
///
/// The length is fixed by the type. Decoding from a sequence of any other
/// length fails with [`MerkleError::ProofLengthMismatch`].
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(try_from = "Vec<Buf32>", into = "Vec<Buf32>")]
pub struct MerkleProof([Buf32; TREE_DEPTH]);

impl MerkleProof {
    pub const fn new(siblings: [Buf32; TREE_DEPTH]) -> Self {
        Self(siblings)
    }

    pub fn siblings(&self) -> &[Buf32; TREE_DEPTH] {
        &self.0
    }

    /// Root implied by this proof for `leaf` at `index`.
    pub fn branch_root(&self, leaf: Buf32, index: u32) -> Buf32 {
        branch_root(leaf, &self.0, index)
    }
}

impl From<[Buf32; TREE_DEPTH]> for MerkleProof {
    fn from(siblings: [Buf32; TREE_DEPTH]) -> Self {
        Self(siblings)
    }
}

impl TryFrom<&[Buf32]> for MerkleProof {
    type Error = MerkleError;

    fn try_from(value: &[Buf32]) -> Result<Self, Self::Error> {
        <[Buf32; TREE_DEPTH]>::try_from(value)
            .map(Self)
            .map_err(|_| MerkleError::ProofLengthMismatch {
                expected: TREE_DEPTH,
                got: value.len(),
            })
    }
}

impl TryFrom<Vec<Buf32>> for MerkleProof {
    type Error = MerkleError;

    fn try_from(value: Vec<Buf32>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl From<MerkleProof> for Vec<Buf32> {
    fn from(proof: MerkleProof) -> Self {
        proof.0.to_vec()
    }
}
