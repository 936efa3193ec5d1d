use hubwatch_primitives::Buf32;

use crate::{
    IncrementalMerkle, MerkleError, MerkleProof, MerkleResult, TREE_DEPTH, branch_root, hash_node,
    zero_hashes,
};

/// Message tree that keeps every leaf so it can produce inclusion proofs
/// against its current root.
#[derive(Clone, Debug, Default)]
pub struct MerkleProver<const DEPTH: usize = TREE_DEPTH> {
    tree: IncrementalMerkle<DEPTH>,
    leaves: Vec<Buf32>,
}

impl<const DEPTH: usize> MerkleProver<DEPTH> {
    pub fn new() -> Self {
        Self {
            tree: IncrementalMerkle::new(),
            leaves: Vec::new(),
        }
    }

    /// Builds a prover by appending `leaves` in order.
    pub fn from_leaves(leaves: impl IntoIterator<Item = Buf32>) -> MerkleResult<Self> {
        let mut prover = Self::new();
        for leaf in leaves {
            prover.ingest(leaf)?;
        }
        Ok(prover)
    }

    /// Appends a leaf, returning its index.
    pub fn ingest(&mut self, leaf: Buf32) -> MerkleResult<u32> {
        let index = self.tree.append(leaf)?;
        self.leaves.push(leaf);
        Ok(index)
    }

    pub fn root(&self) -> Buf32 {
        self.tree.root()
    }

    pub fn count(&self) -> u32 {
        self.tree.count()
    }

    pub fn latest_checkpoint(&self) -> Option<(Buf32, u32)> {
        self.tree.latest_checkpoint()
    }

    pub fn leaf(&self, index: u32) -> Option<Buf32> {
        self.leaves.get(index as usize).copied()
    }

    /// Sibling path of the leaf at `index` against the current root.
    pub fn siblings(&self, index: u32) -> MerkleResult<[Buf32; DEPTH]> {
        let count = self.count();
        if index >= count {
            return Err(MerkleError::IndexOutOfRange { index, count });
        }

        let zeros = zero_hashes::<DEPTH>();
        let mut siblings = [Buf32::zero(); DEPTH];
        let mut nodes = self.leaves.clone();
        let mut pos = index as usize;

        for level in 0..DEPTH {
            siblings[level] = nodes.get(pos ^ 1).copied().unwrap_or(zeros[level]);
            nodes = nodes
                .chunks(2)
                .map(|pair| hash_node(&pair[0], pair.get(1).unwrap_or(&zeros[level])))
                .collect();
            pos >>= 1;
        }

        Ok(siblings)
    }

    /// Checks `leaf` at `index` against the current root.
    pub fn verify(&self, leaf: Buf32, siblings: &[Buf32; DEPTH], index: u32) -> bool {
        branch_root(leaf, siblings, index) == self.root()
    }
}

impl MerkleProver<TREE_DEPTH> {
    /// Inclusion proof of the leaf at `index` against the current root.
    pub fn proof(&self, index: u32) -> MerkleResult<MerkleProof> {
        self.siblings(index).map(MerkleProof::new)
    }
}
