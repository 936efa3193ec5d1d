//! Inclusion proofs stay consistent with the incremental root as the tree
//! grows.

use hubwatch_merkle::{IncrementalMerkle, MerkleProver, TREE_DEPTH, branch_root};
use hubwatch_primitives::{Buf32, test_utils::buf32_strategy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn proptest_latest_leaf_proves_after_each_append(
        leaves in prop::collection::vec(buf32_strategy(), 1..48)
    ) {
        let mut prover = MerkleProver::<TREE_DEPTH>::new();
        for (i, leaf) in leaves.iter().enumerate() {
            let index = prover.ingest(*leaf).unwrap();
            prop_assert_eq!(index as usize, i);

            let proof = prover.proof(index).unwrap();
            prop_assert_eq!(proof.branch_root(*leaf, index), prover.root());
        }
    }

    #[test]
    fn proptest_prover_root_matches_bare_accumulator(
        leaves in prop::collection::vec(buf32_strategy(), 0..64)
    ) {
        let mut tree = IncrementalMerkle::<TREE_DEPTH>::new();
        for leaf in &leaves {
            tree.append(*leaf).unwrap();
        }
        let prover = MerkleProver::<TREE_DEPTH>::from_leaves(leaves.iter().copied()).unwrap();
        prop_assert_eq!(tree.root(), prover.root());
        prop_assert_eq!(tree.count() as usize, leaves.len());
    }

    #[test]
    fn proptest_old_proofs_go_stale(
        leaves in prop::collection::vec(buf32_strategy(), 2..32),
        extra in buf32_strategy().prop_filter("empty leaf", |b| !b.is_zero()),
    ) {
        let mut prover = MerkleProver::<TREE_DEPTH>::from_leaves(leaves.iter().copied()).unwrap();
        let old_proof = prover.proof(0).unwrap();
        let old_root = prover.root();
        prover.ingest(extra).unwrap();

        // Proof still reproduces the root it was issued against.
        prop_assert_eq!(old_proof.branch_root(leaves[0], 0), old_root);
        prop_assert_ne!(old_root, prover.root());
    }
}

#[test]
fn test_small_depth_matches_full_recomputation() {
    let leaves: Vec<Buf32> = (0u8..5).map(|i| Buf32::new([i + 1; 32])).collect();
    let prover = MerkleProver::<3>::from_leaves(leaves.iter().copied()).unwrap();
    for (i, leaf) in leaves.iter().enumerate() {
        let siblings = prover.siblings(i as u32).unwrap();
        assert_eq!(branch_root(*leaf, &siblings, i as u32), prover.root());
    }
}
