use borsh::{BorshDeserialize, BorshSerialize};
use hubwatch_primitives::Buf32;

use crate::{MerkleError, MerkleResult, TREE_DEPTH, hash_node, zero_hashes};

/// Append-only Merkle tree of fixed depth that stores only the rightmost
/// partial subtree hash of every level.
///
/// Unfilled positions are treated as empty leaves, so the root always covers
/// a full tree of `2^DEPTH` slots.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct IncrementalMerkle<const DEPTH: usize = TREE_DEPTH> {
    /// Hash of the most recently completed left subtree at each level.
    branch: [Buf32; DEPTH],

    /// Number of leaves appended so far.
    count: u32,
}

impl<const DEPTH: usize> Default for IncrementalMerkle<DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const DEPTH: usize> IncrementalMerkle<DEPTH> {
    pub fn new() -> Self {
        Self {
            branch: [Buf32::zero(); DEPTH],
            count: 0,
        }
    }

    /// Maximum number of leaves the tree accepts: `2^DEPTH - 1`, capped at
    /// `u32::MAX` so the count always fits.
    ///
    /// The last slot of the full tree is never filled, so the highest index
    /// ever returned by [`append`](Self::append) is `2^DEPTH - 2`.
    pub const fn capacity() -> u64 {
        if DEPTH >= 32 {
            u32::MAX as u64
        } else {
            (1u64 << DEPTH) - 1
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends a leaf and returns its zero-based index.
    pub fn append(&mut self, leaf: Buf32) -> MerkleResult<u32> {
        let capacity = Self::capacity();
        if u64::from(self.count) >= capacity {
            return Err(MerkleError::CapacityExceeded { capacity });
        }

        let index = self.count;
        self.count += 1;

        // Carry the new node up until it lands on a level whose left slot is
        // free. Below capacity the loop always finds one.
        let mut size = self.count;
        let mut node = leaf;
        for level in 0..DEPTH {
            if size & 1 == 1 {
                self.branch[level] = node;
                break;
            }
            node = hash_node(&self.branch[level], &node);
            size >>= 1;
        }

        Ok(index)
    }

    /// Root over all appended leaves.
    pub fn root(&self) -> Buf32 {
        let zeros = zero_hashes::<DEPTH>();
        let mut node = Buf32::zero();
        for level in 0..DEPTH {
            let bit = u32::try_from(level)
                .ok()
                .and_then(|shift| self.count.checked_shr(shift))
                .unwrap_or(0)
                & 1;
            node = if bit == 1 {
                hash_node(&self.branch[level], &node)
            } else {
                hash_node(&node, &zeros[level])
            };
        }
        node
    }

    /// The `(root, latest index)` pair a hub reports as its latest
    /// checkpoint, or `None` while the tree is empty.
    pub fn latest_checkpoint(&self) -> Option<(Buf32, u32)> {
        self.count.checked_sub(1).map(|index| (self.root(), index))
    }
}

#[cfg(test)]
mod tests {
    use hubwatch_primitives::hash::keccak256;

    use super::*;

    fn leaf(i: u32) -> Buf32 {
        keccak256(i.to_be_bytes())
    }

    #[test]
    fn test_empty_root_is_top_zero_hash() {
        let tree = IncrementalMerkle::<4>::new();
        let zeros = zero_hashes::<4>();
        assert_eq!(tree.root(), hash_node(&zeros[3], &zeros[3]));
        assert_eq!(tree.latest_checkpoint(), None);
    }

    #[test]
    fn test_known_empty_root_depth_32() {
        // Empty root of the 32-level keccak tree used by deployed hubs.
        let expected: Buf32 = "27ae5ba08d7291c96c8cbddcc148bf48a6d68c7974b94356f53754ef6171d757"
            .parse()
            .unwrap();
        assert_eq!(IncrementalMerkle::<TREE_DEPTH>::new().root(), expected);
    }

    #[test]
    fn test_two_leaf_root() {
        let mut tree = IncrementalMerkle::<2>::new();
        assert_eq!(tree.append(leaf(0)), Ok(0));
        assert_eq!(tree.append(leaf(1)), Ok(1));
        let empty_pair = hash_node(&Buf32::zero(), &Buf32::zero());
        assert_eq!(
            tree.root(),
            hash_node(&hash_node(&leaf(0), &leaf(1)), &empty_pair)
        );
    }

    #[test]
    fn test_three_leaf_root() {
        let mut tree = IncrementalMerkle::<2>::new();
        for i in 0..3 {
            tree.append(leaf(i)).unwrap();
        }
        let expected = hash_node(
            &hash_node(&leaf(0), &leaf(1)),
            &hash_node(&leaf(2), &Buf32::zero()),
        );
        assert_eq!(tree.root(), expected);
        assert_eq!(tree.latest_checkpoint(), Some((expected, 2)));
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut tree = IncrementalMerkle::<3>::new();
        assert_eq!(IncrementalMerkle::<3>::capacity(), 7);
        for i in 0..7 {
            assert_eq!(tree.append(leaf(i)), Ok(i));
        }
        // Highest index handed out is 2^3 - 2; the eighth slot stays empty.
        let (root, latest) = tree.latest_checkpoint().unwrap();
        assert_eq!(latest, 6);

        assert_eq!(
            tree.append(leaf(7)),
            Err(MerkleError::CapacityExceeded { capacity: 7 })
        );
        assert_eq!(tree.count(), 7);
        assert_eq!(tree.root(), root);
    }

    #[test]
    fn test_capacity_full_depth() {
        assert_eq!(IncrementalMerkle::<TREE_DEPTH>::capacity(), u64::from(u32::MAX));
        assert_eq!(IncrementalMerkle::<0>::capacity(), 0);
    }

    #[test]
    fn test_root_changes_with_every_append() {
        let mut tree = IncrementalMerkle::<TREE_DEPTH>::new();
        let mut prev = tree.root();
        for i in 0..16 {
            tree.append(leaf(i)).unwrap();
            let root = tree.root();
            assert_ne!(root, prev);
            prev = root;
        }
    }
}
