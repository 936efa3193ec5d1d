use hubwatch_primitives::{Buf32, hash::keccak256_pair};

/// Combines the left and right children into their parent node.
pub fn hash_node(left: &Buf32, right: &Buf32) -> Buf32 {
    keccak256_pair(left, right)
}

/// Roots of all-empty subtrees, indexed by height.
///
/// `zeros[0]` is the empty leaf and `zeros[i + 1] = H(zeros[i], zeros[i])`.
pub fn zero_hashes<const DEPTH: usize>() -> [Buf32; DEPTH] {
    let mut zeros = [Buf32::zero(); DEPTH];
    for level in 1..DEPTH {
        zeros[level] = hash_node(&zeros[level - 1], &zeros[level - 1]);
    }
    zeros
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hashes_chain() {
        let zeros = zero_hashes::<4>();
        assert!(zeros[0].is_zero());
        for level in 1..4 {
            assert_eq!(zeros[level], hash_node(&zeros[level - 1], &zeros[level - 1]));
        }
    }

    #[test]
    fn test_zero_hashes_known_value() {
        // keccak256 of 64 zero bytes
        let expected: Buf32 = "ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5"
            .parse()
            .unwrap();
        assert_eq!(zero_hashes::<2>()[1], expected);
    }
}
