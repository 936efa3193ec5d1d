use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// The tree cannot address another leaf.
    #[error("merkle tree full ({capacity} leaves)")]
    CapacityExceeded { capacity: u64 },

    /// Asked for a proof of a leaf that hasn't been appended.
    #[error("leaf index {index} out of range (tree has {count} leaves)")]
    IndexOutOfRange { index: u32, count: u32 },

    /// Decoded proof doesn't have one sibling per tree level.
    #[error("proof has {got} siblings, expected {expected}")]
    ProofLengthMismatch { expected: usize, got: usize },
}
