use hubwatch_primitives::{DomainId, LogKey};
use thiserror::Error;

pub type FraudProofResult<T> = Result<T, FraudProofError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FraudProofError {
    /// Checkpoint is for a log this verifier doesn't observe.
    #[error("checkpoint origin {origin} is not the local domain {local}")]
    NotLocal { origin: DomainId, local: DomainId },

    /// The proof doesn't place the leaf at `index` under the stored root, or
    /// there's no stored root at all.
    #[error("leaf {index} is not a member of the stored checkpoint for {log}")]
    NotMemberOfStoredCheckpoint { log: LogKey, index: u32 },
}
