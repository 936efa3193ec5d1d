use hubwatch_primitives::LogKey;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a [`CheckpointSource`](crate::CheckpointSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source doesn't serve this log.
    #[error("unknown log {0}")]
    UnknownLog(LogKey),

    /// The source couldn't be read.
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("refresh from source: {0}")]
    Source(#[from] SourceError),
}
