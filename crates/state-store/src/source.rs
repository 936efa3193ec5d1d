use hubwatch_primitives::LogKey;

use crate::{CanonicalState, SourceError};

/// Authoritative reader of a hub's message tree.
///
/// Implementations must read directly from the hub that owns the log. A
/// value derived from an untrusted checkpoint must never be returned here.
pub trait CheckpointSource {
    /// Current `(root, count)` of the log.
    fn latest_state(&self, log: &LogKey) -> Result<CanonicalState, SourceError>;
}

impl<T: CheckpointSource + ?Sized> CheckpointSource for &T {
    fn latest_state(&self, log: &LogKey) -> Result<CanonicalState, SourceError> {
        (**self).latest_state(log)
    }
}
