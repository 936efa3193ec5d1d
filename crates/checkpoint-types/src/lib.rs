//! Checkpoint types for attested message-log snapshots.

mod checkpoint;

pub use checkpoint::*;
