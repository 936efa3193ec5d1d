//! Trusted per-log `(root, count)` snapshots.
//!
//! The store only ever records what an authoritative reader of the hub hands
//! it. Fraud predicates read snapshots from here and never from the
//! checkpoints under test.

mod errors;
mod source;
mod state;
mod store;

pub use errors::{SourceError, StoreError, StoreResult};
pub use source::CheckpointSource;
pub use state::CanonicalState;
pub use store::CanonicalStateStore;
