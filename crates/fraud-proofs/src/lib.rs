//! Fraud predicates over attested checkpoints.
//!
//! Every predicate replays a Merkle inclusion proof against the canonical
//! snapshot held in a [`CanonicalStateStore`](hubwatch_state_store::CanonicalStateStore)
//! and never against values taken from the checkpoint under test.

mod adjudicate;
mod errors;
mod verifier;

pub use adjudicate::{Challenge, FraudKind, Verdict};
pub use errors::{FraudProofError, FraudProofResult};
pub use verifier::FraudProofVerifier;
