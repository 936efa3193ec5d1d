//! Shared fixtures for hubwatch tests.

#![allow(unreachable_pub, reason = "test utils module")]

mod arb;
mod hub;

pub use arb::ArbitraryGenerator;
pub use hub::{TestHub, message_id};
