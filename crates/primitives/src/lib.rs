//! Digest and identifier types shared by the hubwatch crates.

#[macro_use]
mod macros;

mod buf;
pub mod hash;
mod ids;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use buf::Buf32;
pub use ids::{DomainId, LogId, LogKey};
