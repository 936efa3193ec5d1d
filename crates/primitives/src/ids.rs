use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::Buf32;

/// Length of an EVM-style address that gets left-padded into a [`LogId`].
const ADDRESS_LEN: usize = 20;

/// Identifier of the chain/domain that owns a log.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct DomainId(u32);

impl_thin_wrapper!(DomainId => u32);

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of one log instance, typically the hub's address on its
/// chain.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct LogId(Buf32);

impl_thin_wrapper!(LogId => Buf32);

impl LogId {
    /// Builds a log id from a 20-byte address, left-padded with zeroes.
    pub fn from_address(addr: [u8; ADDRESS_LEN]) -> Self {
        let mut buf = [0u8; 32];
        buf[32 - ADDRESS_LEN..].copy_from_slice(&addr);
        Self(Buf32::new(buf))
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:?}", self.0)
    }
}

/// Key under which canonical state for a log is tracked.
///
/// Scoped by origin domain as well as the log id so identical log ids on
/// different chains never collide.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct LogKey {
    origin: DomainId,
    log_id: LogId,
}

impl LogKey {
    pub const fn new(origin: DomainId, log_id: LogId) -> Self {
        Self { origin, log_id }
    }

    pub const fn origin(&self) -> DomainId {
        self.origin
    }

    pub const fn log_id(&self) -> LogId {
        self.log_id
    }
}

impl fmt::Display for LogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.origin, self.log_id)
    }
}
