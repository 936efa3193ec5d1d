//! Proptest strategies for primitive types.

#![allow(unreachable_pub, reason = "test utils module")]

use proptest::prelude::*;

use crate::{Buf32, DomainId, LogId, LogKey};

/// Strategy for generating random [`Buf32`] values.
pub fn buf32_strategy() -> impl Strategy<Value = Buf32> {
    any::<[u8; 32]>().prop_map(Buf32::from)
}

/// Strategy for generating random [`DomainId`] values.
pub fn domain_id_strategy() -> impl Strategy<Value = DomainId> {
    any::<u32>().prop_map(DomainId::from)
}

/// Strategy for generating random [`LogId`] values.
pub fn log_id_strategy() -> impl Strategy<Value = LogId> {
    buf32_strategy().prop_map(LogId::from)
}

/// Strategy for generating random [`LogKey`] values.
pub fn log_key_strategy() -> impl Strategy<Value = LogKey> {
    (domain_id_strategy(), log_id_strategy()).prop_map(|(d, l)| LogKey::new(d, l))
}
