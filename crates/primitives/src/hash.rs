//! Keccak-256 helpers.

use alloy_primitives::keccak256 as alloy_keccak256;

use crate::Buf32;

/// Keccak-256 of arbitrary bytes.
pub fn keccak256(data: impl AsRef<[u8]>) -> Buf32 {
    Buf32::new(alloy_keccak256(data).0)
}

/// Hashes two nodes as `keccak256(left || right)`.
pub fn keccak256_pair(left: &Buf32, right: &Buf32) -> Buf32 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left.as_bytes());
    buf[32..].copy_from_slice(right.as_bytes());
    keccak256(buf)
}
