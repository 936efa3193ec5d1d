/// 32-byte digest used for Merkle nodes, roots and message ids.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Buf32(pub [u8; 32]);

impl_digest_buf!(Buf32, 32);
