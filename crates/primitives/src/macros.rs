/// Generates constructors, accessors and conversions for a newtype around a
/// plain value.
///
/// This must be a newtype a la `struct Foo(Bar);`.
macro_rules! impl_thin_wrapper {
    ($target:ty => $inner:ty) => {
        impl $target {
            pub const fn new(v: $inner) -> Self {
                Self(v)
            }

            pub const fn inner(&self) -> &$inner {
                &self.0
            }

            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl ::std::convert::From<$inner> for $target {
            fn from(value: $inner) -> $target {
                <$target>::new(value)
            }
        }

        impl ::std::convert::From<$target> for $inner {
            fn from(value: $target) -> $inner {
                value.into_inner()
            }
        }
    };
}

/// Generates the full API for a fixed-size byte buffer newtype `struct
/// Name([u8; LEN]);`.
///
/// Covers construction, byte access, bitwise complement, hex formatting,
/// borsh, arbitrary and hex-string serde.
macro_rules! impl_digest_buf {
    ($name:ident, $len:expr) => {
        impl $name {
            pub const LEN: usize = $len;

            pub const fn new(data: [u8; $len]) -> Self {
                Self(data)
            }

            pub const fn zero() -> Self {
                Self([0; $len])
            }

            pub const fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub const fn into_array(self) -> [u8; $len] {
                self.0
            }

            pub const fn is_zero(&self) -> bool {
                let mut i = 0;
                while i < $len {
                    if self.0[i] != 0 {
                        return false;
                    }
                    i += 1;
                }
                true
            }

            /// Returns a copy with a single bit inverted.
            ///
            /// `bit` counts from the most significant bit of byte 0 and wraps
            /// around the buffer width.
            pub const fn with_flipped_bit(mut self, bit: usize) -> Self {
                let bit = bit % ($len * 8);
                self.0[bit / 8] ^= 0x80 >> (bit % 8);
                self
            }
        }

        impl ::std::ops::Not for $name {
            type Output = Self;

            fn not(mut self) -> Self {
                for b in self.0.iter_mut() {
                    *b = !*b;
                }
                self
            }
        }

        impl ::std::convert::AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::std::convert::From<[u8; $len]> for $name {
            fn from(data: [u8; $len]) -> Self {
                Self(data)
            }
        }

        impl ::std::convert::From<$name> for [u8; $len] {
            fn from(buf: $name) -> Self {
                buf.0
            }
        }

        impl<'a> ::std::convert::TryFrom<&'a [u8]> for $name {
            type Error = &'a [u8];

            fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
                <[u8; $len]>::try_from(value).map(Self).map_err(|_| value)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::hex::FromHexError;

            /// Parses a hex string, with or without a `0x` prefix.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(s);
                let mut array = [0u8; $len];
                ::hex::decode_to_slice(s, &mut array)?;
                Ok(Self(array))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                // twice as large, required by the hex::encode_to_slice.
                let mut buf = [0; $len * 2];
                ::hex::encode_to_slice(self.0, &mut buf).expect("buf: enc hex");
                // SAFETY: hex output is always ascii
                f.write_str(unsafe { ::core::str::from_utf8_unchecked(&buf) })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                // fmt only first and last bits of data.
                let mut buf = [0; 6];
                ::hex::encode_to_slice(&self.0[..3], &mut buf).expect("buf: enc hex");
                // SAFETY: hex output is always ascii
                f.write_str(unsafe { ::core::str::from_utf8_unchecked(&buf) })?;
                f.write_str("..")?;
                ::hex::encode_to_slice(&self.0[$len - 3..], &mut buf).expect("buf: enc hex");
                // SAFETY: hex output is always ascii
                f.write_str(unsafe { ::core::str::from_utf8_unchecked(&buf) })
            }
        }

        impl ::borsh::BorshSerialize for $name {
            fn serialize<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                writer.write_all(&self.0)
            }
        }

        impl ::borsh::BorshDeserialize for $name {
            fn deserialize_reader<R: ::std::io::Read>(reader: &mut R) -> ::std::io::Result<Self> {
                let mut array = [0u8; $len];
                reader.read_exact(&mut array)?;
                Ok(Self(array))
            }
        }

        impl<'a> ::arbitrary::Arbitrary<'a> for $name {
            fn arbitrary(u: &mut ::arbitrary::Unstructured<'a>) -> ::arbitrary::Result<Self> {
                let mut array = [0u8; $len];
                u.fill_buffer(&mut array)?;
                Ok(Self(array))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&format!("0x{}", ::hex::encode(self.0)))
                } else {
                    serializer.serialize_bytes(&self.0)
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                // Scoped to the fn so each expansion gets its own visitor.
                struct BufVisitor;

                impl<'de> ::serde::de::Visitor<'de> for BufVisitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        formatter: &mut ::std::fmt::Formatter<'_>,
                    ) -> ::std::fmt::Result {
                        write!(
                            formatter,
                            "a hex string with an optional 0x prefix representing {} bytes",
                            $len
                        )
                    }

                    fn visit_str<E>(self, v: &str) -> Result<$name, E>
                    where
                        E: ::serde::de::Error,
                    {
                        v.parse::<$name>().map_err(E::custom)
                    }

                    fn visit_bytes<E>(self, v: &[u8]) -> Result<$name, E>
                    where
                        E: ::serde::de::Error,
                    {
                        <$name>::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(BufVisitor)
                } else {
                    deserializer.deserialize_bytes(BufVisitor)
                }
            }
        }
    };
}
