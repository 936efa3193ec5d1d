use arbitrary::{Arbitrary, Unstructured};
use rand_core::{CryptoRngCore, OsRng};

/// The default buffer size for the `ArbitraryGenerator`.
const ARB_GEN_LEN: usize = 16_384;

/// Produces [`Arbitrary`] values from random bytes.
#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates an instance of `T` from [`OsRng`] bytes.
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a>,
    {
        self.generate_with_rng(&mut OsRng)
    }

    /// Generates an instance of `T` from bytes drawn from `rng`.
    ///
    /// # Panics
    ///
    /// If `T` can't be built from the buffer after a few refills.
    pub fn generate_with_rng<T, R>(&mut self, rng: &mut R) -> T
    where
        T: for<'a> Arbitrary<'a>,
        R: CryptoRngCore,
    {
        const MAX_ATTEMPTS: usize = 16;
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            rng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match T::arbitrary(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        panic!("failed to generate arbitrary instance: {error_msg}");
    }
}
