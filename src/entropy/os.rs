//! Operating-system CSPRNG source.
//!
//! Wraps any `rand_core` generator that is marked [`CryptoRng`]. The default constructor uses
//! [`OsRng`], which reads `getrandom(2)` or the platform equivalent.

use rand_core::{CryptoRng, OsRng, RngCore};
use super::{EntropyError, EntropySource, FULL_ENTROPY};

/// Entropy source backed by a cryptographically secure `rand_core` generator.
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<OsRng> {
    /// Source reading the operating system CSPRNG.
    pub fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> RngSource<R> {
    /// Wraps a caller-provided CSPRNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngSource<R> {
    fn name(&self) -> &'static str {
        "CryptoRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng.try_fill_bytes(dest).map_err(|e| {
            log::error!("CSPRNG read failed: {}", e);
            EntropyError::CollectionFailed
        })
    }

    fn entropy_estimate(&self) -> f64 {
        FULL_ENTROPY
    }
}
