//! Custom User-Provided Entropy Source.
//!
//! Lets a caller route externally gathered randomness (an HSM, a hardware token, a dice-roll
//! ceremony) into share generation.

use alloc::vec::Vec;
use zeroize::Zeroizing;
use super::{EntropyError, EntropySource, FULL_ENTROPY};

/// Source that buffers caller-injected entropy and hands it out in order.
pub struct CustomSource {
    buffer: Zeroizing<Vec<u8>>,
    estimate: f64,
}

impl CustomSource {
    /// Creates an empty source whose bytes the caller vouches to be uniformly random.
    pub fn new() -> Self {
        Self::with_estimate(FULL_ENTROPY)
    }

    /// Creates an empty source with an explicit entropy estimate (bits per byte).
    ///
    /// Estimates below [`FULL_ENTROPY`] are rejected by the splitter. NaN counts as zero.
    pub fn with_estimate(estimate: f64) -> Self {
        let estimate = if estimate.is_nan() {
            0.0
        } else {
            estimate.clamp(0.0, FULL_ENTROPY)
        };
        Self {
            buffer: Zeroizing::new(Vec::new()),
            estimate,
        }
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of buffered bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }

        dest.copy_from_slice(&self.buffer[..dest.len()]);
        self.buffer.drain(..dest.len()).for_each(drop);
        Ok(())
    }

    fn entropy_estimate(&self) -> f64 {
        self.estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_in_order() {
        let mut source = CustomSource::default();
        assert_eq!(source.remaining(), 0);
        source.add_bytes(&[0xA1, 0xB2, 0xC3]);
        source.add_bytes(&[0xD4]);
        assert_eq!(source.remaining(), 4);

        let mut buf = [0u8; 3];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [0xA1, 0xB2, 0xC3]);
        assert_eq!(source.remaining(), 1);

        // A short pool fails without consuming what is left
        assert_eq!(source.fill(&mut buf), Err(EntropyError::Exhausted));
        assert_eq!(source.remaining(), 1);

        let mut last = [0u8; 1];
        source.fill(&mut last).unwrap();
        assert_eq!(last, [0xD4]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_estimate_is_clamped() {
        assert_eq!(CustomSource::new().entropy_estimate(), 8.0);
        assert_eq!(CustomSource::with_estimate(2.0).entropy_estimate(), 2.0);
        assert_eq!(CustomSource::with_estimate(12.0).entropy_estimate(), 8.0);
        assert_eq!(CustomSource::with_estimate(f64::NAN).entropy_estimate(), 0.0);
    }
}
