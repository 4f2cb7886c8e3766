//! Sharing parameters.
//!
//! A [`SharingConfig`] is the validated (parts, threshold) pair a split runs with. The host
//! application builds one from its own settings and hands it to the splitter.

use crate::mpc::MpcError;

/// Smallest threshold the scheme supports.
pub const MIN_THRESHOLD: usize = 2;

/// Largest number of shares (and largest threshold). The threshold travels in a single tag
/// byte.
pub const MAX_SHARES: usize = 255;

/// Validated split parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharingConfig {
    parts: usize,
    threshold: usize,
}

impl SharingConfig {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    /// * `MpcError::InvalidThreshold` unless `2 <= threshold <= 255`.
    /// * `MpcError::InvalidPartCount` unless `threshold <= parts <= 255`.
    pub fn new(parts: usize, threshold: usize) -> Result<Self, MpcError> {
        if threshold < MIN_THRESHOLD || threshold > MAX_SHARES {
            return Err(MpcError::InvalidThreshold);
        }
        if parts < threshold || parts > MAX_SHARES {
            return Err(MpcError::InvalidPartCount);
        }
        Ok(Self { parts, threshold })
    }

    /// Total number of shares produced.
    pub fn parts(&self) -> usize {
        self.parts
    }

    /// Shares required to reconstruct.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Length in bytes of every share for a secret of `secret_len` bytes.
    pub fn share_len(&self, secret_len: usize) -> usize {
        secret_len * self.threshold + 1
    }
}
