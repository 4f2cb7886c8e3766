//! Entropy sources for share generation.
//!
//! Share generation draws every random coordinate through the [`EntropySource`] trait so the
//! scheme never touches a random number generator directly. Production code uses
//! [`RngSource::os`], which reads the operating system CSPRNG; callers with their own entropy
//! pipeline can feed bytes through [`CustomSource`].
//!
//! # Design
//! - **Fail-Closed**: A source that cannot deliver the requested bytes returns an error and the
//!   split is aborted. Nothing is retried at this layer.
//! - **Self-Reported Quality**: Each source reports an entropy estimate; the splitter refuses
//!   sources that do not claim full entropy.

pub mod custom;
pub mod os;

use core::fmt;

pub use custom::CustomSource;
pub use os::RngSource;

/// Entropy per byte (in bits) a source must claim to be accepted for share generation.
pub const FULL_ENTROPY: f64 = 8.0;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// Source initialization failed.
    InitFailed,
    /// Failed to collect sufficient entropy bytes.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::InitFailed => write!(f, "Entropy source initialization failed"),
            EntropyError::CollectionFailed => write!(f, "Failed to collect entropy"),
            EntropyError::Exhausted => write!(f, "Entropy source exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails. `dest` contents are unspecified then.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns the estimated entropy per byte (in bits, 0.0-8.0).
    fn entropy_estimate(&self) -> f64;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }

    fn entropy_estimate(&self) -> f64 {
        (**self).entropy_estimate()
    }
}
