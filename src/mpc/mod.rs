//! Threshold secret sharing over GF(256) hyperplanes.
//!
//! Every secret byte `s` picks a random point `x = (s, x_1, ..., x_{t-1})` in GF(256)^t. Each
//! party receives a random hyperplane through that point, written as its coefficient vector
//! `(a_0, ..., a_{t-2}, c)` with `c = x_{t-1} + sum a_j * x_j`. Any `t` hyperplanes intersect in
//! exactly the dealer's point (with overwhelming probability), and its first coordinate is the
//! secret byte. Fewer than `t` hyperplanes intersect in a line or larger flat, leaving the
//! secret undetermined.
//!
//! # Components
//! - `hyperplane`: random point generation and evaluation of a party's last coordinate.
//! - `solver`: Gaussian elimination over GF(256).
//! - `codec`: the flat share byte format with its trailing threshold tag.
//! - `share`: owned share type.
//! - `quorum`: secret splitting.
//! - `reconstruct`: secret recovery.
//!
//! # Security
//! - **Zeroization**: Hyperplane points, party vectors and working matrices are wiped after use;
//!   shares are wiped on drop.
//! - **No Integrity**: A corrupted share yields a wrong secret, not an error. Authenticate shares
//!   out of band if that matters.

pub mod codec;
pub mod hyperplane;
pub mod quorum;
pub mod reconstruct;
pub mod share;
pub mod solver;

use alloc::vec::Vec;
use core::fmt;
use crate::config::SharingConfig;
use crate::core::gf256::FieldTables;
use crate::entropy::EntropySource;

/// Errors for secret sharing operations.
///
/// None of the variants carries secret material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpcError {
    /// Threshold outside `2..=255`.
    InvalidThreshold,
    /// Share count below the threshold or above 255.
    InvalidPartCount,
    /// The secret to split is empty.
    EmptySecret,
    /// No shares were supplied.
    NoShares,
    /// The share at this position is empty.
    EmptyShare { index: usize },
    /// The share at this position differs in length from the first share.
    ShareLengthMismatch { index: usize },
    /// The share at this position carries a different threshold tag than the first share.
    ThresholdMismatch { index: usize },
    /// A share is not a valid encoding: empty, a threshold tag below 2, or a body that does not
    /// split into whole blocks of `threshold` bytes.
    MalformedShare,
    /// Fewer shares than the threshold (or fewer than two) were supplied.
    NotEnoughShares,
    /// The linear system has no unique solution (duplicate or colinear shares).
    SingularMatrix,
    /// Matrix or vector dimensions do not match the threshold.
    MalformedSystem,
    /// The entropy source failed.
    RngFailure,
    /// The entropy source does not claim full entropy.
    WeakEntropy,
    /// Text encoding of a share could not be decoded.
    InvalidEncoding,
}

impl fmt::Display for MpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpcError::InvalidThreshold => write!(f, "Threshold must be between 2 and 255"),
            MpcError::InvalidPartCount => {
                write!(f, "Parts must be at least the threshold and at most 255")
            }
            MpcError::EmptySecret => write!(f, "Cannot split an empty secret"),
            MpcError::NoShares => write!(f, "No shares provided"),
            MpcError::EmptyShare { index } => write!(f, "Share {} is empty", index),
            MpcError::ShareLengthMismatch { index } => {
                write!(f, "Share {} differs in length from share 0", index)
            }
            MpcError::ThresholdMismatch { index } => {
                write!(f, "Share {} carries a different threshold than share 0", index)
            }
            MpcError::MalformedShare => write!(f, "Share is malformed"),
            MpcError::NotEnoughShares => write!(f, "Not enough shares to reconstruct"),
            MpcError::SingularMatrix => write!(f, "Matrix is singular"),
            MpcError::MalformedSystem => write!(f, "Linear system dimensions do not match threshold"),
            MpcError::RngFailure => write!(f, "Random number generator failure"),
            MpcError::WeakEntropy => write!(f, "Entropy source does not provide full entropy"),
            MpcError::InvalidEncoding => write!(f, "Invalid share encoding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MpcError {}

/// Trait for Secret Sharing Schemes.
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into `config.parts()` shares with threshold `config.threshold()`.
    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &[u8],
        config: &SharingConfig,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}

/// Blakley's scheme over GF(256), bound to a set of field tables.
#[derive(Clone, Copy)]
pub struct Blakley<'a> {
    field: &'a FieldTables,
}

impl Blakley<'static> {
    /// Scheme using the shared compile-time tables.
    pub fn new() -> Self {
        Self::with_field(FieldTables::global())
    }
}

impl Default for Blakley<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Blakley<'a> {
    /// Scheme using caller-supplied field tables.
    pub fn with_field(field: &'a FieldTables) -> Self {
        Self { field }
    }
}

impl SecretSharingScheme for Blakley<'_> {
    type Share = share::Share;
    type Secret = Vec<u8>;
    type Error = MpcError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &[u8],
        config: &SharingConfig,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error> {
        quorum::split_secret(secret, config, self.field, rng)
    }

    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error> {
        reconstruct::reconstruct_secret(shares, self.field)
    }
}
