//! # blakley
//!
//! Threshold secret sharing with Blakley's hyperplane scheme over GF(2^8).
//!
//! A secret of `B` bytes is split into `N` shares of `B * T + 1` bytes each. Any `T` shares
//! reconstruct the secret; fewer reveal nothing about it.
//!
//! ```
//! let shares = blakley::split(b"correct horse", 5, 3).unwrap();
//! assert_eq!(shares.len(), 5);
//! assert_eq!(shares[0].len(), 13 * 3 + 1);
//!
//! match blakley::combine(&shares[1..4]) {
//!     Ok(secret) => assert_eq!(secret, b"correct horse"),
//!     // Independently drawn hyperplanes are dependent with probability ~1/256 per byte
//!     Err(e) => assert_eq!(e, blakley::MpcError::SingularMatrix),
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: GF(2^8) arithmetic tables.
//! - `entropy`: randomness sources used during splitting.
//! - `mpc`: point generation, evaluation, solving, share codec, split and reconstruct.
//! - `config`: validated sharing parameters.
//!
//! Shares are not authenticated. A tampered share produces a wrong secret, not an error.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod core;
pub mod entropy;
pub mod mpc;

use alloc::vec::Vec;

pub use crate::config::SharingConfig;
pub use crate::core::gf256::{FieldTables, GF256};
pub use crate::entropy::{CustomSource, EntropyError, EntropySource, RngSource};
pub use crate::mpc::share::Share;
pub use crate::mpc::{Blakley, MpcError, SecretSharingScheme};

/// Splits `secret` into `parts` shares, any `threshold` of which reconstruct it.
///
/// Randomness comes from the operating system CSPRNG.
///
/// # Errors
/// * `MpcError::InvalidThreshold` unless `2 <= threshold <= 255`.
/// * `MpcError::InvalidPartCount` unless `threshold <= parts <= 255`.
/// * `MpcError::EmptySecret` for an empty secret.
/// * `MpcError::RngFailure` if the CSPRNG cannot be read.
pub fn split(secret: &[u8], parts: usize, threshold: usize) -> Result<Vec<Share>, MpcError> {
    let config = SharingConfig::new(parts, threshold)?;
    mpc::quorum::split_secret(secret, &config, FieldTables::global(), &mut RngSource::os())
}

/// Reconstructs a secret from shares produced by one [`split`] call.
///
/// Accepts raw byte strings or [`Share`] values. At least the embedded threshold of shares
/// must be supplied.
pub fn combine<S: AsRef<[u8]>>(shares: &[S]) -> Result<Vec<u8>, MpcError> {
    mpc::reconstruct::reconstruct_secret(shares, FieldTables::global())
}
