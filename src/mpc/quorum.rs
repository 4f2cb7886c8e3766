//! Secret splitting.
//!
//! # Security
//! - **Fail-Closed Entropy**: A source that fails, or does not claim full entropy, aborts the
//!   split before any share is returned.
//! - **Zeroization**: Hyperplane points and party vectors are wiped once the shares are encoded.
//! - **Validation**: Parameters are checked through [`SharingConfig`] before any randomness is
//!   drawn.

use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::config::SharingConfig;
use crate::core::gf256::{FieldTables, GF256};
use crate::entropy::{EntropySource, FULL_ENTROPY};
use crate::mpc::codec::{self, PartyVectors};
use crate::mpc::hyperplane::{evaluate, generate_point};
use crate::mpc::{share::Share, MpcError};

/// Splits a secret into `config.parts()` shares, any `config.threshold()` of which recover it.
///
/// Randomness is drawn in a fixed order: one hyperplane point per secret byte, then one
/// direction vector per (party, byte), party-major.
///
/// # Returns
/// * `Ok(Vec<Share>)` with `parts` shares of `secret.len() * threshold + 1` bytes each.
/// * `Err(MpcError)` on an empty secret or an entropy problem; no shares are returned then.
pub fn split_secret<R: EntropySource + ?Sized>(
    secret: &[u8],
    config: &SharingConfig,
    field: &FieldTables,
    rng: &mut R,
) -> Result<Vec<Share>, MpcError> {
    if secret.is_empty() {
        return Err(MpcError::EmptySecret);
    }
    let estimate = rng.entropy_estimate();
    if estimate.is_nan() || estimate < FULL_ENTROPY {
        log::error!("refusing entropy source {} ({} bits/byte)", rng.name(), estimate);
        return Err(MpcError::WeakEntropy);
    }

    let threshold = config.threshold();
    let parts = config.parts();
    log::debug!(
        "splitting {} byte secret into {} shares of {} bytes, threshold {}",
        secret.len(),
        parts,
        config.share_len(secret.len()),
        threshold
    );

    // (s, x_1, ..., x_{t-1}) for each secret byte
    let mut points: Zeroizing<Vec<Vec<GF256>>> =
        Zeroizing::new(Vec::with_capacity(secret.len()));
    for &byte in secret {
        points.push(generate_point(true, GF256(byte), threshold, rng)?);
    }

    let mut parties: Zeroizing<Vec<PartyVectors>> = Zeroizing::new(Vec::with_capacity(parts));
    for _ in 0..parts {
        let mut vectors = Vec::with_capacity(secret.len());
        for _ in 0..secret.len() {
            vectors.push(generate_point(false, GF256::ZERO, threshold, rng)?);
        }
        parties.push(vectors);
    }

    for vectors in parties.iter_mut() {
        for (vector, point) in vectors.iter_mut().zip(points.iter()) {
            vector[threshold - 1] = evaluate(field, vector, point, threshold);
        }
    }

    Ok(codec::compress(&parties)
        .into_iter()
        .map(Share::from_encoded)
        .collect())
}
