//! Share wire format.
//!
//! ```text
//! share = v_0 || v_1 || ... || v_{B-1} || T
//! ```
//!
//! where each `v_i` is the party's `T`-byte coordinate vector for secret byte `i` and the final
//! byte is the threshold tag. There is no version byte.

use alloc::vec::Vec;
use crate::config::MIN_THRESHOLD;
use crate::core::gf256::GF256;
use crate::mpc::MpcError;

/// One party's coordinate vectors, one per secret byte.
pub type PartyVectors = Vec<Vec<GF256>>;

/// Flattens each party's vectors into a share and appends the threshold tag.
///
/// The threshold is the length of the first vector.
///
/// # Panics
/// Panics if the vectors are not all the same length or that length exceeds 255.
pub fn compress(parties: &[PartyVectors]) -> Vec<Vec<u8>> {
    let threshold = parties
        .first()
        .and_then(|p| p.first())
        .map_or(0, Vec::len);
    assert!(threshold <= u8::MAX as usize, "compress: threshold exceeds tag byte");
    let tag = threshold as u8;

    parties
        .iter()
        .map(|vectors| {
            let mut share = Vec::with_capacity(vectors.len() * threshold + 1);
            for v in vectors {
                assert_eq!(v.len(), threshold, "compress: ragged coordinate vectors");
                share.extend(v.iter().map(|&c| c.0));
            }
            share.push(tag);
            share
        })
        .collect()
}

/// Splits flat shares back into per-party, per-byte coordinate vectors.
///
/// # Errors
/// * `MpcError::NoShares` for an empty list, `MpcError::EmptyShare` for a zero-length share.
/// * `MpcError::ShareLengthMismatch` / `MpcError::ThresholdMismatch` if a share disagrees with
///   the first one.
/// * `MpcError::NotEnoughShares` if the tag is below 2 or exceeds the number of shares.
/// * `MpcError::MalformedShare` if the body is empty or not a multiple of the threshold.
pub fn decompress<S: AsRef<[u8]>>(shares: &[S]) -> Result<Vec<PartyVectors>, MpcError> {
    let first = shares.first().ok_or(MpcError::NoShares)?.as_ref();
    if first.is_empty() {
        return Err(MpcError::EmptyShare { index: 0 });
    }
    let body_len = first.len() - 1;
    let tag = first[body_len];

    for (index, share) in shares.iter().enumerate().skip(1) {
        let share = share.as_ref();
        if share.is_empty() {
            return Err(MpcError::EmptyShare { index });
        }
        if share.len() != first.len() {
            return Err(MpcError::ShareLengthMismatch { index });
        }
        if share[body_len] != tag {
            return Err(MpcError::ThresholdMismatch { index });
        }
    }

    let threshold = tag as usize;
    if threshold < MIN_THRESHOLD || shares.len() < threshold {
        return Err(MpcError::NotEnoughShares);
    }
    if body_len == 0 || body_len % threshold != 0 {
        return Err(MpcError::MalformedShare);
    }

    Ok(shares
        .iter()
        .map(|share| {
            share.as_ref()[..body_len]
                .chunks_exact(threshold)
                .map(|chunk| chunk.iter().map(|&b| GF256(b)).collect())
                .collect()
        })
        .collect())
}
