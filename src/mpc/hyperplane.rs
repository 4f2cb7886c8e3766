//! Hyperplane point generation and share evaluation.
//!
//! For one secret byte the dealer draws a point `x = (x_0, ..., x_{t-1})` with `x_0` pinned to
//! the byte. Each party draws a direction vector `a` and keeps
//! `c = x_{t-1} + sum_{j < t-1} a_j * x_j`, which places its hyperplane through `x`.

use alloc::{vec, vec::Vec};
use zeroize::Zeroizing;
use crate::core::gf256::{FieldTables, GF256};
use crate::entropy::EntropySource;
use crate::mpc::MpcError;

/// Draws `degree` uniformly random field elements.
///
/// If `fix_first` is set, position 0 is overwritten with `first_value`. The dealer uses this
/// to pin the secret byte; party direction vectors leave it unset.
///
/// # Errors
/// * `MpcError::RngFailure` if the entropy source fails.
///
/// # Panics
/// Panics if `fix_first` is set and `degree` is zero.
pub fn generate_point<R: EntropySource + ?Sized>(
    fix_first: bool,
    first_value: GF256,
    degree: usize,
    rng: &mut R,
) -> Result<Vec<GF256>, MpcError> {
    assert!(!fix_first || degree > 0, "generate_point: cannot pin a zero-length point");

    let mut raw = Zeroizing::new(vec![0u8; degree]);
    if let Err(e) = rng.fill(&mut raw) {
        log::error!("entropy source {} failed: {}", rng.name(), e);
        return Err(MpcError::RngFailure);
    }

    let mut point: Vec<GF256> = raw.iter().map(|&b| GF256(b)).collect();
    if fix_first {
        point[0] = first_value;
    }
    Ok(point)
}

/// Computes the last coordinate of a party vector against a hyperplane point.
///
/// `result = point[t-1] + sum_{j=0}^{t-2} party[j] * point[j]`. The value already stored in
/// `party[t-1]` is ignored.
///
/// # Panics
/// Panics if either slice is not exactly `threshold` long.
pub fn evaluate(field: &FieldTables, party: &[GF256], point: &[GF256], threshold: usize) -> GF256 {
    assert!(
        party.len() == threshold && point.len() == threshold && threshold > 0,
        "evaluate: vectors must have threshold length"
    );

    let mut result = point[threshold - 1];
    for (&a, &x) in party[..threshold - 1].iter().zip(&point[..threshold - 1]) {
        result += field.mul(a, x);
    }
    result
}
