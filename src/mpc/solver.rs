//! Gaussian elimination over GF(256).
//!
//! Reconstruction of one secret byte is the solution of a `t x t` linear system whose rows are
//! the parties' hyperplanes. Only the first component of the solution is needed, but the full
//! back substitution runs so that every pivot is checked.

use alloc::{vec, vec::Vec};
use zeroize::Zeroizing;
use crate::core::gf256::{FieldTables, GF256};
use crate::mpc::MpcError;

/// Solves `matrix * x = vector` and returns `x[0]`.
///
/// `matrix` and `vector` are scratch buffers: rows are swapped and eliminated in place.
///
/// # Errors
/// * `MpcError::MalformedSystem` if the matrix is not `threshold x threshold` or the vector is
///   not `threshold` long. Checked before any elimination.
/// * `MpcError::SingularMatrix` if a column has no non-zero pivot.
pub fn solve(
    field: &FieldTables,
    matrix: &mut [Vec<GF256>],
    vector: &mut [GF256],
    threshold: usize,
) -> Result<GF256, MpcError> {
    if threshold == 0
        || matrix.len() != threshold
        || vector.len() != threshold
        || matrix.iter().any(|row| row.len() != threshold)
    {
        return Err(MpcError::MalformedSystem);
    }

    // Forward elimination
    for i in 0..threshold {
        if matrix[i][i].is_zero() {
            if let Some(j) = (i + 1..threshold).find(|&j| !matrix[j][i].is_zero()) {
                matrix.swap(i, j);
                vector.swap(i, j);
            }
        }
        let pivot = matrix[i][i];
        if pivot.is_zero() {
            return Err(MpcError::SingularMatrix);
        }

        let (upper, lower) = matrix.split_at_mut(i + 1);
        let pivot_row = &upper[i];
        for (offset, row) in lower.iter_mut().enumerate() {
            if row[i].is_zero() {
                continue;
            }
            let factor = field.div(row[i], pivot);
            for k in i..threshold {
                row[k] += field.mul(pivot_row[k], factor);
            }
            let rhs = field.mul(vector[i], factor);
            vector[i + 1 + offset] += rhs;
        }
    }

    // Back substitution
    let mut solution = Zeroizing::new(vec![GF256::ZERO; threshold]);
    for i in (0..threshold).rev() {
        let mut acc = vector[i];
        for j in i + 1..threshold {
            acc += field.mul(solution[j], matrix[i][j]);
        }
        solution[i] = field.div(acc, matrix[i][i]);
    }
    Ok(solution[0])
}

/// Picks the first `threshold` linearly independent rows, in input order.
///
/// Each candidate is reduced against the rows already accepted; a candidate that reduces to
/// zero lies in their span and is skipped. Returns `None` when the rows span fewer than
/// `threshold` dimensions.
pub fn independent_rows(
    field: &FieldTables,
    rows: &[Vec<GF256>],
    threshold: usize,
) -> Option<Vec<usize>> {
    let mut basis: Vec<(usize, Zeroizing<Vec<GF256>>)> = Vec::with_capacity(threshold);
    let mut chosen = Vec::with_capacity(threshold);

    for (index, row) in rows.iter().enumerate() {
        if chosen.len() == threshold {
            break;
        }
        if row.len() != threshold {
            continue;
        }

        let mut reduced = Zeroizing::new(row.clone());
        for (pivot_col, basis_row) in &basis {
            let lead = reduced[*pivot_col];
            if lead.is_zero() {
                continue;
            }
            let factor = field.div(lead, basis_row[*pivot_col]);
            for (r, &b) in reduced.iter_mut().zip(basis_row.iter()) {
                *r += field.mul(b, factor);
            }
        }

        if let Some(pivot_col) = reduced.iter().position(|v| !v.is_zero()) {
            basis.push((pivot_col, reduced));
            chosen.push(index);
        }
    }

    (chosen.len() == threshold).then_some(chosen)
}
