//! Secret reconstruction from shares.
//!
//! For each secret byte the first `t` shares give a `t x t` system. Row `i` is party `i`'s
//! coordinate vector with its evaluated last entry moved to the right-hand side and replaced by
//! the constant `0xFF`. The system's unique solution starts with the secret byte: the dealer's
//! point solves it up to a rescaling of the last coordinate, which leaves `x_0` untouched.
//!
//! When more than `t` shares are supplied and a byte's first-`t` system is singular, the rows
//! for that byte are re-selected among all shares.
//!
//! # Security
//! - **Validation**: Lengths and threshold tags are checked before any arithmetic.
//! - **Zeroization**: Decoded vectors and working matrices are wiped after use.

use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::config::MIN_THRESHOLD;
use crate::core::gf256::{FieldTables, GF256};
use crate::mpc::codec::{self, PartyVectors};
use crate::mpc::solver;
use crate::mpc::MpcError;

/// Value substituted for the evaluated coordinate in every matrix row.
pub const SENTINEL: GF256 = GF256(0xFF);

/// Reconstructs the secret from a list of shares.
///
/// # Arguments
/// * `shares` - Encoded shares, all from the same split.
///
/// # Returns
/// * `Ok(Vec<u8>)` - The reconstructed secret.
/// * `Err(MpcError)` - If inputs are invalid or the shares do not determine the secret.
pub fn reconstruct_secret<S: AsRef<[u8]>>(
    shares: &[S],
    field: &FieldTables,
) -> Result<Vec<u8>, MpcError> {
    let parties = Zeroizing::new(codec::decompress(shares)?);

    // decompress guarantees at least one vector per party
    let threshold = parties[0][0].len();
    let secret_len = parties[0].len();
    if parties.len() < threshold || parties.len() < MIN_THRESHOLD {
        return Err(MpcError::NotEnoughShares);
    }
    log::debug!(
        "reconstructing {} byte secret from {} shares, threshold {}",
        secret_len,
        parties.len(),
        threshold
    );

    let mut secret = Zeroizing::new(Vec::with_capacity(secret_len));
    for idx in 0..secret_len {
        let byte = match solve_byte(field, &parties[..threshold], idx, threshold) {
            Ok(byte) => byte,
            Err(MpcError::SingularMatrix) if parties.len() > threshold => {
                log::warn!(
                    "byte {}: first {} shares are dependent, selecting from {} shares",
                    idx,
                    threshold,
                    parties.len()
                );
                solve_byte_with_surplus(field, &parties, idx, threshold)?
            }
            Err(e) => return Err(e),
        };
        secret.push(byte.0);
    }

    Ok(core::mem::take(&mut *secret))
}

/// Builds matrix row and right-hand side for one party vector.
fn system_row(vector: &[GF256], threshold: usize) -> (Vec<GF256>, GF256) {
    let mut row = vector.to_vec();
    let rhs = row[threshold - 1];
    row[threshold - 1] = SENTINEL;
    (row, rhs)
}

fn solve_byte(
    field: &FieldTables,
    parties: &[PartyVectors],
    idx: usize,
    threshold: usize,
) -> Result<GF256, MpcError> {
    let mut matrix = Zeroizing::new(Vec::with_capacity(threshold));
    let mut rhs = Zeroizing::new(Vec::with_capacity(threshold));
    for vectors in parties {
        let (row, value) = system_row(&vectors[idx], threshold);
        matrix.push(row);
        rhs.push(value);
    }
    solver::solve(field, matrix.as_mut_slice(), rhs.as_mut_slice(), threshold)
}

fn solve_byte_with_surplus(
    field: &FieldTables,
    parties: &[PartyVectors],
    idx: usize,
    threshold: usize,
) -> Result<GF256, MpcError> {
    let rows: Zeroizing<Vec<Vec<GF256>>> = Zeroizing::new(
        parties
            .iter()
            .map(|vectors| system_row(&vectors[idx], threshold).0)
            .collect(),
    );
    let chosen =
        solver::independent_rows(field, &rows, threshold).ok_or(MpcError::SingularMatrix)?;

    let selected: Vec<PartyVectors> = chosen
        .iter()
        .map(|&i| Vec::from([parties[i][idx].clone()]))
        .collect();
    let selected = Zeroizing::new(selected);
    solve_byte(field, &selected, 0, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SharingConfig;
    use crate::entropy::testing::SplitMixEntropy;
    use crate::entropy::RngSource;
    use crate::mpc::quorum::split_secret;
    use crate::mpc::share::Share;
    use alloc::vec;

    fn split_with_seed(secret: &[u8], parts: usize, threshold: usize, seed: u64) -> Vec<Share> {
        let config = SharingConfig::new(parts, threshold).unwrap();
        let mut rng = SplitMixEntropy::new(seed);
        split_secret(secret, &config, FieldTables::global(), &mut rng).unwrap()
    }

    fn pick(shares: &[Share], indices: &[usize]) -> Vec<Share> {
        indices.iter().map(|&i| shares[i].clone()).collect()
    }

    #[test]
    fn test_reconstruct_any_threshold_subset() {
        let secret = [116u8, 101, 115, 116];
        let shares = split_with_seed(&secret, 5, 4, 2);
        let field = FieldTables::global();

        for skip in 0..5 {
            let subset: Vec<Share> = (0..5).filter(|&i| i != skip).map(|i| shares[i].clone()).collect();
            assert_eq!(reconstruct_secret(&subset, field).unwrap(), secret, "without share {}", skip);
        }
        assert_eq!(reconstruct_secret(&shares, field).unwrap(), secret);
    }

    #[test]
    fn test_reconstruct_three_of_five() {
        let secret = b"Hello, Blakley!";
        let shares = split_with_seed(secret, 5, 3, 6);
        let field = FieldTables::global();

        for a in 0..5 {
            for b in a + 1..5 {
                for c in b + 1..5 {
                    let subset = pick(&shares, &[a, b, c]);
                    assert_eq!(reconstruct_secret(&subset, field).unwrap(), secret.to_vec());
                }
            }
        }
    }

    #[test]
    fn test_reconstruct_long_secret() {
        let secret = b"VGhpcyBpcyBhIHNpbXBsZSB0ZXN0IQpBbmQgSSB3YW50IHRvIGRyaW5rIGEgY3VwIGmIHBvcDop";
        let shares = split_with_seed(secret, 8, 5, 2);
        let field = FieldTables::global();

        assert_eq!(reconstruct_secret(&shares[..5], field).unwrap(), secret.to_vec());
        assert_eq!(reconstruct_secret(&shares[3..], field).unwrap(), secret.to_vec());
        assert_eq!(reconstruct_secret(&shares, field).unwrap(), secret.to_vec());
    }

    #[test]
    fn test_reconstruct_order_independent() {
        let secret = b"what the heck is my undergraduate program";
        let shares = split_with_seed(secret, 5, 4, 2);
        let subset = pick(&shares, &[4, 0, 2, 1]);
        assert_eq!(reconstruct_secret(&subset, FieldTables::global()).unwrap(), secret.to_vec());
    }

    #[test]
    fn test_reconstruct_large_secret() {
        let secret: Vec<u8> = (0..256usize).map(|i| (i * 7 + 3) as u8).collect();
        let shares = split_with_seed(&secret, 4, 2, 2);
        let field = FieldTables::global();

        assert_eq!(reconstruct_secret(&pick(&shares, &[1, 3]), field).unwrap(), secret);
        assert_eq!(reconstruct_secret(&pick(&shares, &[3, 1]), field).unwrap(), secret);
    }

    #[test]
    fn test_reconstruct_max_threshold() {
        let shares = split_with_seed(&[0x2A], 255, 255, 2);
        assert_eq!(shares[0].len(), 256);
        assert_eq!(reconstruct_secret(&shares, FieldTables::global()).unwrap(), vec![0x2A]);
    }

    #[test]
    fn test_surplus_share_replaces_duplicate() {
        let secret = [0x2A, 0x07];
        let shares = split_with_seed(&secret, 3, 2, 2);
        let field = FieldTables::global();

        // Two copies of share 0 are dependent for every byte
        assert_eq!(
            reconstruct_secret(&pick(&shares, &[0, 0]), field),
            Err(MpcError::SingularMatrix)
        );
        assert_eq!(
            reconstruct_secret(&pick(&shares, &[0, 0, 1]), field).unwrap(),
            secret
        );
        assert_eq!(
            reconstruct_secret(&pick(&shares, &[2, 2, 2, 0]), field).unwrap(),
            secret
        );
        assert_eq!(
            reconstruct_secret(&pick(&shares, &[1, 1, 1]), field),
            Err(MpcError::SingularMatrix)
        );
    }

    #[test]
    fn test_reconstruct_errors() {
        let field = FieldTables::global();
        let none: [Vec<u8>; 0] = [];
        assert_eq!(reconstruct_secret(&none, field), Err(MpcError::NoShares));

        // Length mismatch
        assert_eq!(
            reconstruct_secret(&[vec![102u8, 111, 111], vec![98, 97]], field),
            Err(MpcError::ShareLengthMismatch { index: 1 })
        );

        // Too short: the tag bytes 'f' and 'b' also disagree
        assert!(reconstruct_secret(&[b"f", b"b"], field).is_err());
        assert_eq!(
            reconstruct_secret(&[vec![2u8], vec![2u8]], field),
            Err(MpcError::MalformedShare)
        );

        // Tag 'o' = 111 cannot be met by two shares
        assert_eq!(reconstruct_secret(&[b"foo", b"foo"], field), Err(MpcError::NotEnoughShares));
    }

    #[test]
    fn test_fewer_than_threshold_fails() {
        let secret = b"fewer than threshold";
        let shares = split_with_seed(secret, 5, 4, 2);
        let field = FieldTables::global();

        assert_eq!(reconstruct_secret(&shares[..3], field), Err(MpcError::NotEnoughShares));
        assert_eq!(reconstruct_secret(&shares[..1], field), Err(MpcError::NotEnoughShares));
    }

    #[test]
    fn test_os_entropy_never_yields_wrong_secret() {
        // With real randomness a t x t system is singular with probability about 1/256 per byte.
        // That must surface as an error, never as a different secret.
        let secret = b"correct horse battery staple";
        let config = SharingConfig::new(6, 3).unwrap();
        let field = FieldTables::global();

        for _ in 0..8 {
            let shares = split_secret(secret, &config, field, &mut RngSource::os()).unwrap();
            match reconstruct_secret(&shares[1..4], field) {
                Ok(recovered) => assert_eq!(recovered, secret.to_vec()),
                Err(e) => assert_eq!(e, MpcError::SingularMatrix),
            }
            // With all six shares the fallback almost always finds three independent rows
            match reconstruct_secret(&shares, field) {
                Ok(recovered) => assert_eq!(recovered, secret.to_vec()),
                Err(e) => assert_eq!(e, MpcError::SingularMatrix),
            }
        }
    }
}
