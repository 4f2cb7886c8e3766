//! GF(2^8) arithmetic module.
//!
//! Finite field arithmetic over GF(2^8) with the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). Addition is XOR. Multiplication and division go through
//! log/exp/inverse lookup tables held in a [`FieldTables`] value.
//!
//! # Design Choices
//! - **Explicit Context**: The tables live in a `FieldTables` value that callers pass by
//!   reference. A single instance, [`TABLES`], is built at compile time and is never mutated,
//!   so concurrent readers need no synchronization.
//! - **Reference Multiplier**: The bit-serial multiplication (`GF256::mul_slow`) generates the
//!   tables and cross-checks them in tests.
//! - **Faults vs Errors**: Division by zero is a broken internal invariant and panics. Nothing
//!   reachable from caller input divides by zero.
//!
//! # Usage
//! ```
//! use blakley::core::gf256::{GF256, TABLES};
//!
//! let a = GF256(0x53);
//! let b = GF256(0xCA);
//! assert_eq!(a + b, GF256(0x99));
//! assert_eq!(TABLES.mul(a, b), GF256(0x01));
//! assert_eq!(TABLES.div(GF256(0x01), b), a);
//! ```

use core::ops::{Add, AddAssign};
use zeroize::Zeroize;

/// Full irreducible polynomial (x^8 + x^4 + x^3 + x + 1).
const POLY_FULL: u16 = 0x11B;

/// Generator of the multiplicative group used for the log/exp tables.
pub const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group; exp indices are reduced modulo this.
pub const GROUP_ORDER: usize = 255;

/// The finite field element type, wrapping a u8.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
#[repr(transparent)]
pub struct GF256(pub u8);

impl GF256 {
    pub const ZERO: GF256 = GF256(0);
    pub const ONE: GF256 = GF256(1);

    /// Bit-serial multiplication with reduction modulo 0x11B.
    ///
    /// Fixed 8 iterations with mask-based conditionals, no data-dependent branches. This is the
    /// reference implementation; hot paths use [`FieldTables::mul`].
    pub const fn mul_slow(self, rhs: Self) -> Self {
        let mut result: u8 = 0;
        let mut aa: u16 = self.0 as u16;
        let mut bb: u8 = rhs.0;
        let mut i = 0;

        while i < 8 {
            // Conditional add: if (bb & 1) result ^= aa (low byte)
            let lsb = bb & 1;
            let add_mask = lsb.wrapping_mul(!0u8) as u16;
            result ^= (aa & add_mask) as u8;

            // Shift aa left and reduce mod poly if carry
            let carry = ((aa >> 7) & 1) as u8;
            let carry_mask = carry.wrapping_mul(!0u8) as u16;
            aa = ((aa << 1) & 0xFF) ^ (POLY_FULL & carry_mask & 0xFF);

            bb >>= 1;
            i += 1;
        }

        GF256(result)
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for GF256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(gf: GF256) -> u8 {
        gf.0
    }
}

/// GF(2^8) addition: XOR, as the field characteristic is 2. Subtraction is the same operation.
impl Add for GF256 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Precomputed log/exp/inverse tables for GF(2^8).
///
/// `exp` covers one full multiplicative cycle (255 entries) and is indexed modulo 255.
/// `log[0]` and `inv[0]` are unused placeholders.
pub struct FieldTables {
    log: [u8; 256],
    exp: [u8; GROUP_ORDER],
    inv: [u8; 256],
}

/// The process-wide table instance, computed during compilation.
pub static TABLES: FieldTables = FieldTables::build();

impl FieldTables {
    /// Builds the tables by walking powers of [`GENERATOR`].
    pub const fn build() -> Self {
        let mut log = [0u8; 256];
        let mut exp = [0u8; GROUP_ORDER];
        let mut inv = [0u8; 256];

        let mut x = GF256::ONE;
        let mut power = 0;
        while power < GROUP_ORDER {
            exp[power] = x.0;
            log[x.0 as usize] = power as u8;
            x = x.mul_slow(GF256(GENERATOR));
            power += 1;
        }

        // a^-1 = g^(255 - log a)
        let mut a = 1;
        while a < 256 {
            let l = log[a] as usize;
            inv[a] = exp[(GROUP_ORDER - l) % GROUP_ORDER];
            a += 1;
        }

        Self { log, exp, inv }
    }

    /// Returns the shared table instance.
    #[inline(always)]
    pub fn global() -> &'static FieldTables {
        &TABLES
    }

    /// Multiplies two field elements.
    ///
    /// Returns zero when either operand is zero, otherwise
    /// `exp[(log a + log b) mod 255]`.
    #[inline]
    pub fn mul(&self, a: GF256, b: GF256) -> GF256 {
        if a.is_zero() || b.is_zero() {
            return GF256::ZERO;
        }
        let sum = self.log[a.0 as usize] as usize + self.log[b.0 as usize] as usize;
        GF256(self.exp[sum % GROUP_ORDER])
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    /// Panics if `a` is zero.
    #[inline]
    pub fn inv(&self, a: GF256) -> GF256 {
        if a.is_zero() {
            panic!("gf256: zero has no inverse");
        }
        GF256(self.inv[a.0 as usize])
    }

    /// Divides `a` by `b`.
    ///
    /// # Panics
    /// Panics if `b` is zero. Callers check pivots before dividing, so reaching this is a bug.
    #[inline]
    pub fn div(&self, a: GF256, b: GF256) -> GF256 {
        if b.is_zero() {
            panic!("gf256: divide by zero");
        }
        self.mul(a, GF256(self.inv[b.0 as usize]))
    }

    /// Discrete logarithm base [`GENERATOR`], `None` for zero.
    pub fn log(&self, a: GF256) -> Option<u8> {
        if a.is_zero() {
            None
        } else {
            Some(self.log[a.0 as usize])
        }
    }

    /// [`GENERATOR`] raised to `power`, reduced modulo the group order.
    pub fn exp(&self, power: usize) -> GF256 {
        GF256(self.exp[power % GROUP_ORDER])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(GF256(0x01) + GF256(0x01), GF256(0x00));
        assert_eq!(GF256(0x80) + GF256(0x7F), GF256(0xFF));
        assert_eq!(GF256(0x53) + GF256(0xCA), GF256(0x99));
    }

    #[test]
    fn test_mul() {
        let t = FieldTables::global();
        // AES test vectors
        assert_eq!(t.mul(GF256(0x02), GF256(0x03)), GF256(0x06));
        assert_eq!(t.mul(GF256(0x02), GF256(0x1B)), GF256(0x36));
        assert_eq!(t.mul(GF256(0x57), GF256(0x83)), GF256(0xC1));
        assert_eq!(t.mul(GF256(0x53), GF256(0xCA)), GF256(0x01));
        assert_eq!(t.mul(GF256(3), GF256(7)), GF256(9));
        assert_eq!(t.mul(GF256(3), GF256(3)), GF256(5));
        // Zero cases
        assert_eq!(t.mul(GF256(0x00), GF256(0xFF)), GF256(0x00));
        assert_eq!(t.mul(GF256(0xFF), GF256(0x00)), GF256(0x00));
        assert_eq!(t.mul(GF256(0), GF256(4)), GF256(0));
    }

    #[test]
    fn test_tables_match_bit_serial() {
        let t = FieldTables::global();
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(
                    t.mul(GF256(a), GF256(b)),
                    GF256(a).mul_slow(GF256(b)),
                    "mul({:02x}, {:02x})",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_exp_log_cycle() {
        let t = FieldTables::global();
        assert_eq!(t.exp(0), GF256::ONE);
        assert_eq!(t.exp(1), GF256(GENERATOR));
        assert_eq!(t.exp(255), GF256::ONE);
        assert_eq!(t.log(GF256::ZERO), None);
        for a in 1..=255u8 {
            let l = t.log(GF256(a)).unwrap();
            assert_eq!(t.exp(l as usize), GF256(a));
        }
    }

    #[test]
    fn test_inv() {
        let t = FieldTables::global();
        assert_eq!(t.inv(GF256(0x02)), GF256(0x8D));
        assert_eq!(t.inv(GF256(0x01)), GF256(0x01));
        assert_eq!(t.inv(GF256(0x03)), GF256(0xF6));
        assert_eq!(t.inv(GF256(0x05)), GF256(0x52));
    }

    // Exhaustive: a * a^-1 = 1 for all a != 0
    #[test]
    fn test_inv_exhaustive() {
        let t = FieldTables::global();
        for a in 1..=255u8 {
            let inv_a = t.inv(GF256(a));
            assert_eq!(t.mul(GF256(a), inv_a), GF256::ONE, "inv({:02x}) = {:02x}", a, inv_a.0);
        }
    }

    #[test]
    fn test_div() {
        let t = FieldTables::global();
        assert_eq!(t.div(GF256(9), GF256(7)), GF256(3));
        assert_eq!(t.div(GF256(9), GF256(3)), GF256(7));
        assert_eq!(t.div(GF256(0), GF256(3)), GF256(0));
        assert_eq!(t.div(GF256(2), GF256(2)), GF256(1));
        assert_eq!(t.div(GF256(0x03), GF256(0x02)), GF256(0x8C));
    }

    #[test]
    fn test_div_inverts_mul() {
        let t = FieldTables::global();
        for a in 0..=255u8 {
            for b in 1..=255u8 {
                let prod = t.mul(GF256(a), GF256(b));
                assert_eq!(t.div(prod, GF256(b)), GF256(a));
            }
        }
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_div_by_zero_panics() {
        FieldTables::global().div(GF256(7), GF256(0));
    }

    #[test]
    #[should_panic(expected = "no inverse")]
    fn test_inv_zero_panics() {
        FieldTables::global().inv(GF256(0));
    }
}
