//! Scalar Multiplication
//!
//! Four variants of [k]·G for a 256-bit scalar and an affine base point,
//! all returning an affine result and all running a fixed 256 iterations.
//! None of them is constant time: the sequence of group operations inside
//! the fixed iteration count still follows the scalar's bits, so every
//! variant leaks the Hamming weight (and the table variants add a
//! data-dependent lookup). Do not use these on secret scalars without an
//! explicit side-channel review.

use std::sync::OnceLock;

use crate::bigint::U256;

use super::point::{AffinePoint, JacobianPoint};

/// Left-to-right double-and-add
///
/// Scans the scalar from the most significant bit; each step doubles the
/// Jacobian accumulator and, on a set bit, adds the affine base into it.
/// Up to 256 doublings and up to 256 mixed additions.
pub fn scalar_mul_ltr(base: &AffinePoint, scalar: &U256) -> AffinePoint {
    let mut acc = JacobianPoint::infinity();

    for i in (0..256).rev() {
        acc = acc.double();
        if scalar.bit(i) {
            acc = acc.add_affine(base);
        }
    }

    acc.to_affine()
}

/// Right-to-left double-and-add
///
/// Scans the scalar from the least significant bit, keeping a running
/// affine multiple of the base that is doubled every step (one field
/// inversion per bit); set bits add the running value into the Jacobian
/// accumulator. Strictly more expensive than the left-to-right form.
pub fn scalar_mul_rtl(base: &AffinePoint, scalar: &U256) -> AffinePoint {
    let mut acc = JacobianPoint::infinity();
    let mut running = *base;

    for i in 0..256 {
        if scalar.bit(i) {
            acc = acc.add_affine(&running);
        }
        running = running.double();
    }

    acc.to_affine()
}

/// Precomputed table for the 8-bit-window left-to-right method
///
/// Entry b holds [b]·base in affine coordinates, entry 0 the identity. One
/// byte-indexed table serves all 32 byte positions of the scalar: the 8
/// doublings between window additions scale the accumulator by 256, so the
/// walk is Horner evaluation in base 256 and every window only ever needs
/// the plain multiples [0..=255]·base.
pub struct WindowTable {
    /// [b]·base for b = 0..=255
    points: [AffinePoint; 256],
}

impl WindowTable {
    /// Build the table for a base point with 255 affine additions
    pub fn new(base: &AffinePoint) -> Self {
        let mut points = [AffinePoint::infinity(); 256];
        for b in 1..256 {
            points[b] = points[b - 1].add(base);
        }
        WindowTable { points }
    }

    /// Table entry [b]·base
    pub fn entry(&self, b: u8) -> &AffinePoint {
        &self.points[b as usize]
    }
}

/// Left-to-right scalar multiplication with an 8-bit window
///
/// Processes the scalar one byte at a time, most significant first: 8
/// doublings, then a single mixed addition of the table entry selected by
/// the byte. Exactly 32 additions instead of up to 256; the lookup index
/// is scalar-dependent (timing/cache side channel).
pub fn scalar_mul_ltr_window(table: &WindowTable, scalar: &U256) -> AffinePoint {
    let mut acc = JacobianPoint::infinity();

    for byte in scalar.to_bytes_be() {
        for _ in 0..8 {
            acc = acc.double();
        }
        // entry 0 is the identity, so a zero byte adds nothing
        acc = acc.add_affine(table.entry(byte));
    }

    acc.to_affine()
}

/// Precomputed table of per-bit multiples for the right-to-left method
///
/// Entry i holds [2^i]·base in affine coordinates, built by 255 affine
/// doublings.
pub struct BitTable {
    /// [2^i]·base for i = 0..=255
    points: [AffinePoint; 256],
}

impl BitTable {
    /// Build the table for a base point
    pub fn new(base: &AffinePoint) -> Self {
        let mut points = [*base; 256];
        for i in 1..256 {
            points[i] = points[i - 1].double();
        }
        BitTable { points }
    }

    /// Table entry [2^i]·base
    pub fn entry(&self, i: usize) -> &AffinePoint {
        &self.points[i]
    }
}

/// Right-to-left scalar multiplication with per-bit precomputation
///
/// One mixed addition per set scalar bit, no runtime doublings; the
/// addition count equals the scalar's Hamming weight.
pub fn scalar_mul_rtl_precomp(table: &BitTable, scalar: &U256) -> AffinePoint {
    let mut acc = JacobianPoint::infinity();

    for i in 0..256 {
        if scalar.bit(i) {
            acc = acc.add_affine(table.entry(i));
        }
    }

    acc.to_affine()
}

static WINDOW_TABLE: OnceLock<WindowTable> = OnceLock::new();
static BIT_TABLE: OnceLock<BitTable> = OnceLock::new();

/// Process-wide window table for the generator, built on first use
pub fn window_table() -> &'static WindowTable {
    WINDOW_TABLE.get_or_init(|| WindowTable::new(&AffinePoint::generator()))
}

/// Process-wide per-bit table for the generator, built on first use
pub fn bit_table() -> &'static BitTable {
    BIT_TABLE.get_or_init(|| BitTable::new(&AffinePoint::generator()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::p256::params;

    #[test]
    fn test_scalar_zero() {
        let g = AffinePoint::generator();
        assert!(scalar_mul_ltr(&g, &U256::zero()).is_infinity());
        assert!(scalar_mul_rtl(&g, &U256::zero()).is_infinity());
        assert!(scalar_mul_ltr_window(window_table(), &U256::zero()).is_infinity());
        assert!(scalar_mul_rtl_precomp(bit_table(), &U256::zero()).is_infinity());
    }

    #[test]
    fn test_scalar_one() {
        let g = AffinePoint::generator();
        assert_eq!(scalar_mul_ltr(&g, &U256::one()), g);
        assert_eq!(scalar_mul_rtl(&g, &U256::one()), g);
        assert_eq!(scalar_mul_ltr_window(window_table(), &U256::one()), g);
        assert_eq!(scalar_mul_rtl_precomp(bit_table(), &U256::one()), g);
    }

    #[test]
    fn test_scalar_two_is_double() {
        let g = AffinePoint::generator();
        let expected = g.double();
        let k = U256::from_u64(2);
        assert_eq!(scalar_mul_ltr(&g, &k), expected);
        assert_eq!(scalar_mul_rtl(&g, &k), expected);
        assert_eq!(scalar_mul_ltr_window(window_table(), &k), expected);
        assert_eq!(scalar_mul_rtl_precomp(bit_table(), &k), expected);
    }

    #[test]
    fn test_order_times_g_is_identity() {
        let g = AffinePoint::generator();
        let n = params::n();
        assert!(scalar_mul_ltr(&g, &n).is_infinity());
        assert!(scalar_mul_rtl_precomp(bit_table(), &n).is_infinity());
    }

    #[test]
    fn test_window_table_entries() {
        let table = window_table();
        let g = AffinePoint::generator();
        assert!(table.entry(0).is_infinity());
        assert_eq!(*table.entry(1), g);
        assert_eq!(*table.entry(2), g.double());
        assert_eq!(*table.entry(3), g.double().add(&g));
    }

    #[test]
    fn test_bit_table_entries() {
        let table = bit_table();
        let g = AffinePoint::generator();
        assert_eq!(*table.entry(0), g);
        assert_eq!(*table.entry(1), g.double());
        assert_eq!(*table.entry(2), g.double().double());
    }

    #[test]
    fn test_variants_agree_small() {
        let g = AffinePoint::generator();
        for value in [3u64, 255, 256, 257, 0xFFFF_FFFF, 0x0123_4567_89AB_CDEF] {
            let k = U256::from_u64(value);
            let ltr = scalar_mul_ltr(&g, &k);
            assert_eq!(scalar_mul_rtl(&g, &k), ltr);
            assert_eq!(scalar_mul_ltr_window(window_table(), &k), ltr);
            assert_eq!(scalar_mul_rtl_precomp(bit_table(), &k), ltr);
            assert!(ltr.is_on_curve());
        }
    }
}
