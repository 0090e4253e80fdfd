//! 256-bit Multiplication and Squaring
//!
//! All three kernels produce the full 512-bit result; reduction is a
//! separate concern.
//!
//! `mul_os` is the schoolbook operand-scanning form: for each limb of the
//! first operand, multiply through the second operand and accumulate into
//! the running product. `mul_ps` is the product-scanning form: for each
//! output column k, sum every partial product a_i·b_j with i + j = k, then
//! emit one limb and carry the rest forward — one carry pass per column
//! instead of one per partial product. The two are numerically identical;
//! product scanning is the preferred path.

use super::limbs::{U256, U512};
use super::{LIMB_BITS, LIMB_COUNT, WIDE_LIMB_COUNT};

/// 256-bit multiplication operations
pub struct U256Mul;

impl U256Mul {
    /// Full 512-bit product, operand scanning
    pub fn mul_os(a: &U256, b: &U256) -> U512 {
        let mut limbs = [0u32; WIDE_LIMB_COUNT];

        for i in 0..LIMB_COUNT {
            let mut carry = 0u64;
            for j in 0..LIMB_COUNT {
                let uv = limbs[i + j] as u64 + a.limbs[i] as u64 * b.limbs[j] as u64 + carry;
                limbs[i + j] = uv as u32;
                carry = uv >> LIMB_BITS;
            }
            limbs[i + LIMB_COUNT] = carry as u32;
        }

        U512 { limbs }
    }

    /// Full 512-bit product, product scanning
    pub fn mul_ps(a: &U256, b: &U256) -> U512 {
        let mut limbs = [0u32; WIDE_LIMB_COUNT];
        // column sum never exceeds 8 partial products of 64 bits plus the
        // carried-forward remainder, which fits comfortably in 128 bits
        let mut acc = 0u128;

        for k in 0..WIDE_LIMB_COUNT - 1 {
            let lo = k.saturating_sub(LIMB_COUNT - 1);
            let hi = k.min(LIMB_COUNT - 1);
            for i in lo..=hi {
                let j = k - i;
                acc += a.limbs[i] as u128 * b.limbs[j] as u128;
            }
            limbs[k] = acc as u32;
            acc >>= LIMB_BITS;
        }
        limbs[WIDE_LIMB_COUNT - 1] = acc as u32;

        U512 { limbs }
    }

    /// Full 512-bit square, product scanning
    ///
    /// Cross terms a_i·a_j with i != j appear twice in the square; they are
    /// computed once and doubled.
    pub fn sqr_ps(a: &U256) -> U512 {
        let mut limbs = [0u32; WIDE_LIMB_COUNT];
        let mut acc = 0u128;

        for k in 0..WIDE_LIMB_COUNT - 1 {
            let lo = k.saturating_sub(LIMB_COUNT - 1);
            let hi = k.min(LIMB_COUNT - 1);
            for i in lo..=hi {
                let j = k - i;
                if j < i {
                    break;
                }
                let uv = a.limbs[i] as u128 * a.limbs[j] as u128;
                acc += if i < j { uv << 1 } else { uv };
            }
            limbs[k] = acc as u32;
            acc >>= LIMB_BITS;
        }
        limbs[WIDE_LIMB_COUNT - 1] = acc as u32;

        U512 { limbs }
    }
}
