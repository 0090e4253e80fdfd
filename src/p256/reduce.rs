//! P-256 Fast Reduction
//!
//! Reduces a 512-bit product to a field residue in O(1) word operations,
//! with no long division. p has the sparse pattern
//! 2^256 - 2^224 + 2^192 + 2^96 - 1, so every power 2^(32k) for k >= 8 is
//! congruent to a short signed combination of lower powers. Collecting
//! those combinations per input limb yields nine fixed 256-bit partials
//! built purely from limbs 8..15 of the input, summed as
//!
//! ```text
//! s0 + 2*s1 + 2*s2 + s3 + s4 - s5 - s6 - s7 - s8  (mod p)
//! ```
//!
//! The additions and subtractions run in plain wrapping 2^256 arithmetic
//! while the net carry/borrow count is tracked; one add or subtract of the
//! matching entry from the 1p..5p table undoes the wrap, and a final
//! conditional subtraction pins the result into [0, p).

use crate::bigint::{U256, U256Add, U256Compare, U256Sub, U512};

use super::params;

/// Fast reduction mod p for 512-bit products
pub struct FastReduce;

impl FastReduce {
    /// Reduce a 512-bit value to [0, p)
    ///
    /// Precondition: the input is the full product of two operands that are
    /// each already below p.
    pub fn reduce(t: &U512) -> U256 {
        let c = &t.limbs;

        // fixed selection/placement of the high limbs; this table is a
        // direct consequence of p's bit pattern
        let s = [
            U256::from_words([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]),
            U256::from_words([0, 0, 0, c[11], c[12], c[13], c[14], c[15]]),
            U256::from_words([0, 0, 0, c[12], c[13], c[14], c[15], 0]),
            U256::from_words([c[8], c[9], c[10], 0, 0, 0, c[14], c[15]]),
            U256::from_words([c[9], c[10], c[11], c[13], c[14], c[15], c[13], c[8]]),
            U256::from_words([c[11], c[12], c[13], 0, 0, 0, c[8], c[10]]),
            U256::from_words([c[12], c[13], c[14], c[15], 0, 0, c[9], c[11]]),
            U256::from_words([c[13], c[14], c[15], c[8], c[9], c[10], 0, c[12]]),
            U256::from_words([c[14], c[15], 0, c[9], c[10], c[11], 0, c[13]]),
        ];

        let mut carries = 0u32;
        let mut borrows = 0u32;

        let (mut r, carry) = U256Add::add(&s[0], &s[1]);
        carries += carry as u32;
        for term in [&s[1], &s[2], &s[2], &s[3], &s[4]] {
            let (sum, carry) = U256Add::add(&r, term);
            r = sum;
            carries += carry as u32;
        }
        for term in [&s[5], &s[6], &s[7], &s[8]] {
            let (diff, borrow) = U256Sub::sub(&r, term);
            r = diff;
            borrows += borrow as u32;
        }

        let multiples = params::p_multiples();
        if carries > borrows {
            r = U256Sub::sub(&r, &multiples[(carries - borrows - 1) as usize]).0;
        } else if borrows > carries {
            r = U256Add::add(&r, &multiples[(borrows - carries - 1) as usize]).0;
        }

        // the correction can leave the value one p above range
        let p = params::p();
        if U256Compare::gte(&r, &p) {
            r = U256Sub::sub(&r, &p).0;
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::U256Mul;
    use crate::p256::field::add_mod;

    /// Bit-serial reference reduction: r = 2r + bit, mod p at every step.
    /// Slow but independent of every fast path in the crate.
    fn reference_reduce(t: &U512) -> U256 {
        let mut r = U256::zero();
        for i in (0..512).rev() {
            r = add_mod(&r, &r);
            if t.bit(i) {
                r = add_mod(&r, &U256::one());
            }
        }
        r
    }

    #[test]
    fn test_reduce_small() {
        let t = U512::from_low(U256::from_u64(42));
        assert_eq!(FastReduce::reduce(&t), U256::from_u64(42));
    }

    #[test]
    fn test_reduce_gx_gy_product() {
        let a = params::generator_x();
        let b = params::generator_y();
        let product = U256Mul::mul_ps(&a, &b);
        assert_eq!(FastReduce::reduce(&product), reference_reduce(&product));
    }

    #[test]
    fn test_reduce_square_near_p() {
        // (p - 1)^2 stresses the carry/borrow counting harder than random
        // mid-range operands
        let p_minus_1 = U256Sub::sub(&params::p(), &U256::one()).0;
        let product = U256Mul::sqr_ps(&p_minus_1);
        assert_eq!(FastReduce::reduce(&product), reference_reduce(&product));
        // (p - 1)^2 = p^2 - 2p + 1 = 1 mod p
        assert!(FastReduce::reduce(&product).is_one());
    }

    #[test]
    fn test_reduce_result_below_p() {
        let pairs = [
            (params::generator_x(), params::generator_y()),
            (params::rr_mod_p(), params::generator_x()),
            (
                U256Sub::sub(&params::p(), &U256::one()).0,
                U256Sub::sub(&params::p(), &U256::from_u64(2)).0,
            ),
        ];
        for (a, b) in pairs {
            let r = FastReduce::reduce(&U256Mul::mul_ps(&a, &b));
            assert!(U256Compare::lt(&r, &params::p()));
        }
    }
}
