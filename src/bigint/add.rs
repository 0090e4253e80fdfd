//! 256-bit Addition with Carry Propagation

use super::limbs::U256;
use super::{LIMB_BITS, LIMB_COUNT};

/// 256-bit addition operations
pub struct U256Add;

impl U256Add {
    /// Add two 256-bit integers, returning (sum, final carry)
    ///
    /// The carry is an arithmetic fact, not an error: a `true` carry means
    /// the true sum is `result + 2^256`.
    pub fn add(a: &U256, b: &U256) -> (U256, bool) {
        let mut limbs = [0u32; LIMB_COUNT];
        let mut carry = 0u64;

        for i in 0..LIMB_COUNT {
            let sum = a.limbs[i] as u64 + b.limbs[i] as u64 + carry;
            limbs[i] = sum as u32;
            carry = sum >> LIMB_BITS;
        }

        (U256 { limbs }, carry != 0)
    }
}

/// Wrapping addition (mod 2^256)
impl std::ops::Add for U256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        U256Add::add(&self, &rhs).0
    }
}

impl std::ops::Add<&U256> for &U256 {
    type Output = U256;

    fn add(self, rhs: &U256) -> U256 {
        U256Add::add(self, rhs).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_add() {
        let (sum, carry) = U256Add::add(&U256::from_u64(100), &U256::from_u64(200));
        assert!(!carry);
        assert_eq!(sum, U256::from_u64(300));
    }

    #[test]
    fn test_carry_across_limbs() {
        let (sum, carry) = U256Add::add(&U256::from_u64(0xFFFF_FFFF), &U256::one());
        assert!(!carry);
        assert_eq!(sum.limbs[0], 0);
        assert_eq!(sum.limbs[1], 1);
    }

    #[test]
    fn test_overflow_wraps() {
        let max = U256::from_words([0xFFFF_FFFF; 8]);
        let (sum, carry) = U256Add::add(&max, &U256::one());
        assert!(carry);
        assert!(sum.is_zero());
    }

    #[test]
    fn test_commutativity() {
        let a = U256::from_u64(12345);
        let b = U256::from_u64(67890);
        assert_eq!(U256Add::add(&a, &b), U256Add::add(&b, &a));
    }

    #[test]
    fn test_identity() {
        let a = U256::from_u64(42);
        let (sum, carry) = U256Add::add(&a, &U256::zero());
        assert!(!carry);
        assert_eq!(sum, a);
    }
}
