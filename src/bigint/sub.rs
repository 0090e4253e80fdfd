//! 256-bit Subtraction with Borrow Propagation

use super::limbs::U256;
use super::LIMB_COUNT;

/// 256-bit subtraction operations
pub struct U256Sub;

impl U256Sub {
    /// Subtract b from a, returning (difference, final borrow)
    ///
    /// A `true` borrow means the true difference was negative and the
    /// result has wrapped: `result = a - b + 2^256`.
    pub fn sub(a: &U256, b: &U256) -> (U256, bool) {
        let mut limbs = [0u32; LIMB_COUNT];
        let mut borrow = 0u64;

        for i in 0..LIMB_COUNT {
            let diff = (a.limbs[i] as u64)
                .wrapping_sub(b.limbs[i] as u64)
                .wrapping_sub(borrow);
            limbs[i] = diff as u32;
            borrow = (diff >> 63) & 1;
        }

        (U256 { limbs }, borrow != 0)
    }
}

/// Wrapping subtraction (mod 2^256)
impl std::ops::Sub for U256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        U256Sub::sub(&self, &rhs).0
    }
}

impl std::ops::Sub<&U256> for &U256 {
    type Output = U256;

    fn sub(self, rhs: &U256) -> U256 {
        U256Sub::sub(self, rhs).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::add::U256Add;

    #[test]
    fn test_simple_sub() {
        let (diff, borrow) = U256Sub::sub(&U256::from_u64(300), &U256::from_u64(100));
        assert!(!borrow);
        assert_eq!(diff, U256::from_u64(200));
    }

    #[test]
    fn test_borrow_across_limbs() {
        let x = U256::from_words([0, 1, 0, 0, 0, 0, 0, 0]); // 2^32
        let (diff, borrow) = U256Sub::sub(&x, &U256::one());
        assert!(!borrow);
        assert_eq!(diff.limbs[0], 0xFFFF_FFFF);
        assert_eq!(diff.limbs[1], 0);
    }

    #[test]
    fn test_underflow_wraps() {
        let (diff, borrow) = U256Sub::sub(&U256::zero(), &U256::one());
        assert!(borrow);
        assert_eq!(diff, U256::from_words([0xFFFF_FFFF; 8]));
    }

    #[test]
    fn test_sub_undoes_add() {
        let a = U256::from_u64(0xDEAD_BEEF_0000_1111);
        let b = U256::from_u64(0x1234_5678_9ABC_DEF0);
        let (sum, _) = U256Add::add(&a, &b);
        let (back, borrow) = U256Sub::sub(&sum, &b);
        assert!(!borrow);
        assert_eq!(back, a);
    }

    #[test]
    fn test_self_is_zero() {
        let a = U256::from_u64(999);
        let (diff, borrow) = U256Sub::sub(&a, &a);
        assert!(!borrow);
        assert!(diff.is_zero());
    }
}
