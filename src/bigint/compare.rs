//! 256-bit Magnitude Comparison
//!
//! Compares most-significant limb first. A derived lexicographic order on
//! the limb array would start at the least-significant limb, so the
//! comparison is spelled out here.

use std::cmp::Ordering;

use super::limbs::U256;
use super::LIMB_COUNT;

/// 256-bit comparison operations
pub struct U256Compare;

impl U256Compare {
    /// Compare two 256-bit integers by unsigned magnitude
    pub fn cmp(a: &U256, b: &U256) -> Ordering {
        for i in (0..LIMB_COUNT).rev() {
            match a.limbs[i].cmp(&b.limbs[i]) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// a >= b
    pub fn gte(a: &U256, b: &U256) -> bool {
        Self::cmp(a, b) != Ordering::Less
    }

    /// a < b
    pub fn lt(a: &U256, b: &U256) -> bool {
        Self::cmp(a, b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        let a = U256::from_u64(42);
        assert_eq!(U256Compare::cmp(&a, &a), Ordering::Equal);
        assert!(U256Compare::gte(&a, &a));
        assert!(!U256Compare::lt(&a, &a));
    }

    #[test]
    fn test_less_greater() {
        let a = U256::from_u64(1);
        let b = U256::from_u64(2);
        assert_eq!(U256Compare::cmp(&a, &b), Ordering::Less);
        assert_eq!(U256Compare::cmp(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_high_limb_dominates() {
        // high limb set beats any value in the low limbs
        let a = U256::from_words([0xFFFF_FFFF, 0xFFFF_FFFF, 0, 0, 0, 0, 0, 0]);
        let b = U256::from_words([0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(U256Compare::cmp(&a, &b), Ordering::Less);
        assert!(U256Compare::gte(&b, &a));
    }
}
