//! Binary Modular Inverse
//!
//! Plus/minus variant of the binary extended Euclidean algorithm. Two pairs
//! (u, x1) and (v, x2) are maintained with the invariants
//!
//! ```text
//! u ≡ a·x1 (mod p)     v ≡ a·x2 (mod p)
//! ```
//!
//! starting from (a, 1) and (p, 0). Halving an even u keeps the invariant
//! if x1 is halved too; when x1 is odd, p (odd) is added first so the
//! halving stays exact in the ring. Once both u and v are odd, the smaller
//! is subtracted from the larger with the matching mod-p subtraction on the
//! cofactors. gcd(a, p) = 1 for any nonzero a < p, so exactly one of u, v
//! reaches 1 and its cofactor is a⁻¹.
//!
//! The iteration count and branch pattern follow the bit pattern of the
//! input: this is not constant time.

use crate::bigint::{U256, U256Add, U256Compare, U256Sub};

use super::field::sub_mod;
use super::params;

/// Binary extended-Euclid inversion mod p
pub struct BinaryInverse;

impl BinaryInverse {
    /// Compute a⁻¹ mod p, or `None` for a = 0
    ///
    /// Precondition: a < p.
    pub fn invert(a: &U256) -> Option<U256> {
        if a.is_zero() {
            return None;
        }

        let p = params::p();
        let mut u = *a;
        let mut v = p;
        let mut x1 = U256::one();
        let mut x2 = U256::zero();

        while !u.is_one() && !v.is_one() {
            while !u.bit(0) {
                u = u.shr1().0;
                x1 = Self::halve_cofactor(&x1, &p);
            }
            while !v.bit(0) {
                v = v.shr1().0;
                x2 = Self::halve_cofactor(&x2, &p);
            }

            if U256Compare::gte(&u, &v) {
                u = U256Sub::sub(&u, &v).0;
                x1 = sub_mod(&x1, &x2);
            } else {
                v = U256Sub::sub(&v, &u).0;
                x2 = sub_mod(&x2, &x1);
            }
        }

        if u.is_one() {
            Some(x1)
        } else {
            Some(x2)
        }
    }

    /// Halve a cofactor, adding p first when it is odd
    fn halve_cofactor(x: &U256, p: &U256) -> U256 {
        if x.bit(0) {
            let (sum, carry) = U256Add::add(x, p);
            let (mut half, _) = sum.shr1();
            if carry {
                // bit 256 of the sum becomes bit 255 of the half
                half.limbs[7] |= 1 << 31;
            }
            half
        } else {
            x.shr1().0
        }
    }
}
