//! P-256 Field Arithmetic
//!
//! Modular arithmetic over p = 2^256 - 2^224 + 2^192 + 2^96 - 1.
//!
//! `add_mod` and `sub_mod` operate on raw residues and assume both operands
//! already lie in [0, p); violating that precondition yields an unspecified
//! residue, never a crash. `FieldElement` removes the caller-discipline
//! problem entirely: it can only be built through reducing constructors, so
//! every instance satisfies value < p by construction.

use crate::bigint::{U256, U256Add, U256Compare, U256Sub};

use super::inverse::BinaryInverse;
use super::montgomery::Montgomery;
use super::params;

/// a + b mod p
///
/// Precondition: a, b < p. The sum of two such values is below 2p, so a
/// single conditional subtraction of p restores the range.
pub fn add_mod(a: &U256, b: &U256) -> U256 {
    let (sum, carry) = U256Add::add(a, b);
    let p = params::p();
    if carry || U256Compare::gte(&sum, &p) {
        U256Sub::sub(&sum, &p).0
    } else {
        sum
    }
}

/// a - b mod p
///
/// Precondition: a, b < p. The true difference is above -p, so a single
/// conditional addition of p restores the range.
pub fn sub_mod(a: &U256, b: &U256) -> U256 {
    let (diff, borrow) = U256Sub::sub(a, b);
    if borrow {
        U256Add::add(&diff, &params::p()).0
    } else {
        diff
    }
}

/// Field element, invariant: value < p
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(U256);

impl FieldElement {
    /// Zero
    pub fn zero() -> Self {
        FieldElement(U256::zero())
    }

    /// One
    pub fn one() -> Self {
        FieldElement(U256::one())
    }

    /// Create from raw limbs, reducing mod p if needed
    ///
    /// Any 256-bit value is below 2p, so one conditional subtraction
    /// establishes the invariant.
    pub fn from_limbs(limbs: U256) -> Self {
        let p = params::p();
        if U256Compare::gte(&limbs, &p) {
            FieldElement(U256Sub::sub(&limbs, &p).0)
        } else {
            FieldElement(limbs)
        }
    }

    /// Create from a u64 value
    pub fn from_u64(value: u64) -> Self {
        FieldElement(U256::from_u64(value))
    }

    /// Create from bytes (big-endian), reducing mod p if needed
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Self {
        Self::from_limbs(U256::from_bytes_be(bytes))
    }

    /// Convert to bytes (big-endian)
    pub fn to_bytes_be(&self) -> [u8; 32] {
        self.0.to_bytes_be()
    }

    /// The raw residue
    pub fn limbs(&self) -> U256 {
        self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if one
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Add two field elements
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(add_mod(&self.0, &other.0))
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &Self) -> Self {
        FieldElement(sub_mod(&self.0, &other.0))
    }

    /// Negate
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            *self
        } else {
            FieldElement(U256Sub::sub(&params::p(), &self.0).0)
        }
    }

    /// Double (2x)
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Triple (3x)
    pub fn triple(&self) -> Self {
        self.add(&self.double())
    }

    /// Halve: v/2 mod p
    ///
    /// p is odd, so an odd residue is halved as (v + p) >> 1; a raw shift
    /// would leave the ring.
    pub fn halve(&self) -> Self {
        if self.0.bit(0) {
            let (sum, carry) = U256Add::add(&self.0, &params::p());
            let (mut half, _) = sum.shr1();
            if carry {
                // bit 256 of the sum lands in bit 255 of the half
                half.limbs[7] |= 1 << 31;
            }
            FieldElement(half)
        } else {
            FieldElement(self.0.shr1().0)
        }
    }

    /// Multiply two field elements (Montgomery path, standard-form result)
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(Montgomery::mul(&self.0, &other.0))
    }

    /// Square (Montgomery path, standard-form result)
    pub fn square(&self) -> Self {
        FieldElement(Montgomery::sqr(&self.0))
    }

    /// Modular inverse via binary extended Euclid
    ///
    /// Returns `None` for zero. The iteration count depends on the bit
    /// pattern of the input; do not call this on secret values without a
    /// side-channel review.
    pub fn inverse(&self) -> Option<Self> {
        BinaryInverse::invert(&self.0).map(FieldElement)
    }
}

impl std::ops::Add for FieldElement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        FieldElement::add(&self, &rhs)
    }
}

impl std::ops::Sub for FieldElement {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        FieldElement::sub(&self, &rhs)
    }
}

impl std::ops::Mul for FieldElement {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        FieldElement::mul(&self, &rhs)
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self {
        FieldElement::neg(&self)
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
