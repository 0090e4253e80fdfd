//! Montgomery Reduction and Multiplication
//!
//! A single Montgomery pass maps a 512-bit T to T·R⁻¹ mod p (R = 2^256)
//! using only half-width multiplications — no division. Field elements in
//! this crate are always exchanged in standard form, so `mul` chains two
//! passes: the first reduction turns a·b into a·b·R⁻¹, and multiplying by
//! the fixed constant R² mod p and reducing again restores a·b mod p.
//! That costs one extra pass per multiply but no persistent
//! Montgomery-form representation anywhere else.

use crate::bigint::{U256, U256Add, U256Mul, U512};

use super::field::add_mod;
use super::params;

/// Montgomery-domain operations over p
pub struct Montgomery;

impl Montgomery {
    /// Single-pass reduction: T -> T·R⁻¹ mod p
    ///
    /// Computes U = (T mod 2^256)·P' mod 2^256, then (T + U·p) / 2^256.
    /// The low 256 bits of T + U·p are zero by construction, so the
    /// division is a register swap plus one conditional increment for the
    /// carry out of the discarded half.
    ///
    /// Precondition: T < p·2^256 (holds for any product of two reduced
    /// field elements). Violating it yields an unspecified residue.
    pub fn reduce(t: &U512) -> U256 {
        let t_lo = t.low();
        let t_hi = t.high();

        let u = U256Mul::mul_ps(&t_lo, &params::p_prime()).low();

        let up = U256Mul::mul_ps(&u, &params::p());
        let up_lo = up.low();
        let up_hi = up.high();

        let mut r = add_mod(&t_hi, &up_hi);
        let (_, carry) = U256Add::add(&t_lo, &up_lo);
        if carry {
            r = add_mod(&r, &U256::one());
        }
        r
    }

    /// a·b mod p, standard form in and out
    pub fn mul(a: &U256, b: &U256) -> U256 {
        let r = Self::reduce(&U256Mul::mul_ps(a, b));
        Self::reduce(&U256Mul::mul_ps(&r, &params::rr_mod_p()))
    }

    /// a² mod p, standard form in and out
    pub fn sqr(a: &U256) -> U256 {
        let r = Self::reduce(&U256Mul::sqr_ps(a));
        Self::reduce(&U256Mul::mul_ps(&r, &params::rr_mod_p()))
    }
}
