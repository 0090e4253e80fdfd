//! nistp256: Fixed-Width Arithmetic for the NIST P-256 Curve
//!
//! A self-contained implementation of the arithmetic stack underneath
//! ECDSA/ECDH on P-256, built bottom-up:
//!
//! ```text
//! 256-bit limb arithmetic  (bigint)
//!         |
//! field arithmetic mod p   (p256::field, reduce, montgomery, inverse)
//!         |
//! group operations          (p256::point)
//!         |
//! scalar multiplication     (p256::scalar_mul)
//! ```
//!
//! Values are 8 x 32-bit little-endian limbs throughout; products occupy
//! 16 limbs. Two independent 512→256 bit reducers (curve-specific fast
//! reduction and Montgomery reduction) cross-check each other, and four
//! scalar-multiplication variants trade precomputation for per-call work.
//!
//! ## Usage
//!
//! ```
//! use nistp256::bigint::U256;
//! use nistp256::p256::{scalar_mul_ltr, AffinePoint};
//!
//! let k = U256::from_u64(12345);
//! let point = scalar_mul_ltr(&AffinePoint::generator(), &k);
//! assert!(point.is_on_curve());
//! ```
//!
//! Nothing here is constant time; see the `scalar_mul` module notes before
//! using any of this with secret scalars.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bigint;
pub mod p256;
pub mod vectors;

pub use bigint::{U256, U512};
pub use p256::{AffinePoint, FieldElement, JacobianPoint};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
