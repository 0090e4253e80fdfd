//! NIST P-256 Arithmetic
//!
//! Field and group arithmetic for the curve y² = x³ + ax + b over GF(p)
//! with a = -3 and the NIST-standard p, b, generator and order. The layers
//! build on each other:
//!
//! 1. **params**: curve constants and Montgomery precomputation
//! 2. **reduce / montgomery**: two interchangeable 512→256 bit reducers
//! 3. **field / inverse**: field element type with modular inversion
//! 4. **point**: affine and Jacobian group operations
//! 5. **scalar_mul**: four scalar-multiplication strategies

pub mod field;
pub mod inverse;
pub mod montgomery;
pub mod params;
pub mod point;
pub mod reduce;
pub mod scalar_mul;

pub use field::FieldElement;
pub use inverse::BinaryInverse;
pub use montgomery::Montgomery;
pub use point::{AffinePoint, JacobianPoint};
pub use reduce::FastReduce;
pub use scalar_mul::{
    bit_table, scalar_mul_ltr, scalar_mul_ltr_window, scalar_mul_rtl, scalar_mul_rtl_precomp,
    window_table, BitTable, WindowTable,
};
