//! Fixed-Width 256-bit Integer Arithmetic
//!
//! This module implements 256-bit integer operations using 8 × 32-bit limbs.
//!
//! ## Architecture
//!
//! A 256-bit integer X is represented as:
//! ```text
//! X = Σ x_i × 2^(32i) for i = 0..7
//! ```
//!
//! where each x_i ∈ [0, 2^32 - 1].
//!
//! ## Supported Operations
//!
//! - Comparison (most-significant limb first)
//! - Addition with carry propagation
//! - Subtraction with borrow
//! - Right shift by one bit
//! - Full 512-bit multiplication (operand and product scanning) and squaring
//!
//! Overflow and underflow are never dropped: raw add/sub return the final
//! carry/borrow bit and callers interpret it.

pub mod limbs;
pub mod compare;
pub mod add;
pub mod sub;
pub mod mul;

pub use limbs::{U256, U512};
pub use compare::U256Compare;
pub use add::U256Add;
pub use sub::U256Sub;
pub use mul::U256Mul;

/// Number of bits per limb
pub const LIMB_BITS: usize = 32;

/// Number of limbs in a 256-bit integer
pub const LIMB_COUNT: usize = 8;

/// Number of limbs in a 512-bit product
pub const WIDE_LIMB_COUNT: usize = 16;
