//! NIST P-256 Curve Parameters
//!
//! All constants as defined in FIPS 186-4 / SEC 2. The Montgomery constants
//! and the p-multiples table are fixed consequences of p and are kept here
//! alongside the curve parameters.

use crate::bigint::{U256, U256Add, U256Sub};

/// Field modulus: p = 2^256 - 2^224 + 2^192 + 2^96 - 1
/// = 0xFFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF
pub const P_BYTES: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Curve coefficient b
/// = 0x5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B
pub const B_BYTES: [u8; 32] = [
    0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7,
    0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86, 0xBC,
    0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6,
    0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2, 0x60, 0x4B,
];

/// Generator point G x-coordinate
/// = 0x6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296
pub const GX_BYTES: [u8; 32] = [
    0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47,
    0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40, 0xF2,
    0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0,
    0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98, 0xC2, 0x96,
];

/// Generator point G y-coordinate
/// = 0x4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5
pub const GY_BYTES: [u8; 32] = [
    0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B,
    0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E, 0x16,
    0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE,
    0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF, 0x51, 0xF5,
];

/// Group order n
/// = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
pub const N_BYTES: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84,
    0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63, 0x25, 0x51,
];

/// Montgomery constant P' = -p^(-1) mod 2^256, limbs least significant first
/// = 0xFFFFFFFF00000002000000000000000000000001000000000000000000000001
pub const P_PRIME_WORDS: [u32; 8] = [
    0x0000_0001, 0x0000_0000, 0x0000_0000, 0x0000_0001,
    0x0000_0000, 0x0000_0000, 0x0000_0002, 0xFFFF_FFFF,
];

/// Montgomery radix residue R mod p, R = 2^256
/// = 0x00000000FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001
pub const R_MOD_P_WORDS: [u32; 8] = [
    0x0000_0001, 0x0000_0000, 0x0000_0000, 0xFFFF_FFFF,
    0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFE, 0x0000_0000,
];

/// Montgomery constant R^2 mod p
/// = 0x00000004FFFFFFFDFFFFFFFFFFFFFFFEFFFFFFFBFFFFFFFF0000000000000003
pub const RR_MOD_P_WORDS: [u32; 8] = [
    0x0000_0003, 0x0000_0000, 0xFFFF_FFFF, 0xFFFF_FFFB,
    0xFFFF_FFFE, 0xFFFF_FFFF, 0xFFFF_FFFD, 0x0000_0004,
];

/// Get p as U256
pub fn p() -> U256 {
    U256::from_bytes_be(&P_BYTES)
}

/// Get the curve coefficient a = -3 mod p as U256
pub fn coeff_a() -> U256 {
    U256Sub::sub(&p(), &U256::from_u64(3)).0
}

/// Get the curve coefficient b as U256
pub fn coeff_b() -> U256 {
    U256::from_bytes_be(&B_BYTES)
}

/// Get the generator x-coordinate
pub fn generator_x() -> U256 {
    U256::from_bytes_be(&GX_BYTES)
}

/// Get the generator y-coordinate
pub fn generator_y() -> U256 {
    U256::from_bytes_be(&GY_BYTES)
}

/// Get the group order n as U256
pub fn n() -> U256 {
    U256::from_bytes_be(&N_BYTES)
}

/// Get P' as U256
pub fn p_prime() -> U256 {
    U256::from_words(P_PRIME_WORDS)
}

/// Get R mod p as U256
pub fn r_mod_p() -> U256 {
    U256::from_words(R_MOD_P_WORDS)
}

/// Get R^2 mod p as U256
pub fn rr_mod_p() -> U256 {
    U256::from_words(RR_MOD_P_WORDS)
}

/// The multiples 1p..5p, each taken mod 2^256
///
/// Used by the fast reduction to undo up to five net carries or borrows in
/// a single addition or subtraction.
pub fn p_multiples() -> [U256; 5] {
    let p = p();
    let mut table = [p; 5];
    for k in 1..5 {
        // wrapping is intended: the correction arithmetic is mod 2^256
        table[k] = U256Add::add(&table[k - 1], &p).0;
    }
    table
}
