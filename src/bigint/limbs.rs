//! 256-bit and 512-bit Limb Representations
//!
//! `U256` holds 8 × 32-bit limbs in little-endian order. `U512` is the
//! double-width buffer produced by multiplication and squaring and consumed
//! by reduction; nothing else ever creates one.

use super::{LIMB_COUNT, WIDE_LIMB_COUNT};

/// 256-bit unsigned integer as 8 × 32-bit limbs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct U256 {
    /// Limbs in little-endian order; limbs[0] is least significant
    pub limbs: [u32; LIMB_COUNT],
}

impl U256 {
    /// Zero
    pub const ZERO: Self = U256 {
        limbs: [0; LIMB_COUNT],
    };

    /// One
    pub const ONE: Self = U256 {
        limbs: [1, 0, 0, 0, 0, 0, 0, 0],
    };

    /// Zero
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// One
    pub fn one() -> Self {
        Self::ONE
    }

    /// Create from raw limbs, least significant first
    pub const fn from_words(limbs: [u32; LIMB_COUNT]) -> Self {
        U256 { limbs }
    }

    /// Create from a u64 value
    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u32; LIMB_COUNT];
        limbs[0] = value as u32;
        limbs[1] = (value >> 32) as u32;
        U256 { limbs }
    }

    /// Create from bytes (big-endian, as printed in test vectors)
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u32; LIMB_COUNT];
        for i in 0..LIMB_COUNT {
            let base = 28 - 4 * i;
            limbs[i] = u32::from_be_bytes([
                bytes[base],
                bytes[base + 1],
                bytes[base + 2],
                bytes[base + 3],
            ]);
        }
        U256 { limbs }
    }

    /// Create from bytes (little-endian)
    pub fn from_bytes_le(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u32; LIMB_COUNT];
        for i in 0..LIMB_COUNT {
            let base = 4 * i;
            limbs[i] = u32::from_le_bytes([
                bytes[base],
                bytes[base + 1],
                bytes[base + 2],
                bytes[base + 3],
            ]);
        }
        U256 { limbs }
    }

    /// Parse a 64-digit big-endian hex string
    pub fn from_be_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s).ok()?;
        let bytes: [u8; 32] = bytes.try_into().ok()?;
        Some(Self::from_bytes_be(&bytes))
    }

    /// Convert to bytes (big-endian)
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for i in 0..LIMB_COUNT {
            let base = 28 - 4 * i;
            bytes[base..base + 4].copy_from_slice(&self.limbs[i].to_be_bytes());
        }
        bytes
    }

    /// Convert to bytes (little-endian)
    pub fn to_bytes_le(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for i in 0..LIMB_COUNT {
            let base = 4 * i;
            bytes[base..base + 4].copy_from_slice(&self.limbs[i].to_le_bytes());
        }
        bytes
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&x| x == 0)
    }

    /// Check if one
    pub fn is_one(&self) -> bool {
        self.limbs[0] == 1 && self.limbs[1..].iter().all(|&x| x == 0)
    }

    /// Get the bit at position `bit_index` (0-indexed from LSB)
    pub fn bit(&self, bit_index: usize) -> bool {
        if bit_index >= 256 {
            return false;
        }
        (self.limbs[bit_index / 32] >> (bit_index % 32)) & 1 == 1
    }

    /// Logical right shift by one bit, returning the bit shifted out (0 or 1)
    pub fn shr1(&self) -> (Self, u32) {
        let mut limbs = [0u32; LIMB_COUNT];
        let mut carry = 0u32;
        for i in (0..LIMB_COUNT).rev() {
            limbs[i] = (self.limbs[i] >> 1) | (carry << 31);
            carry = self.limbs[i] & 1;
        }
        (U256 { limbs }, carry)
    }
}

impl std::fmt::Display for U256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in self.to_bytes_be() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// 512-bit product as 16 × 32-bit limbs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct U512 {
    /// Limbs in little-endian order; limbs[0] is least significant
    pub limbs: [u32; WIDE_LIMB_COUNT],
}

impl U512 {
    /// Zero
    pub const ZERO: Self = U512 {
        limbs: [0; WIDE_LIMB_COUNT],
    };

    /// Widen a 256-bit value into the low half
    pub fn from_low(lo: U256) -> Self {
        let mut limbs = [0u32; WIDE_LIMB_COUNT];
        limbs[..LIMB_COUNT].copy_from_slice(&lo.limbs);
        U512 { limbs }
    }

    /// Low 256 bits
    pub fn low(&self) -> U256 {
        let mut limbs = [0u32; LIMB_COUNT];
        limbs.copy_from_slice(&self.limbs[..LIMB_COUNT]);
        U256 { limbs }
    }

    /// High 256 bits
    pub fn high(&self) -> U256 {
        let mut limbs = [0u32; LIMB_COUNT];
        limbs.copy_from_slice(&self.limbs[LIMB_COUNT..]);
        U256 { limbs }
    }

    /// Get the bit at position `bit_index` (0-indexed from LSB)
    pub fn bit(&self, bit_index: usize) -> bool {
        if bit_index >= 512 {
            return false;
        }
        (self.limbs[bit_index / 32] >> (bit_index % 32)) & 1 == 1
    }
}

impl std::fmt::Display for U512 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in (0..WIDE_LIMB_COUNT).rev() {
            write!(f, "{:08x}", self.limbs[i])?;
        }
        Ok(())
    }
}
