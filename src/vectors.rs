//! Test-Vector File Harness
//!
//! Reads and writes the plain-text operand format used for exchanging
//! vectors with other implementations: one value per line as big-endian
//! hex (64 digits for a 256-bit value, 128 for a 512-bit one), values
//! separated by arbitrary whitespace or blank lines. Output is uppercase
//! with a blank line after every value.

use std::fs;
use std::io;
use std::path::Path;

use crate::bigint::{U256, U512};

fn invalid(token: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("malformed operand {:?}", token),
    )
}

/// Parse whitespace-separated 64-digit hex operands
pub fn parse_operands(input: &str) -> io::Result<Vec<U256>> {
    input
        .split_whitespace()
        .map(|token| U256::from_be_hex(token).ok_or_else(|| invalid(token)))
        .collect()
}

/// Parse whitespace-separated 128-digit hex operands
pub fn parse_wide_operands(input: &str) -> io::Result<Vec<U512>> {
    input
        .split_whitespace()
        .map(|token| {
            if token.len() != 128 {
                return Err(invalid(token));
            }
            let hi = U256::from_be_hex(&token[..64]).ok_or_else(|| invalid(token))?;
            let lo = U256::from_be_hex(&token[64..]).ok_or_else(|| invalid(token))?;
            let mut wide = U512::from_low(lo);
            wide.limbs[8..].copy_from_slice(&hi.limbs);
            Ok(wide)
        })
        .collect()
}

/// Read a whole operand file
pub fn read_operands(path: &Path) -> io::Result<Vec<U256>> {
    parse_operands(&fs::read_to_string(path)?)
}

/// Format results as uppercase hex, one per line, blank-line separated
pub fn format_results(values: &[U256]) -> String {
    let mut out = String::with_capacity(values.len() * 66);
    for value in values {
        for byte in value.to_bytes_be() {
            out.push_str(&format!("{:02X}", byte));
        }
        out.push_str("\n\n");
    }
    out
}

/// Format 512-bit results as uppercase hex, one per line, blank-line separated
pub fn format_wide_results(values: &[U512]) -> String {
    let mut out = String::with_capacity(values.len() * 130);
    for value in values {
        for i in (0..16).rev() {
            out.push_str(&format!("{:08X}", value.limbs[i]));
        }
        out.push_str("\n\n");
    }
    out
}

/// Write a result file in the operand format
pub fn write_results(path: &Path, values: &[U256]) -> io::Result<()> {
    fs::write(path, format_results(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let ops = parse_operands(
            "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
        )
        .unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].limbs[0], 0xD898_C296);
        assert_eq!(ops[0].limbs[7], 0x6B17_D1F2);
    }

    #[test]
    fn test_parse_blank_line_separated() {
        let text = format!("{:064x}\n\n{:064x}\n\n", 1, 2);
        let ops = parse_operands(&text).unwrap();
        assert_eq!(ops, vec![U256::from_u64(1), U256::from_u64(2)]);
    }

    #[test]
    fn test_parse_rejects_short_and_junk() {
        assert_eq!(
            parse_operands("abcd").unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
        let text = format!("{:064x} zz{:062x}", 1, 0);
        assert_eq!(
            parse_operands(&text).unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
    }

    #[test]
    fn test_parse_wide() {
        let text = format!("{:0128x}", 0xDEAD_BEEFu64);
        let ops = parse_wide_operands(&text).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].low(), U256::from_u64(0xDEAD_BEEF));
        assert!(ops[0].high().is_zero());

        let mut wide = U512::ZERO;
        wide.limbs[15] = 0x8000_0000;
        let text = format!("{}", wide);
        assert_eq!(parse_wide_operands(&text).unwrap()[0], wide);
    }

    #[test]
    fn test_format_wide_roundtrip() {
        let mut wide = U512::ZERO;
        wide.limbs[0] = 0xBEEF;
        wide.limbs[15] = 0xC0DE;
        let text = format_wide_results(&[wide]);
        assert!(text.starts_with("0000C0DE"));
        assert_eq!(parse_wide_operands(&text).unwrap(), vec![wide]);
    }

    #[test]
    fn test_format_roundtrip() {
        let values = vec![U256::from_u64(0xFFEE_0011), U256::one()];
        let text = format_results(&values);
        assert!(text.contains("FFEE0011"));
        assert_eq!(parse_operands(&text).unwrap(), values);
    }
}
