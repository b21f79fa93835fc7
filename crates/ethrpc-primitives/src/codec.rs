//! Hex codec for Ethereum wire values
//!
//! Converts between big-endian byte sequences, `0x`-prefixed hex strings and
//! integers. JSON-RPC quantities omit the leading zero nibble, so odd-length
//! input is accepted and left-padded with a single `0` before decoding.

use num_bigint::BigUint;

use crate::PrimitiveError;

/// Decode a hex string (with or without 0x prefix) into bytes
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitiveError> {
    let digits = strip_prefix(s);
    let result = if digits.len() % 2 == 0 {
        hex::decode(digits)
    } else {
        hex::decode(format!("0{}", digits))
    };
    result.map_err(|e| PrimitiveError::MalformedHex(format!("{:?}: {}", s, e)))
}

/// Canonical form: `0x0` for empty or all-zero input, otherwise the full encoding
pub fn encode_canonical(bytes: &[u8]) -> String {
    if bytes.iter().all(|&b| b == 0) {
        return "0x0".to_string();
    }
    format!("0x{}", hex::encode(bytes))
}

/// Display form: leading zero digits stripped, at least one digit kept
pub fn encode_display(bytes: &[u8]) -> String {
    let encoded = hex::encode(bytes);
    let trimmed = encoded.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0x0".to_string();
    }
    format!("0x{}", trimmed)
}

/// Unsigned big-endian interpretation. Empty input is zero.
pub fn to_big_integer(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Minimal big-endian encoding. Zero encodes as an empty sequence.
pub fn from_u64(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(8);
    bytes[start..].to_vec()
}

/// Interpret the last 8 bytes as a big-endian u64.
///
/// Shorter input is left-padded with zeros. Longer input silently loses its
/// leading bytes; use [`to_big_integer`] for values wider than 64 bits.
pub fn to_u64(bytes: &[u8]) -> u64 {
    let tail = &bytes[bytes.len().saturating_sub(8)..];
    let mut buf = [0u8; 8];
    buf[8 - tail.len()..].copy_from_slice(tail);
    u64::from_be_bytes(buf)
}

/// Concatenate two byte sequences
pub fn concat(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    result.extend_from_slice(a);
    result.extend_from_slice(b);
    result
}

/// Right-align `bytes` in a buffer of `length` bytes.
///
/// Growing zero-fills on the left. Shrinking keeps the rightmost `length` bytes.
pub fn pad_to(bytes: &[u8], length: usize) -> Vec<u8> {
    if bytes.len() >= length {
        return bytes[bytes.len() - length..].to_vec();
    }
    let mut result = vec![0u8; length];
    result[length - bytes.len()..].copy_from_slice(bytes);
    result
}

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
