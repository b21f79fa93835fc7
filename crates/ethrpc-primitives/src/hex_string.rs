//! Hex-encoded byte value as it appears on the JSON-RPC wire

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::{codec, PrimitiveError};

/// A byte sequence exchanged as a `0x`-prefixed hex string.
///
/// The stored bytes are exact: [`HexString::as_bytes`] returns what was decoded,
/// including leading zero bytes. Renderings:
///
/// - [`HexString::canonical`]: full encoding, `0x0` for empty or all-zero input
/// - `Display`: leading zero digits stripped
/// - [`HexString::plain`]: every stored byte, without the `0x` prefix
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct HexString(Vec<u8>);

impl HexString {
    /// Parse from a hex string with optional `0x` prefix
    pub fn parse(s: &str) -> Result<Self, PrimitiveError> {
        codec::decode(s).map(HexString)
    }

    /// Wrap raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        HexString(bytes.into())
    }

    /// Minimal big-endian encoding of an integer
    pub fn from_u64(value: u64) -> Self {
        HexString(codec::from_u64(value))
    }

    /// Parse a list of hex strings, failing on the first malformed entry
    pub fn parse_list<S: AsRef<str>>(values: &[S]) -> Result<Vec<Self>, PrimitiveError> {
        values.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    /// Stored bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the stored bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of stored bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no bytes are stored
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical rendering (`0x0` for empty or all-zero bytes)
    pub fn canonical(&self) -> String {
        codec::encode_canonical(&self.0)
    }

    /// Full hex digits without the `0x` prefix
    pub fn plain(&self) -> String {
        hex::encode(&self.0)
    }

    /// Printable text content: bytes below 8 are dropped, the rest read as UTF-8.
    ///
    /// Used for ABI-encoded strings returned by `eth_call`, where length words
    /// and padding show up as low control bytes.
    pub fn text(&self) -> String {
        let printable: Vec<u8> = self.0.iter().copied().filter(|&b| b > 7).collect();
        String::from_utf8_lossy(&printable).into_owned()
    }

    /// Unsigned big-endian integer value
    pub fn to_big_uint(&self) -> BigUint {
        codec::to_big_integer(&self.0)
    }

    /// Low 64 bits as an integer (see [`codec::to_u64`])
    pub fn to_u64(&self) -> u64 {
        codec::to_u64(&self.0)
    }

    /// Append `other` to this value
    pub fn concat(&self, other: &HexString) -> HexString {
        HexString(codec::concat(&self.0, &other.0))
    }

    /// Right-align within `length` bytes (see [`codec::pad_to`])
    pub fn pad_to(&self, length: usize) -> HexString {
        HexString(codec::pad_to(&self.0, length))
    }
}

impl fmt::Debug for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexString({})", self.canonical())
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode_display(&self.0))
    }
}

impl FromStr for HexString {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<u8>> for HexString {
    fn from(bytes: Vec<u8>) -> Self {
        HexString(bytes)
    }
}

impl From<&[u8]> for HexString {
    fn from(bytes: &[u8]) -> Self {
        HexString(bytes.to_vec())
    }
}

impl AsRef<[u8]> for HexString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for HexString {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.canonical())
        }
    }

    impl<'de> Deserialize<'de> for HexString {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            HexString::parse(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Rendering ====================

    #[test]
    fn test_canonical_zero_forms() {
        assert_eq!(HexString::default().canonical(), "0x0");
        assert_eq!(HexString::parse("0x00").unwrap().canonical(), "0x0");
        assert_eq!(HexString::parse("0x0000").unwrap().canonical(), "0x0");
    }

    #[test]
    fn test_canonical_keeps_leading_zero_bytes() {
        let word = "0x000000000000000000000000499d4aab8acab015d319ebfe476e4c800079ce87";
        let h = HexString::parse(word).unwrap();
        assert_eq!(h.canonical(), word);
        assert_eq!(h.len(), 32);
    }

    #[test]
    fn test_display_strips_leading_zeros() {
        let h = HexString::parse("0x0001").unwrap();
        assert_eq!(h.to_string(), "0x1");
        assert_eq!(HexString::default().to_string(), "0x0");
    }

    #[test]
    fn test_plain_keeps_every_digit() {
        assert_eq!(HexString::parse("0x0001").unwrap().plain(), "0001");
        assert_eq!(HexString::parse("0xabc").unwrap().plain(), "0abc");
        assert_eq!(HexString::default().plain(), "");
    }

    #[test]
    fn test_odd_length_quantity() {
        let h = HexString::parse("0x7b").unwrap();
        assert_eq!(h.to_u64(), 123);
        let h = HexString::parse("0x3e8").unwrap();
        assert_eq!(h.as_bytes(), &[0x03, 0xe8]);
        assert_eq!(h.to_u64(), 1000);
        assert_eq!(h.to_string(), "0x3e8");
    }

    #[test]
    fn test_debug() {
        let h = HexString::parse("0xabcd").unwrap();
        assert_eq!(format!("{:?}", h), "HexString(0xabcd)");
    }

    // ==================== Conversions ====================

    #[test]
    fn test_from_u64() {
        assert_eq!(HexString::from_u64(0).canonical(), "0x0");
        assert!(HexString::from_u64(0).is_empty());
        assert_eq!(HexString::from_u64(123).to_string(), "0x7b");
        assert_eq!(HexString::from_u64(0x1_0000).canonical(), "0x010000");
    }

    #[test]
    fn test_to_big_uint() {
        let h = HexString::parse("0x153711f0a39755800").unwrap();
        assert_eq!(h.to_big_uint().to_string(), "24459365180000000000");
    }

    #[test]
    fn test_text_drops_control_bytes() {
        let mut bytes = vec![0u8; 31];
        bytes.push(0x05);
        bytes.extend_from_slice(b"JnxN3");
        let h = HexString::from_bytes(bytes);
        assert_eq!(h.text(), "JnxN3");
    }

    #[test]
    fn test_parse_list() {
        let list = HexString::parse_list(&["0x01", "0x0203"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].as_bytes(), &[0x02, 0x03]);

        assert!(HexString::parse_list(&["0x01", "0xzz"]).is_err());
    }

    #[test]
    fn test_from_str() {
        let h: HexString = "0x1234".parse().unwrap();
        assert_eq!(h.as_bytes(), &[0x12, 0x34]);
        assert!("0xnothex".parse::<HexString>().is_err());
    }

    // ==================== Concat / pad ====================

    #[test]
    fn test_concat() {
        let a = HexString::parse("0x1234").unwrap();
        let b = HexString::parse("0x56").unwrap();
        assert_eq!(a.concat(&b).canonical(), "0x123456");
    }

    #[test]
    fn test_pad_to() {
        let h = HexString::parse("0x1234").unwrap();
        assert_eq!(h.pad_to(4).canonical(), "0x00001234");
        assert_eq!(h.pad_to(1).canonical(), "0x34");
        assert_eq!(h.pad_to(2), h);
    }

    #[test]
    fn test_concat_then_pad_both_directions() {
        let joined = HexString::parse("0x12")
            .unwrap()
            .concat(&HexString::parse("0x3456").unwrap());
        assert_eq!(joined.pad_to(2).canonical(), "0x3456");
        assert_eq!(joined.pad_to(5).canonical(), "0x0000123456");
    }
}
