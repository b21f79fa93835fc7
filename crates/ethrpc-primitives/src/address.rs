//! Ethereum account address (20 bytes)

use std::fmt;
use std::str::FromStr;

use crate::{codec, PrimitiveError, H256};

/// Ethereum-compatible 20-byte address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Zero address (0x0000...0000)
    pub const ZERO: Address = Address([0u8; 20]);

    /// Character length of a prefixed address string
    const STR_LEN: usize = 2 + 2 * Self::LEN;

    /// Character length of a prefixed 32-byte word
    const WORD_STR_LEN: usize = 2 + 2 * H256::LEN;

    /// Create address from bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create address from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, PrimitiveError> {
        if slice.len() != Self::LEN {
            return Err(PrimitiveError::InvalidAddressLength(slice.len()));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Ok(Address(bytes))
    }

    /// Parse address from hex string (with or without 0x prefix)
    pub fn parse(s: &str) -> Result<Self, PrimitiveError> {
        Self::from_slice(&codec::decode(s)?)
    }

    /// Parse an address, substituting [`Address::ZERO`] for anything that is
    /// not a well-formed `0x` + 40 digit string.
    ///
    /// Nodes return an empty string or `null` for fields such as a receipt's
    /// `contractAddress` when nothing was created.
    pub fn parse_or_zero(s: &str) -> Self {
        if s.len() != Self::STR_LEN {
            return Self::ZERO;
        }
        Self::parse(s).unwrap_or(Self::ZERO)
    }

    /// Extract the address right-aligned in a 32-byte word (`0x` + 64 digits),
    /// as found in event topics and ABI head words.
    pub fn from_padded_word(s: &str) -> Result<Self, PrimitiveError> {
        let bytes = codec::decode(s)?;
        if s.len() != Self::WORD_STR_LEN || bytes.len() != H256::LEN {
            return Err(PrimitiveError::InvalidByteLength {
                expected: H256::LEN,
                got: bytes.len(),
            });
        }
        Self::from_slice(&bytes[H256::LEN - Self::LEN..])
    }

    /// Left-pad to a 32-byte word
    pub fn to_padded_word(&self) -> H256 {
        let mut word = [0u8; 32];
        word[H256::LEN - Self::LEN..].copy_from_slice(&self.0);
        H256::from_bytes(word)
    }

    /// Get as byte slice
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// First 8 characters followed by `...`, e.g. `0x742d35...`
    pub fn short_form(&self) -> String {
        let mut s = self.to_hex();
        s.truncate(8);
        s.push_str("...");
        s
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Address {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Address::parse(&s).map_err(de::Error::custom)
        }
    }
}
