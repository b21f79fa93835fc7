//! Field-level decoding shared by every wire record

use ethrpc_primitives::{codec, Address, BigUint, EtherValue, HexString, PrimitiveError, H256};
use serde::{Deserialize, Deserializer};

use crate::DecodeError;

/// A domain value decodable from a single hex wire string
pub trait FromWire: Sized {
    /// Decode from the raw string
    fn from_wire(raw: &str) -> Result<Self, PrimitiveError>;
}

impl FromWire for HexString {
    fn from_wire(raw: &str) -> Result<Self, PrimitiveError> {
        HexString::parse(raw)
    }
}

impl FromWire for u64 {
    fn from_wire(raw: &str) -> Result<Self, PrimitiveError> {
        codec::decode(raw).map(|bytes| codec::to_u64(&bytes))
    }
}

impl FromWire for BigUint {
    fn from_wire(raw: &str) -> Result<Self, PrimitiveError> {
        codec::decode(raw).map(|bytes| codec::to_big_integer(&bytes))
    }
}

impl FromWire for EtherValue {
    fn from_wire(raw: &str) -> Result<Self, PrimitiveError> {
        EtherValue::from_hex(raw)
    }
}

impl FromWire for Address {
    fn from_wire(raw: &str) -> Result<Self, PrimitiveError> {
        Address::parse(raw)
    }
}

impl FromWire for H256 {
    fn from_wire(raw: &str) -> Result<Self, PrimitiveError> {
        H256::from_hex(raw)
    }
}

/// Decode `raw` as `T`, naming `field` on failure
pub fn field<T: FromWire>(field: &str, raw: &str) -> Result<T, DecodeError> {
    T::from_wire(raw).map_err(|e| DecodeError::field(field, e))
}

/// Decode every entry of a list field, naming `field[i]` on failure
pub fn field_list<T: FromWire>(field: &str, raw: &[String]) -> Result<Vec<T>, DecodeError> {
    raw.iter()
        .enumerate()
        .map(|(i, s)| {
            T::from_wire(s).map_err(|e| DecodeError::field(format!("{}[{}]", field, i), e))
        })
        .collect()
}

/// Address that some nodes leave empty: empty means zero, anything else must parse
pub(crate) fn optional_address(name: &str, raw: &str) -> Result<Address, DecodeError> {
    if raw.is_empty() {
        Ok(Address::ZERO)
    } else {
        field(name, raw)
    }
}

/// Deserialize a string field that may be `null`, mapping `null` to `""`
pub(crate) fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_decodes_quantity() {
        let gas: u64 = field("gas", "0x5208").unwrap();
        assert_eq!(gas, 21000);
    }

    #[test]
    fn test_field_names_failure() {
        let err = field::<u64>("gas", "0xzz").unwrap_err();
        assert_eq!(err.field_name(), Some("gas"));
    }

    #[test]
    fn test_field_list_names_index() {
        let raw = vec!["0x01".to_string(), "bad!".to_string()];
        let err = field_list::<HexString>("uncles", &raw).unwrap_err();
        assert_eq!(err.field_name(), Some("uncles[1]"));
    }

    #[test]
    fn test_empty_quantity_is_zero() {
        assert_eq!(field::<u64>("nonce", "").unwrap(), 0);
        assert_eq!(field::<BigUint>("difficulty", "0x").unwrap(), BigUint::from(0u32));
    }

    #[test]
    fn test_optional_address() {
        assert!(optional_address("from", "").unwrap().is_zero());
        assert!(optional_address("from", "0x1234").is_err());
    }
}
