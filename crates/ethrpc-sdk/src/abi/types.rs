//! ABI type definitions

use std::fmt;

use ethrpc_primitives::Address;
use primitive_types::U256;

use crate::SdkError;

/// Solidity parameter types understood by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Address
    Address,
    /// Boolean
    Bool,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// Dynamic bytes
    Bytes,
    /// UTF-8 string
    String,
}

impl ParamType {
    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        matches!(self, ParamType::Bytes | ParamType::String)
    }

    /// Parse a type name (e.g., "uint256", "address")
    pub fn parse(s: &str) -> Result<Self, SdkError> {
        let s = s.trim();
        match s {
            "address" => return Ok(ParamType::Address),
            "bool" => return Ok(ParamType::Bool),
            "string" => return Ok(ParamType::String),
            "bytes" => return Ok(ParamType::Bytes),
            _ => {}
        }

        if let Some(rest) = s.strip_prefix("uint") {
            let bits: usize = if rest.is_empty() {
                256
            } else {
                rest.parse()
                    .map_err(|_| SdkError::InvalidAbiType(format!("invalid uint size: {}", rest)))?
            };
            if bits == 0 || bits > 256 || bits % 8 != 0 {
                return Err(SdkError::InvalidAbiType(format!("invalid uint size: {}", bits)));
            }
            return Ok(ParamType::Uint(bits));
        }

        if let Some(rest) = s.strip_prefix("bytes") {
            let size: usize = rest
                .parse()
                .map_err(|_| SdkError::InvalidAbiType(format!("invalid bytes size: {}", rest)))?;
            if size == 0 || size > 32 {
                return Err(SdkError::InvalidAbiType(format!("invalid bytes size: {}", size)));
            }
            return Ok(ParamType::FixedBytes(size));
        }

        Err(SdkError::InvalidAbiType(format!("unsupported type: {}", s)))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::String => f.write_str("string"),
        }
    }
}

/// Decoded or to-be-encoded ABI value.
///
/// Unsigned integers land in the narrowest variant that holds their declared
/// width: up to 32 bits in [`Token::Int`], 64 bits in [`Token::U64`], wider in
/// [`Token::Uint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Address (20 bytes)
    Address(Address),
    /// Boolean
    Bool(bool),
    /// Small integer (uint8 to uint32)
    Int(i64),
    /// 64-bit unsigned integer
    U64(u64),
    /// Wide unsigned integer (uint72 to uint256)
    Uint(U256),
    /// Fixed-size bytes (1-32)
    FixedBytes(Vec<u8>),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// UTF-8 string
    String(String),
}

impl Token {
    /// Get the type of this token
    pub fn type_of(&self) -> ParamType {
        match self {
            Token::Address(_) => ParamType::Address,
            Token::Bool(_) => ParamType::Bool,
            Token::Int(_) => ParamType::Uint(32),
            Token::U64(_) => ParamType::Uint(64),
            Token::Uint(_) => ParamType::Uint(256),
            Token::FixedBytes(b) => ParamType::FixedBytes(b.len()),
            Token::Bytes(_) => ParamType::Bytes,
            Token::String(_) => ParamType::String,
        }
    }

    /// Address value, if this is an address token
    pub fn as_address(&self) -> Option<Address> {
        match self {
            Token::Address(a) => Some(*a),
            _ => None,
        }
    }

    /// Boolean value, if this is a bool token
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Token::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value as U256, for any integer token
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Token::Int(v) if *v >= 0 => Some(U256::from(*v as u64)),
            Token::U64(v) => Some(U256::from(*v)),
            Token::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// String value, if this is a string token
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::String(s) => Some(s),
            _ => None,
        }
    }

    /// Byte value, for bytes and fixed bytes tokens
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Token::Bytes(b) | Token::FixedBytes(b) => Some(b),
            _ => None,
        }
    }
}
