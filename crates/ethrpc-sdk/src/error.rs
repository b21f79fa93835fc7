//! SDK error types

use ethrpc_primitives::PrimitiveError;
use ethrpc_types::DecodeError;
use thiserror::Error;

/// SDK error type
#[derive(Debug, Error)]
pub enum SdkError {
    /// Transport/network error
    #[error("Transport error: {0}")]
    Transport(String),

    /// RPC error from node
    #[error("RPC error: {code} - {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Node answered `null` where a value was required
    #[error("Empty result for {0}")]
    EmptyResult(String),

    /// Result has a JSON shape the method never returns
    #[error("Unexpected result for {method}: {value}")]
    UnexpectedResult {
        /// RPC method
        method: String,
        /// Offending result
        value: String,
    },

    /// ABI payload shorter than its parameter list requires
    #[error("Truncated ABI input: need {required} bytes, have {actual}")]
    TruncatedAbiInput {
        /// Bytes required
        required: usize,
        /// Bytes available
        actual: usize,
    },

    /// Unsupported or malformed ABI type name or signature
    #[error("Invalid ABI type: {0}")]
    InvalidAbiType(String),

    /// ABI encoding error
    #[error("ABI encoding error: {0}")]
    AbiEncode(String),

    /// ABI decoding error
    #[error("ABI decoding error: {0}")]
    AbiDecode(String),

    /// Log or receipt does not describe an ERC-20 transfer
    #[error("Not an ERC-20 transfer: {0}")]
    NotATransfer(String),

    /// Hex or value decoding error
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    /// Domain object assembly error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid client configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(e: toml::de::Error) -> Self {
        SdkError::Config(e.to_string())
    }
}
