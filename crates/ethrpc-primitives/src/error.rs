//! Common error types for primitives

use thiserror::Error;

/// Primitive decoding error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// Value expected to be hex contains non-hex characters
    #[error("malformed hex string: {0}")]
    MalformedHex(String),

    /// Address did not decode to exactly 20 bytes
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidAddressLength(usize),

    /// Fixed-width value decoded to the wrong number of bytes
    #[error("invalid byte length: expected {expected} bytes, got {got}")]
    InvalidByteLength {
        /// Required length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Decimal string could not be parsed as an integer
    #[error("invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    /// Neither a block tag nor a decimal block number
    #[error("unrecognized quantity: {0}")]
    UnrecognizedQuantity(String),
}
