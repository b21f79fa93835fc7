//! Error types for domain object assembly

use ethrpc_primitives::PrimitiveError;
use thiserror::Error;

/// Domain object assembly error
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A single field failed to decode
    #[error("failed to decode field `{field}`: {source}")]
    Field {
        /// Field path, e.g. `gasPrice` or `transactions[2].gas`
        field: String,
        /// Underlying decode failure
        source: PrimitiveError,
    },

    /// Transaction and receipt refer to different hashes
    #[error("transaction {transaction} does not match receipt {receipt}")]
    TransactionReceiptMismatch {
        /// Transaction hash
        transaction: String,
        /// Receipt transaction hash
        receipt: String,
    },

    /// Result payload is not shaped like the expected wire record
    #[error("malformed wire object: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Wrap a primitive failure with the name of the field it came from
    pub fn field(name: impl Into<String>, source: PrimitiveError) -> Self {
        DecodeError::Field {
            field: name.into(),
            source,
        }
    }

    /// Prefix the field path, for failures inside nested objects
    pub(crate) fn within(self, parent: &str) -> Self {
        match self {
            DecodeError::Field { field, source } => DecodeError::Field {
                field: format!("{}.{}", parent, field),
                source,
            },
            other => other,
        }
    }

    /// Name of the failing field, if this is a field failure
    pub fn field_name(&self) -> Option<&str> {
        match self {
            DecodeError::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = DecodeError::field("gas", PrimitiveError::MalformedHex("\"0xzz\"".into()));
        assert_eq!(err.field_name(), Some("gas"));
        assert!(err.to_string().contains("`gas`"));
    }

    #[test]
    fn test_within_prefixes_path() {
        let err = DecodeError::field("gas", PrimitiveError::MalformedHex("x".into()))
            .within("transactions[2]");
        assert_eq!(err.field_name(), Some("transactions[2].gas"));
    }
}
