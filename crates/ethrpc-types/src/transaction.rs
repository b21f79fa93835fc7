//! Transactions

use ethrpc_primitives::{Address, EtherValue, HexString};
use serde::Deserialize;
use serde_json::Value;

use crate::decode::{field, nullable, optional_address};
use crate::DecodeError;

/// Transaction record as returned by `eth_getTransactionBy*` and full blocks.
///
/// Fields mirror the JSON-RPC object; `null` reads as an empty string.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(default, deserialize_with = "nullable")]
    pub hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub block_hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub block_number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub from: String,
    #[serde(default, deserialize_with = "nullable")]
    pub gas: String,
    #[serde(default, deserialize_with = "nullable")]
    pub gas_price: String,
    #[serde(default, deserialize_with = "nullable")]
    pub input: String,
    #[serde(default, deserialize_with = "nullable")]
    pub nonce: String,
    #[serde(default, deserialize_with = "nullable")]
    pub to: String,
    #[serde(default, deserialize_with = "nullable")]
    pub transaction_index: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: String,
    #[serde(default, deserialize_with = "nullable")]
    pub v: String,
    #[serde(default, deserialize_with = "nullable")]
    pub r: String,
    #[serde(default, deserialize_with = "nullable")]
    pub s: String,
}

/// Decoded transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction hash
    pub hash: HexString,
    /// Containing block hash (empty while pending)
    pub block_hash: HexString,
    /// Containing block number (0 while pending)
    pub block_number: u64,
    /// Sender, zero if absent
    pub from: Address,
    /// Gas limit
    pub gas: u64,
    /// Gas price in wei
    pub gas_price: EtherValue,
    /// Call data
    pub input: HexString,
    /// Sender nonce
    pub nonce: u64,
    /// Recipient, zero for contract creation
    pub to: Address,
    /// Position in block
    pub transaction_index: u64,
    /// Transferred value in wei
    pub value: EtherValue,
    /// Signature V
    pub v: HexString,
    /// Signature R
    pub r: HexString,
    /// Signature S
    pub s: HexString,
}

impl Transaction {
    /// Assemble from a wire record
    pub fn from_raw(raw: &RawTransaction) -> Result<Self, DecodeError> {
        Ok(Transaction {
            hash: field("hash", &raw.hash)?,
            block_hash: field("blockHash", &raw.block_hash)?,
            block_number: field("blockNumber", &raw.block_number)?,
            from: field("from", &raw.from)?,
            gas: field("gas", &raw.gas)?,
            gas_price: field("gasPrice", &raw.gas_price)?,
            input: field("input", &raw.input)?,
            nonce: field("nonce", &raw.nonce)?,
            to: optional_address("to", &raw.to)?,
            transaction_index: field("transactionIndex", &raw.transaction_index)?,
            value: field("value", &raw.value)?,
            v: field("v", &raw.v)?,
            r: field("r", &raw.r)?,
            s: field("s", &raw.s)?,
        })
    }

    /// Assemble from a JSON-RPC result object
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let raw: RawTransaction = serde_json::from_value(value)?;
        Self::from_raw(&raw)
    }

    /// True if this transaction deploys a contract
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_zero()
    }
}

impl TryFrom<&RawTransaction> for Transaction {
    type Error = DecodeError;

    fn try_from(raw: &RawTransaction) -> Result<Self, Self::Error> {
        Transaction::from_raw(raw)
    }
}
