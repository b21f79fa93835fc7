//! Transaction receipts

use ethrpc_primitives::{Address, EtherValue, HexString};
use serde::Deserialize;
use serde_json::Value;

use crate::decode::{field, nullable, optional_address};
use crate::log::{assemble_logs, Log, RawLog};
use crate::DecodeError;

/// Receipt record as returned by `eth_getTransactionReceipt`.
///
/// Fields mirror the JSON-RPC object; `null` reads as an empty string.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    #[serde(default, deserialize_with = "nullable")]
    pub transaction_hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub transaction_index: String,
    #[serde(default, deserialize_with = "nullable")]
    pub block_number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub block_hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub from: String,
    #[serde(default, deserialize_with = "nullable")]
    pub to: String,
    #[serde(default, deserialize_with = "nullable")]
    pub cumulative_gas_used: String,
    #[serde(default, deserialize_with = "nullable")]
    pub gas_used: String,
    #[serde(default, deserialize_with = "nullable")]
    pub contract_address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub logs_bloom: String,
    #[serde(default)]
    pub logs: Vec<RawLog>,
}

/// Decoded transaction receipt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Transaction hash
    pub transaction_hash: HexString,
    /// Position in block
    pub transaction_index: u64,
    /// Block number
    pub block_number: u64,
    /// Block hash
    pub block_hash: HexString,
    /// Sender, zero if the node omits it
    pub from: Address,
    /// Recipient, zero if omitted or contract creation
    pub to: Address,
    /// Gas used by the block up to and including this transaction
    pub cumulative_gas_used: EtherValue,
    /// Gas used by this transaction
    pub gas_used: EtherValue,
    /// Created contract, zero if none
    pub contract_address: Address,
    /// `1` on success, `0` on failure
    pub status: u64,
    /// Logs bloom filter
    pub logs_bloom: HexString,
    /// Emitted logs
    pub logs: Vec<Log>,
}

impl Receipt {
    /// Assemble from a wire record
    pub fn from_raw(raw: &RawReceipt) -> Result<Self, DecodeError> {
        Ok(Receipt {
            transaction_hash: field("transactionHash", &raw.transaction_hash)?,
            transaction_index: field("transactionIndex", &raw.transaction_index)?,
            block_number: field("blockNumber", &raw.block_number)?,
            block_hash: field("blockHash", &raw.block_hash)?,
            from: optional_address("from", &raw.from)?,
            to: optional_address("to", &raw.to)?,
            cumulative_gas_used: field("cumulativeGasUsed", &raw.cumulative_gas_used)?,
            gas_used: field("gasUsed", &raw.gas_used)?,
            contract_address: Address::parse_or_zero(&raw.contract_address),
            status: field("status", &raw.status)?,
            logs_bloom: field("logsBloom", &raw.logs_bloom)?,
            logs: assemble_logs("logs", &raw.logs)?,
        })
    }

    /// Assemble from a JSON-RPC result object
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let raw: RawReceipt = serde_json::from_value(value)?;
        Self::from_raw(&raw)
    }

    /// True if execution succeeded
    pub fn is_success(&self) -> bool {
        self.status == 1
    }
}

impl TryFrom<&RawReceipt> for Receipt {
    type Error = DecodeError;

    fn try_from(raw: &RawReceipt) -> Result<Self, Self::Error> {
        Receipt::from_raw(raw)
    }
}
