//! Event logs

use ethrpc_primitives::{Address, HexString, H256};
use serde::Deserialize;
use serde_json::Value;

use crate::decode::{field, field_list, nullable};
use crate::DecodeError;

/// Log record as returned by `eth_getLogs` and inside receipts.
///
/// Fields mirror the JSON-RPC object; `null` reads as an empty string.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub data: String,
    #[serde(default, deserialize_with = "nullable")]
    pub block_number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub transaction_hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub transaction_index: String,
    #[serde(default, deserialize_with = "nullable")]
    pub block_hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub log_index: String,
    #[serde(default)]
    pub removed: bool,
}

/// Decoded event log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Log {
    /// Emitting contract
    pub address: Address,
    /// Indexed topics; topic 0 is the event signature hash
    pub topics: Vec<H256>,
    /// Non-indexed ABI-encoded data
    pub data: HexString,
    /// Block number (0 for pending logs)
    pub block_number: u64,
    /// Transaction hash
    pub transaction_hash: HexString,
    /// Transaction position in block
    pub transaction_index: u64,
    /// Block hash
    pub block_hash: HexString,
    /// Log position in block
    pub log_index: u64,
    /// True if removed by a chain reorganization
    pub removed: bool,
}

impl Log {
    /// Assemble from a wire record
    pub fn from_raw(raw: &RawLog) -> Result<Self, DecodeError> {
        Ok(Log {
            address: field("address", &raw.address)?,
            topics: field_list("topics", &raw.topics)?,
            data: field("data", &raw.data)?,
            block_number: field("blockNumber", &raw.block_number)?,
            transaction_hash: field("transactionHash", &raw.transaction_hash)?,
            transaction_index: field("transactionIndex", &raw.transaction_index)?,
            block_hash: field("blockHash", &raw.block_hash)?,
            log_index: field("logIndex", &raw.log_index)?,
            removed: raw.removed,
        })
    }

    /// Assemble from a JSON-RPC result object
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let raw: RawLog = serde_json::from_value(value)?;
        Self::from_raw(&raw)
    }

    /// Event signature topic
    pub fn topic0(&self) -> Option<&H256> {
        self.topics.first()
    }
}

impl TryFrom<&RawLog> for Log {
    type Error = DecodeError;

    fn try_from(raw: &RawLog) -> Result<Self, Self::Error> {
        Log::from_raw(raw)
    }
}

/// Assemble a list of logs, naming `{parent}[i].{field}` on failure
pub(crate) fn assemble_logs(parent: &str, raw: &[RawLog]) -> Result<Vec<Log>, DecodeError> {
    raw.iter()
        .enumerate()
        .map(|(i, log)| Log::from_raw(log).map_err(|e| e.within(&format!("{}[{}]", parent, i))))
        .collect()
}
