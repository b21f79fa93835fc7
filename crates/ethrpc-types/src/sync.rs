//! Node sync status

use serde::Deserialize;
use serde_json::Value;

use crate::decode::{field, nullable};
use crate::DecodeError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSyncProgress {
    #[serde(default, deserialize_with = "nullable")]
    starting_block: String,
    #[serde(default, deserialize_with = "nullable")]
    current_block: String,
    #[serde(default, deserialize_with = "nullable")]
    highest_block: String,
}

/// Result of `eth_syncing`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    /// Node is caught up
    NotSyncing,
    /// Node is importing blocks
    Syncing {
        /// Block the import started at
        starting_block: u64,
        /// Current block
        current_block: u64,
        /// Estimated highest block
        highest_block: u64,
    },
}

impl SyncStatus {
    /// Decode from the JSON-RPC result, which is `false` or a progress object
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        if let Value::Bool(_) = value {
            return Ok(SyncStatus::NotSyncing);
        }
        let raw: RawSyncProgress = serde_json::from_value(value)?;
        Ok(SyncStatus::Syncing {
            starting_block: field("startingBlock", &raw.starting_block)?,
            current_block: field("currentBlock", &raw.current_block)?,
            highest_block: field("highestBlock", &raw.highest_block)?,
        })
    }

    /// True while importing blocks
    pub fn is_syncing(&self) -> bool {
        matches!(self, SyncStatus::Syncing { .. })
    }
}
