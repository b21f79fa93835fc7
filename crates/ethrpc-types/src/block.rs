//! Blocks, with either transaction hashes or full transactions

use ethrpc_primitives::{Address, BigUint, HexString};
use serde::Deserialize;
use serde_json::Value;

use crate::decode::{field, field_list, nullable};
use crate::transaction::{RawTransaction, Transaction};
use crate::DecodeError;

/// Block record as returned by `eth_getBlockBy*`.
///
/// `T` is `String` when transactions are returned as hashes and
/// [`RawTransaction`] when they are returned in full.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock<T> {
    #[serde(default, deserialize_with = "nullable")]
    pub number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub parent_hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub nonce: String,
    #[serde(default, deserialize_with = "nullable")]
    pub sha3_uncles: String,
    #[serde(default, deserialize_with = "nullable")]
    pub logs_bloom: String,
    #[serde(default, deserialize_with = "nullable")]
    pub transactions_root: String,
    #[serde(default, deserialize_with = "nullable")]
    pub state_root: String,
    #[serde(default, deserialize_with = "nullable")]
    pub receipts_root: String,
    #[serde(default, deserialize_with = "nullable")]
    pub miner: String,
    #[serde(default, deserialize_with = "nullable")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "nullable")]
    pub total_difficulty: String,
    #[serde(default, deserialize_with = "nullable")]
    pub extra_data: String,
    #[serde(default, deserialize_with = "nullable")]
    pub size: String,
    #[serde(default, deserialize_with = "nullable")]
    pub gas_limit: String,
    #[serde(default, deserialize_with = "nullable")]
    pub gas_used: String,
    #[serde(default, deserialize_with = "nullable")]
    pub timestamp: String,
    #[serde(default = "Vec::new")]
    pub transactions: Vec<T>,
    #[serde(default)]
    pub uncles: Vec<String>,
}

/// Transaction list of a block
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockTransactions {
    /// Transaction hashes only
    Hashes(Vec<HexString>),
    /// Full transaction objects
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    /// Number of transactions
    pub fn len(&self) -> usize {
        match self {
            BlockTransactions::Hashes(h) => h.len(),
            BlockTransactions::Full(t) => t.len(),
        }
    }

    /// True if the block has no transactions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transaction hashes, in block order
    pub fn hashes(&self) -> Vec<HexString> {
        match self {
            BlockTransactions::Hashes(h) => h.clone(),
            BlockTransactions::Full(t) => t.iter().map(|tx| tx.hash.clone()).collect(),
        }
    }

    /// Full transactions, if the block was fetched with them
    pub fn full(&self) -> Option<&[Transaction]> {
        match self {
            BlockTransactions::Hashes(_) => None,
            BlockTransactions::Full(t) => Some(t),
        }
    }
}

/// Entry type of a raw block's `transactions` list
pub trait BlockEntry: Sized {
    /// Decode the list into [`BlockTransactions`]
    fn assemble(entries: &[Self]) -> Result<BlockTransactions, DecodeError>;
}

impl BlockEntry for String {
    fn assemble(entries: &[Self]) -> Result<BlockTransactions, DecodeError> {
        field_list("transactions", entries).map(BlockTransactions::Hashes)
    }
}

impl BlockEntry for RawTransaction {
    fn assemble(entries: &[Self]) -> Result<BlockTransactions, DecodeError> {
        entries
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                Transaction::from_raw(raw).map_err(|e| e.within(&format!("transactions[{}]", i)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(BlockTransactions::Full)
    }
}

/// Decoded block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Block number
    pub number: u64,
    /// Block hash
    pub hash: HexString,
    /// Parent hash
    pub parent_hash: HexString,
    /// Proof-of-work nonce
    pub nonce: HexString,
    /// Uncles hash
    pub sha3_uncles: HexString,
    /// Logs bloom filter
    pub logs_bloom: HexString,
    /// Transactions trie root
    pub transactions_root: HexString,
    /// State trie root
    pub state_root: HexString,
    /// Receipts trie root
    pub receipts_root: HexString,
    /// Beneficiary
    pub miner: Address,
    /// Difficulty
    pub difficulty: BigUint,
    /// Total chain difficulty up to this block
    pub total_difficulty: BigUint,
    /// Extra data
    pub extra_data: HexString,
    /// Size in bytes
    pub size: u64,
    /// Gas limit
    pub gas_limit: BigUint,
    /// Gas used
    pub gas_used: BigUint,
    /// Unix timestamp
    pub timestamp: u64,
    /// Transactions
    pub transactions: BlockTransactions,
    /// Uncle hashes
    pub uncles: Vec<HexString>,
}

impl Block {
    /// Assemble from a wire record of either shape
    pub fn from_raw<T: BlockEntry>(raw: &RawBlock<T>) -> Result<Self, DecodeError> {
        Ok(Block {
            number: field("number", &raw.number)?,
            hash: field("hash", &raw.hash)?,
            parent_hash: field("parentHash", &raw.parent_hash)?,
            nonce: field("nonce", &raw.nonce)?,
            sha3_uncles: field("sha3Uncles", &raw.sha3_uncles)?,
            logs_bloom: field("logsBloom", &raw.logs_bloom)?,
            transactions_root: field("transactionsRoot", &raw.transactions_root)?,
            state_root: field("stateRoot", &raw.state_root)?,
            receipts_root: field("receiptsRoot", &raw.receipts_root)?,
            miner: field("miner", &raw.miner)?,
            difficulty: field("difficulty", &raw.difficulty)?,
            total_difficulty: field("totalDifficulty", &raw.total_difficulty)?,
            extra_data: field("extraData", &raw.extra_data)?,
            size: field("size", &raw.size)?,
            gas_limit: field("gasLimit", &raw.gas_limit)?,
            gas_used: field("gasUsed", &raw.gas_used)?,
            timestamp: field("timestamp", &raw.timestamp)?,
            transactions: T::assemble(&raw.transactions)?,
            uncles: field_list("uncles", &raw.uncles)?,
        })
    }

    /// Assemble from a JSON-RPC result object.
    ///
    /// `full` must match the flag the block was requested with.
    pub fn from_value(value: Value, full: bool) -> Result<Self, DecodeError> {
        if full {
            let raw: RawBlock<RawTransaction> = serde_json::from_value(value)?;
            Self::from_raw(&raw)
        } else {
            let raw: RawBlock<String> = serde_json::from_value(value)?;
            Self::from_raw(&raw)
        }
    }
}
