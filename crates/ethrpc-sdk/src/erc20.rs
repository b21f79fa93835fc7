//! ERC-20 token helpers: balances and `Transfer` events

use std::fmt;

use ethrpc_primitives::{Address, EtherValue, HexString, Quantity, H256};
use ethrpc_types::{Log, TransactionWithReceipt};
use tracing::{debug, info};

use crate::abi::event_topic;
use crate::types::{EthCallParams, FilterParams, FilterTopicBuilder};
use crate::{EthClient, SdkError};

/// Canonical `Transfer` event signature
pub const TRANSFER_EVENT: &str = "Transfer(address,address,uint256)";

/// Topic 0 of every ERC-20 `Transfer` log
pub const ERC20_TRANSFER_TOPIC: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

/// [`ERC20_TRANSFER_TOPIC`] as a word
pub fn transfer_topic() -> H256 {
    event_topic(TRANSFER_EVENT)
}

/// A decoded `Transfer(from, to, value)` event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Erc20Transfer {
    /// Transaction that emitted the event
    pub transaction_hash: HexString,
    /// Block number
    pub block_number: u64,
    /// Block timestamp, 0 when decoded from a bare log
    pub timestamp: u64,
    /// Sender
    pub from: Address,
    /// Receiver
    pub to: Address,
    /// Amount in the token's smallest unit
    pub value: EtherValue,
}

impl Erc20Transfer {
    /// Decode a `Transfer` log
    ///
    /// The log must have exactly three topics with the transfer signature
    /// first; sender and receiver are read from topics 1 and 2, the amount
    /// from the data.
    pub fn from_log(log: &Log) -> Result<Self, SdkError> {
        let (from, to) = transfer_parties(log).ok_or_else(|| {
            SdkError::NotATransfer(format!(
                "log {} of {} has {} topics",
                log.log_index,
                log.transaction_hash,
                log.topics.len()
            ))
        })?;

        Ok(Erc20Transfer {
            transaction_hash: log.transaction_hash.clone(),
            block_number: log.block_number,
            timestamp: 0,
            from: Address::from_padded_word(&from.to_hex())?,
            to: Address::from_padded_word(&to.to_hex())?,
            value: EtherValue::new(log.data.to_big_uint()),
        })
    }

    /// Decode the first `Transfer` log of a mined transaction
    pub fn from_receipt(merged: &TransactionWithReceipt, timestamp: u64) -> Result<Self, SdkError> {
        let log = merged
            .logs
            .iter()
            .find(|log| transfer_parties(log).is_some())
            .ok_or_else(|| {
                SdkError::NotATransfer(format!(
                    "no Transfer log in {} (block {})",
                    merged.hash, merged.block_number
                ))
            })?;

        let mut transfer = Self::from_log(log)?;
        transfer.transaction_hash = merged.hash.clone();
        transfer.block_number = merged.block_number;
        transfer.timestamp = timestamp;
        Ok(transfer)
    }

    /// One-line description, e.g. `(6139707) 0xa7d9dd... -> 0xf02c1c... [1.5]`
    pub fn summary(&self) -> String {
        format!(
            "({}) {} -> {} [{}]",
            self.block_number,
            self.from.short_form(),
            self.to.short_form(),
            self.value
        )
    }
}

impl fmt::Display for Erc20Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

fn transfer_parties(log: &Log) -> Option<(&H256, &H256)> {
    match log.topics.as_slice() {
        [signature, from, to] if *signature == transfer_topic() => Some((from, to)),
        _ => None,
    }
}

/// Parameters of a `Transfer` log search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferQuery {
    /// Token contract
    pub token: Address,
    /// First block (inclusive)
    pub from_block: Quantity,
    /// Last block (inclusive)
    pub to_block: Quantity,
    /// Only transfers from this address
    pub sender: Option<Address>,
    /// Only transfers to this address
    pub receiver: Option<Address>,
}

impl TransferQuery {
    /// All transfers of `token` in a block range
    pub fn new(
        token: Address,
        from_block: impl Into<Quantity>,
        to_block: impl Into<Quantity>,
    ) -> Self {
        Self {
            token,
            from_block: from_block.into(),
            to_block: to_block.into(),
            sender: None,
            receiver: None,
        }
    }

    /// All transfers of `token` in one block
    pub fn in_block(token: Address, block: u64) -> Self {
        Self::new(token, block, block)
    }

    /// Restrict to a sender
    pub fn sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Restrict to a receiver
    pub fn receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Log filter: transfer signature in slot 0, sender in slot 1, receiver in slot 2
    pub fn to_filter(&self) -> Result<FilterParams, SdkError> {
        let mut topics = FilterTopicBuilder::new().add_topic(0, transfer_topic())?;
        if let Some(sender) = &self.sender {
            topics = topics.add_address(1, sender)?;
        }
        if let Some(receiver) = &self.receiver {
            topics = topics.add_address(2, receiver)?;
        }
        Ok(FilterParams::new(
            Some(self.token),
            self.from_block,
            self.to_block,
            topics.build(),
        ))
    }
}

impl EthClient {
    /// Token balance of `owner` via `balanceOf(address)`
    pub async fn erc20_balance_of(
        &self,
        token: &Address,
        owner: &Address,
        block: Quantity,
    ) -> Result<EtherValue, SdkError> {
        let params = EthCallParams::to_contract_with_argument(
            *token,
            "balanceOf(address)",
            owner.as_bytes(),
        );
        let result = self.call(&params, block).await?;
        Ok(EtherValue::new(result.to_big_uint()))
    }

    /// Transfers matching `query`, from `eth_getLogs`
    pub async fn erc20_transfers(
        &self,
        query: &TransferQuery,
    ) -> Result<Vec<Erc20Transfer>, SdkError> {
        let logs = self.get_logs(&query.to_filter()?).await?;
        debug!(token = %query.token, logs = logs.len(), "Fetched transfer logs");
        logs.iter().map(Erc20Transfer::from_log).collect()
    }

    /// Walk blocks `start..=end` and decode the transfers of every transaction
    /// sent to `contract` that emitted logs.
    pub async fn scan_transfers_to(
        &self,
        contract: &Address,
        start: u64,
        end: u64,
    ) -> Result<Vec<Erc20Transfer>, SdkError> {
        let mut transfers = Vec::new();

        for number in start..=end {
            let block = self.get_block_by_number(Quantity::Block(number), true).await?;
            debug!(block = number, transactions = block.transactions.len(), "Scanning block");

            let Some(transactions) = block.transactions.full() else {
                continue;
            };
            for transaction in transactions.iter().filter(|tx| tx.to == *contract) {
                let merged = self.load_receipt_and_merge(transaction).await?;
                if merged.logs.is_empty() {
                    continue;
                }
                let transfer = Erc20Transfer::from_receipt(&merged, block.timestamp)?;
                info!(transfer = %transfer, "Found token transfer");
                transfers.push(transfer);
            }
        }

        Ok(transfers)
    }
}
