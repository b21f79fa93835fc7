//! Combined transaction and receipt view

use ethrpc_primitives::{Address, EtherValue, HexString};

use crate::{DecodeError, Log, Receipt, Transaction};

/// A transaction together with the outcome recorded in its receipt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionWithReceipt {
    /// Transaction hash
    pub hash: HexString,
    /// Block hash
    pub block_hash: HexString,
    /// Block number
    pub block_number: u64,
    /// Position in block
    pub transaction_index: u64,
    /// Sender
    pub from: Address,
    /// Recipient
    pub to: Address,
    /// Gas limit
    pub gas: u64,
    /// Gas price in wei
    pub gas_price: EtherValue,
    /// Call data
    pub input: HexString,
    /// Sender nonce
    pub nonce: u64,
    /// Transferred value in wei
    pub value: EtherValue,
    /// Signature V
    pub v: HexString,
    /// Signature R
    pub r: HexString,
    /// Signature S
    pub s: HexString,
    /// Cumulative block gas used
    pub cumulative_gas_used: EtherValue,
    /// Gas used
    pub gas_used: EtherValue,
    /// Created contract, zero if none
    pub contract_address: Address,
    /// Execution status
    pub status: u64,
    /// Logs bloom filter
    pub logs_bloom: HexString,
    /// Emitted logs
    pub logs: Vec<Log>,
}

impl TransactionWithReceipt {
    /// Merge a transaction with its receipt.
    ///
    /// Fails with [`DecodeError::TransactionReceiptMismatch`] unless both carry
    /// the same transaction hash. Block position comes from the receipt.
    pub fn merge(transaction: Transaction, receipt: Receipt) -> Result<Self, DecodeError> {
        if transaction.hash != receipt.transaction_hash {
            return Err(DecodeError::TransactionReceiptMismatch {
                transaction: transaction.hash.canonical(),
                receipt: receipt.transaction_hash.canonical(),
            });
        }

        Ok(TransactionWithReceipt {
            hash: transaction.hash,
            block_hash: receipt.block_hash,
            block_number: receipt.block_number,
            transaction_index: receipt.transaction_index,
            from: transaction.from,
            to: transaction.to,
            gas: transaction.gas,
            gas_price: transaction.gas_price,
            input: transaction.input,
            nonce: transaction.nonce,
            value: transaction.value,
            v: transaction.v,
            r: transaction.r,
            s: transaction.s,
            cumulative_gas_used: receipt.cumulative_gas_used,
            gas_used: receipt.gas_used,
            contract_address: receipt.contract_address,
            status: receipt.status,
            logs_bloom: receipt.logs_bloom,
            logs: receipt.logs,
        })
    }

    /// True if execution succeeded
    pub fn is_success(&self) -> bool {
        self.status == 1
    }
}
