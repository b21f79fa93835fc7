//! EthClient - typed JSON-RPC client

use ethrpc_primitives::{codec, Address, EtherValue, HexString, Quantity, H256};
use ethrpc_types::decode::{field, field_list, FromWire};
use ethrpc_types::{Block, Log, Receipt, SyncStatus, Transaction, TransactionWithReceipt};
use serde_json::Value;
use tracing::debug;

use crate::transport::{MockTransport, Transport};
use crate::types::{EthCallParams, FilterParams};
use crate::SdkError;

#[cfg(feature = "http")]
use crate::{config::ClientConfig, transport::HttpTransport};

/// Ethereum JSON-RPC client
///
/// Every call decodes the node's answer into a domain type. A `null` result
/// (unknown block, pending receipt) is reported as [`SdkError::EmptyResult`].
pub struct EthClient {
    transport: Box<dyn Transport>,
}

impl EthClient {
    /// Create a client with HTTP transport and default settings
    #[cfg(feature = "http")]
    pub fn connect(url: &str) -> Result<Self, SdkError> {
        Self::from_config(&ClientConfig::with_url(url))
    }

    /// Create a client with HTTP transport configured from `config`
    #[cfg(feature = "http")]
    pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
        Ok(Self::with_transport(HttpTransport::from_config(config)?))
    }

    /// Create a new client with mock transport (for testing)
    pub fn new_mock() -> Self {
        Self::with_transport(MockTransport::new())
    }

    /// Create a client with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError> {
        debug!(method, params = params.len(), "RPC call");
        let value = self.transport.request_json(method, params).await?;
        if value.is_null() {
            return Err(SdkError::EmptyResult(method.to_string()));
        }
        Ok(value)
    }

    async fn request_string(&self, method: &str, params: Vec<Value>) -> Result<String, SdkError> {
        match self.request(method, params).await? {
            Value::String(s) => Ok(s),
            other => Err(unexpected(method, &other)),
        }
    }

    async fn request_bool(&self, method: &str, params: Vec<Value>) -> Result<bool, SdkError> {
        match self.request(method, params).await? {
            Value::Bool(b) => Ok(b),
            other => Err(unexpected(method, &other)),
        }
    }

    /// Single hex string result decoded as `T`
    async fn request_wire<T: FromWire>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, SdkError> {
        let raw = self.request_string(method, params).await?;
        Ok(field(method, &raw)?)
    }

    /// Array of hex strings decoded as `T`
    async fn request_wire_list<T: FromWire>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Vec<T>, SdkError> {
        let value = self.request(method, params).await?;
        let raw: Vec<String> =
            serde_json::from_value(value.clone()).map_err(|_| unexpected(method, &value))?;
        Ok(field_list(method, &raw)?)
    }

    async fn request_logs(&self, method: &str, params: Vec<Value>) -> Result<Vec<Log>, SdkError> {
        match self.request(method, params).await? {
            Value::Array(entries) => entries
                .into_iter()
                .map(|entry| Log::from_value(entry).map_err(SdkError::from))
                .collect(),
            other => Err(unexpected(method, &other)),
        }
    }

    // ==================== Node Info ====================

    /// `web3_clientVersion`
    pub async fn client_version(&self) -> Result<String, SdkError> {
        self.request_string("web3_clientVersion", vec![]).await
    }

    /// `web3_sha3`: Keccak-256 of `data`, computed by the node
    pub async fn sha3(&self, data: &[u8]) -> Result<H256, SdkError> {
        self.request_wire("web3_sha3", vec![bytes_param(data)]).await
    }

    /// `net_version`: network id
    pub async fn net_version(&self) -> Result<String, SdkError> {
        self.request_string("net_version", vec![]).await
    }

    /// `net_listening`
    pub async fn net_listening(&self) -> Result<bool, SdkError> {
        self.request_bool("net_listening", vec![]).await
    }

    /// `net_peerCount`
    pub async fn peer_count(&self) -> Result<u64, SdkError> {
        self.request_wire("net_peerCount", vec![]).await
    }

    /// `eth_protocolVersion`, as reported by the node
    pub async fn protocol_version(&self) -> Result<String, SdkError> {
        self.request_string("eth_protocolVersion", vec![]).await
    }

    /// `eth_syncing`
    pub async fn syncing(&self) -> Result<SyncStatus, SdkError> {
        let value = self.request("eth_syncing", vec![]).await?;
        Ok(SyncStatus::from_value(value)?)
    }

    // ==================== Mining ====================

    /// `eth_coinbase`
    pub async fn coinbase(&self) -> Result<Address, SdkError> {
        self.request_wire("eth_coinbase", vec![]).await
    }

    /// `eth_mining`
    pub async fn mining(&self) -> Result<bool, SdkError> {
        self.request_bool("eth_mining", vec![]).await
    }

    /// `eth_hashrate`
    pub async fn hashrate(&self) -> Result<u64, SdkError> {
        self.request_wire("eth_hashrate", vec![]).await
    }

    // ==================== Chain Info ====================

    /// `eth_gasPrice` in wei
    pub async fn gas_price(&self) -> Result<EtherValue, SdkError> {
        self.request_wire("eth_gasPrice", vec![]).await
    }

    /// `eth_blockNumber`
    pub async fn block_number(&self) -> Result<u64, SdkError> {
        self.request_wire("eth_blockNumber", vec![]).await
    }

    // ==================== Account Queries ====================

    /// `eth_accounts`
    pub async fn accounts(&self) -> Result<Vec<Address>, SdkError> {
        self.request_wire_list("eth_accounts", vec![]).await
    }

    /// `eth_getBalance` in wei
    pub async fn get_balance(
        &self,
        address: &Address,
        block: Quantity,
    ) -> Result<EtherValue, SdkError> {
        self.request_wire(
            "eth_getBalance",
            vec![Value::String(address.to_hex()), quantity_param(block)],
        )
        .await
    }

    /// `eth_getStorageAt`
    pub async fn get_storage_at(
        &self,
        address: &Address,
        position: u64,
        block: Quantity,
    ) -> Result<HexString, SdkError> {
        self.request_wire(
            "eth_getStorageAt",
            vec![
                Value::String(address.to_hex()),
                index_param(position),
                quantity_param(block),
            ],
        )
        .await
    }

    /// `eth_getTransactionCount` (account nonce)
    pub async fn get_transaction_count(
        &self,
        address: &Address,
        block: Quantity,
    ) -> Result<u64, SdkError> {
        self.request_wire(
            "eth_getTransactionCount",
            vec![Value::String(address.to_hex()), quantity_param(block)],
        )
        .await
    }

    // ==================== Block Queries ====================

    /// `eth_getBlockByHash`, with full transactions if `full`
    pub async fn get_block_by_hash(&self, hash: &HexString, full: bool) -> Result<Block, SdkError> {
        let value = self
            .request(
                "eth_getBlockByHash",
                vec![bytes_param(hash.as_bytes()), Value::Bool(full)],
            )
            .await?;
        Ok(Block::from_value(value, full)?)
    }

    /// `eth_getBlockByNumber`, with full transactions if `full`
    pub async fn get_block_by_number(
        &self,
        block: Quantity,
        full: bool,
    ) -> Result<Block, SdkError> {
        let value = self
            .request(
                "eth_getBlockByNumber",
                vec![quantity_param(block), Value::Bool(full)],
            )
            .await?;
        Ok(Block::from_value(value, full)?)
    }

    /// `eth_getBlockTransactionCountByHash`
    pub async fn get_block_transaction_count_by_hash(
        &self,
        hash: &HexString,
    ) -> Result<u64, SdkError> {
        self.request_wire(
            "eth_getBlockTransactionCountByHash",
            vec![bytes_param(hash.as_bytes())],
        )
        .await
    }

    /// `eth_getBlockTransactionCountByNumber`
    pub async fn get_block_transaction_count_by_number(
        &self,
        block: Quantity,
    ) -> Result<u64, SdkError> {
        self.request_wire(
            "eth_getBlockTransactionCountByNumber",
            vec![quantity_param(block)],
        )
        .await
    }

    // ==================== Transaction Queries ====================

    /// `eth_getTransactionByHash`
    pub async fn get_transaction_by_hash(&self, hash: &HexString) -> Result<Transaction, SdkError> {
        let value = self
            .request("eth_getTransactionByHash", vec![bytes_param(hash.as_bytes())])
            .await?;
        Ok(Transaction::from_value(value)?)
    }

    /// `eth_getTransactionByBlockHashAndIndex`
    pub async fn get_transaction_by_block_hash_and_index(
        &self,
        block_hash: &HexString,
        index: u64,
    ) -> Result<Transaction, SdkError> {
        let value = self
            .request(
                "eth_getTransactionByBlockHashAndIndex",
                vec![bytes_param(block_hash.as_bytes()), index_param(index)],
            )
            .await?;
        Ok(Transaction::from_value(value)?)
    }

    /// `eth_getTransactionByBlockNumberAndIndex`
    pub async fn get_transaction_by_block_number_and_index(
        &self,
        block: Quantity,
        index: u64,
    ) -> Result<Transaction, SdkError> {
        let value = self
            .request(
                "eth_getTransactionByBlockNumberAndIndex",
                vec![quantity_param(block), index_param(index)],
            )
            .await?;
        Ok(Transaction::from_value(value)?)
    }

    /// `eth_getTransactionReceipt`
    pub async fn get_transaction_receipt(&self, hash: &HexString) -> Result<Receipt, SdkError> {
        let value = self
            .request("eth_getTransactionReceipt", vec![bytes_param(hash.as_bytes())])
            .await?;
        Ok(Receipt::from_value(value)?)
    }

    /// Fetch the receipt of `transaction` and merge the two
    pub async fn load_receipt_and_merge(
        &self,
        transaction: &Transaction,
    ) -> Result<TransactionWithReceipt, SdkError> {
        let receipt = self.get_transaction_receipt(&transaction.hash).await?;
        Ok(TransactionWithReceipt::merge(transaction.clone(), receipt)?)
    }

    // ==================== Call ====================

    /// `eth_call`: execute a read-only call
    pub async fn call(
        &self,
        params: &EthCallParams,
        block: Quantity,
    ) -> Result<HexString, SdkError> {
        self.request_wire(
            "eth_call",
            vec![serde_json::to_value(params)?, quantity_param(block)],
        )
        .await
    }

    // ==================== Logs & Filters ====================

    /// `eth_getLogs`
    pub async fn get_logs(&self, filter: &FilterParams) -> Result<Vec<Log>, SdkError> {
        self.request_logs("eth_getLogs", vec![serde_json::to_value(filter)?])
            .await
    }

    /// `eth_newFilter`, returning the filter id exactly as the node sent it
    pub async fn new_filter(&self, filter: &FilterParams) -> Result<String, SdkError> {
        self.request_string("eth_newFilter", vec![serde_json::to_value(filter)?])
            .await
    }

    /// `eth_getFilterLogs`
    pub async fn get_filter_logs(&self, filter_id: &str) -> Result<Vec<Log>, SdkError> {
        self.request_logs("eth_getFilterLogs", vec![Value::from(filter_id)])
            .await
    }

    /// `eth_uninstallFilter`
    pub async fn uninstall_filter(&self, filter_id: &str) -> Result<bool, SdkError> {
        self.request_bool("eth_uninstallFilter", vec![Value::from(filter_id)])
            .await
    }

    // ==================== Personal ====================

    /// `personal_listAccounts`
    pub async fn personal_list_accounts(&self) -> Result<Vec<Address>, SdkError> {
        self.request_wire_list("personal_listAccounts", vec![]).await
    }

    /// `personal_newAccount`: create a key in the node's keystore
    pub async fn personal_new_account(&self, passphrase: &str) -> Result<Address, SdkError> {
        self.request_wire("personal_newAccount", vec![Value::from(passphrase)])
            .await
    }
}

// ==================== Helper Functions ====================

fn unexpected(method: &str, value: &Value) -> SdkError {
    SdkError::UnexpectedResult {
        method: method.to_string(),
        value: value.to_string(),
    }
}

fn quantity_param(block: Quantity) -> Value {
    Value::String(block.to_hex_or_tag())
}

fn index_param(index: u64) -> Value {
    Value::String(codec::encode_display(&codec::from_u64(index)))
}

/// Full-width hex with prefix; keeps every byte of hashes and payloads
fn bytes_param(bytes: &[u8]) -> Value {
    Value::String(format!("0x{}", hex::encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params() {
        assert_eq!(quantity_param(Quantity::Block(255)), json!("0xff"));
        assert_eq!(quantity_param(Quantity::PENDING), json!("pending"));
        assert_eq!(index_param(0), json!("0x0"));
        assert_eq!(index_param(16), json!("0x10"));
        assert_eq!(bytes_param(&[0u8; 2]), json!("0x0000"));
        assert_eq!(bytes_param(&[]), json!("0x"));
    }

    #[tokio::test]
    async fn test_null_result_is_empty() {
        let transport = MockTransport::new();
        transport.set_response("eth_getTransactionReceipt", Value::Null);
        let client = EthClient::with_transport(transport);

        match client.get_transaction_receipt(&HexString::from_bytes(vec![1; 32])).await {
            Err(SdkError::EmptyResult(method)) => assert_eq!(method, "eth_getTransactionReceipt"),
            other => panic!("Expected EmptyResult, got {:?}", other.map(|r| r.status)),
        }
    }

    #[tokio::test]
    async fn test_wrong_shape_is_unexpected() {
        let transport = MockTransport::new();
        transport.set_response("eth_blockNumber", json!(12));
        let client = EthClient::with_transport(transport);

        match client.block_number().await {
            Err(SdkError::UnexpectedResult { method, value }) => {
                assert_eq!(method, "eth_blockNumber");
                assert_eq!(value, "12");
            }
            other => panic!("Expected UnexpectedResult, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_hex_names_method() {
        let transport = MockTransport::new();
        transport.set_response("eth_gasPrice", json!("0xzz"));
        let client = EthClient::with_transport(transport);

        match client.gas_price().await {
            Err(SdkError::Decode(e)) => assert_eq!(e.field_name(), Some("eth_gasPrice")),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }
}
