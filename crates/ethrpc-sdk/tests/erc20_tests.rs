//! ERC-20 helper integration tests

mod common;

use common::*;
use ethrpc_sdk::erc20::{Erc20Transfer, TransferQuery, ERC20_TRANSFER_TOPIC};
use ethrpc_sdk::{Address, EthClient, MockTransport, Quantity, SdkError, TransactionWithReceipt};
use serde_json::{json, Value};

fn client() -> (EthClient, MockTransport) {
    let transport = MockTransport::new();
    (EthClient::with_transport(transport.clone()), transport)
}

fn address(s: &str) -> Address {
    Address::parse(s).unwrap()
}

// ==================== Balance Tests ====================

#[tokio::test]
async fn test_balance_of() {
    let (client, transport) = client();
    transport.set_response(
        "eth_call",
        json!("0x00000000000000000000000000000000000000000000000014d1120d7b160000"),
    );

    let balance = client
        .erc20_balance_of(&address(TOKEN), &address(RECEIVER), Quantity::LATEST)
        .await
        .unwrap();
    assert_eq!(balance.to_string(), "1.5");

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, "eth_call");
    assert_eq!(
        request.params[0],
        json!({
            "to": TOKEN,
            "data": "0x70a08231000000000000000000000000499d4aab8acab015d319ebfe476e4c800079ce87"
        })
    );
    assert_eq!(request.params[1], json!("latest"));
}

#[tokio::test]
async fn test_balance_of_empty_return_is_zero() {
    let client = EthClient::new_mock();
    let balance = client
        .erc20_balance_of(&address(TOKEN), &Address::ZERO, Quantity::Block(1))
        .await
        .unwrap();
    assert_eq!(balance.to_string(), "0");
}

// ==================== Transfer Search Tests ====================

#[tokio::test]
async fn test_transfers_by_pair() {
    let (client, transport) = client();
    transport.set_response("eth_getLogs", json!([transfer_log()]));

    let query = TransferQuery::new(address(TOKEN), 6_139_700, 6_139_710)
        .sender(address(SENDER))
        .receiver(address(RECEIVER));
    let transfers = client.erc20_transfers(&query).await.unwrap();

    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].from, address(SENDER));
    assert_eq!(transfers[0].to, address(RECEIVER));
    assert_eq!(transfers[0].value.to_string(), "1.5");

    let filter = &transport.last_request().unwrap().params[0];
    assert_eq!(filter["address"], json!(TOKEN));
    assert_eq!(filter["fromBlock"], json!("0x5daf34"));
    assert_eq!(filter["toBlock"], json!("0x5daf3e"));
    assert_eq!(
        filter["topics"],
        json!([ERC20_TRANSFER_TOPIC, padded(SENDER), padded(RECEIVER)])
    );
}

#[tokio::test]
async fn test_transfers_by_sender_only() {
    let (client, transport) = client();
    transport.set_response("eth_getLogs", json!([]));

    let query = TransferQuery::in_block(address(TOKEN), 10).sender(address(SENDER));
    assert!(client.erc20_transfers(&query).await.unwrap().is_empty());

    let filter = &transport.last_request().unwrap().params[0];
    assert_eq!(filter["fromBlock"], json!("0xa"));
    assert_eq!(filter["toBlock"], json!("0xa"));
    assert_eq!(
        filter["topics"],
        json!([ERC20_TRANSFER_TOPIC, padded(SENDER), Value::Null])
    );
}

#[tokio::test]
async fn test_transfers_reject_foreign_log() {
    let (client, transport) = client();
    let mut log = transfer_log();
    log["topics"] = json!([ERC20_TRANSFER_TOPIC]);
    transport.set_response("eth_getLogs", json!([log]));

    let query = TransferQuery::in_block(address(TOKEN), 10);
    assert!(matches!(
        client.erc20_transfers(&query).await,
        Err(SdkError::NotATransfer(_))
    ));
}

// ==================== Receipt Tests ====================

#[tokio::test]
async fn test_from_receipt_skips_other_logs() {
    let (client, transport) = client();
    let mut approval = transfer_log();
    approval["topics"][0] =
        json!("0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925");
    transport.set_response("eth_getTransactionByHash", transaction());
    transport.set_response("eth_getTransactionReceipt", receipt(json!([approval, transfer_log()])));

    let tx = client
        .get_transaction_by_hash(&TX_HASH.parse().unwrap())
        .await
        .unwrap();
    let merged: TransactionWithReceipt = client.load_receipt_and_merge(&tx).await.unwrap();
    let transfer = Erc20Transfer::from_receipt(&merged, 1_424_182_926).unwrap();

    assert_eq!(transfer.timestamp, 1_424_182_926);
    assert_eq!(transfer.block_number, 6_139_707);
    assert_eq!(transfer.transaction_hash, merged.hash);
    assert_eq!(transfer.to, address(RECEIVER));
}

// ==================== Chain Scan Tests ====================

#[tokio::test]
async fn test_scan_transfers_to_contract() {
    let (client, transport) = client();
    transport.set_response("eth_getBlockByNumber", block(json!([transaction()])));
    transport.set_response("eth_getTransactionReceipt", receipt(json!([transfer_log()])));

    let transfers = client
        .scan_transfers_to(&address(TOKEN), 100, 101)
        .await
        .unwrap();

    // Same mocked block for both heights
    assert_eq!(transfers.len(), 2);
    assert_eq!(transfers[0].timestamp, 0x54e34e8e);
    assert_eq!(transfers[0].value.to_string(), "1.5");
    assert_eq!(
        transfers[0].summary(),
        "(6139707) 0xa7d9dd... -> 0x499d4a... [1.5]"
    );

    let methods: Vec<String> = transport.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        vec![
            "eth_getBlockByNumber",
            "eth_getTransactionReceipt",
            "eth_getBlockByNumber",
            "eth_getTransactionReceipt",
        ]
    );
}

#[tokio::test]
async fn test_scan_ignores_other_recipients() {
    let (client, transport) = client();
    transport.set_response("eth_getBlockByNumber", block(json!([transaction()])));

    let transfers = client
        .scan_transfers_to(&address(RECEIVER), 5, 5)
        .await
        .unwrap();
    assert!(transfers.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_scan_skips_receipts_without_logs() {
    let (client, transport) = client();
    transport.set_response("eth_getBlockByNumber", block(json!([transaction()])));
    transport.set_response("eth_getTransactionReceipt", receipt(json!([])));

    let transfers = client
        .scan_transfers_to(&address(TOKEN), 5, 5)
        .await
        .unwrap();
    assert!(transfers.is_empty());
}
