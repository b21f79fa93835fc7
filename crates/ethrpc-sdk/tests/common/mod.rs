//! JSON fixtures shared by the integration tests

#![allow(dead_code)]

use serde_json::{json, Value};

pub const TX_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
pub const BLOCK_HASH: &str = "0x1d59ff54b1eb26b013ce3cb5fc9dab3705b415a67127a003c3e61eb445bb8df2";
pub const SENDER: &str = "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d";
pub const TOKEN: &str = "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb";
pub const RECEIVER: &str = "0x499d4aab8acab015d319ebfe476e4c800079ce87";
pub const TRANSFER_TOPIC: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

/// 1.5 tokens at 18 decimals
pub const AMOUNT_WORD: &str = "0x00000000000000000000000000000000000000000000000014d1120d7b160000";

pub fn padded(address: &str) -> String {
    format!("0x000000000000000000000000{}", &address[2..])
}

pub fn transaction() -> Value {
    json!({
        "hash": TX_HASH,
        "blockHash": BLOCK_HASH,
        "blockNumber": "0x5daf3b",
        "from": SENDER,
        "gas": "0xc350",
        "gasPrice": "0x4a817c800",
        "input": "0xa9059cbb",
        "nonce": "0x15",
        "to": TOKEN,
        "transactionIndex": "0x41",
        "value": "0x0",
        "v": "0x25",
        "r": "0x1b5e176d927f8e9ab405058b2d2457392da3e20f328b16ddabcebc33eaac5fea",
        "s": "0x4ba69724e8f69de52f0125ad8b3c5c2cef33019bac3249e2c0a2192766d1721c"
    })
}

pub fn transfer_log() -> Value {
    json!({
        "address": TOKEN,
        "topics": [TRANSFER_TOPIC, padded(SENDER), padded(RECEIVER)],
        "data": AMOUNT_WORD,
        "blockNumber": "0x5daf3b",
        "transactionHash": TX_HASH,
        "transactionIndex": "0x41",
        "blockHash": BLOCK_HASH,
        "logIndex": "0x2",
        "removed": false
    })
}

pub fn receipt(logs: Value) -> Value {
    json!({
        "transactionHash": TX_HASH,
        "transactionIndex": "0x41",
        "blockNumber": "0x5daf3b",
        "blockHash": BLOCK_HASH,
        "from": SENDER,
        "to": TOKEN,
        "cumulativeGasUsed": "0x33bc",
        "gasUsed": "0x4dc",
        "contractAddress": null,
        "status": "0x1",
        "logsBloom": "0x00",
        "logs": logs
    })
}

pub fn block(transactions: Value) -> Value {
    json!({
        "number": "0x5daf3b",
        "hash": BLOCK_HASH,
        "parentHash": "0x4e3a3754410177e6937ef1f84bba68ea139e8d1a2258c5f85db9f1cd715a1bdd",
        "nonce": "0xe04d296d2460cfb8",
        "logsBloom": "0x00",
        "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "stateRoot": "0xd5855eb08b3387c0af375e9cdb6acfc05eb8f519e419b874b6ff2ffda7ed1dff",
        "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "miner": "0x4e65fda2159562a496f9f3522f89122a3088497a",
        "difficulty": "0x027f07",
        "totalDifficulty": "0x027f07",
        "extraData": "0x",
        "size": "0x027f07",
        "gasLimit": "0x9f759",
        "gasUsed": "0x9f759",
        "timestamp": "0x54e34e8e",
        "transactions": transactions,
        "uncles": []
    })
}
