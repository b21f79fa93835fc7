//! # ethrpc-sdk
//!
//! Typed client for Ethereum JSON-RPC nodes.
//!
//! ## Features
//!
//! - **EthClient**: `eth_*`, `net_*`, `web3_*` and `personal_*` calls decoded
//!   into domain objects
//! - **ABI**: decoding of call inputs and event data, call-data encoding
//! - **ERC-20**: balances and `Transfer` event search
//! - **Transport**: HTTP (reqwest) or an in-memory mock for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ethrpc_sdk::{EthClient, Quantity};
//! use ethrpc_primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EthClient::connect("http://localhost:8545")?;
//!
//!     let head = client.block_number().await?;
//!     let block = client.get_block_by_number(Quantity::Block(head), true).await?;
//!     println!("block {} has {} transactions", block.number, block.transactions.len());
//!
//!     let owner = Address::parse("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d")?;
//!     let balance = client.get_balance(&owner, Quantity::LATEST).await?;
//!     println!("balance: {} ETH", balance);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Token Transfers
//!
//! ```rust,no_run
//! use ethrpc_sdk::erc20::TransferQuery;
//! use ethrpc_sdk::EthClient;
//! use ethrpc_primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EthClient::connect("http://localhost:8545")?;
//!
//!     let token = Address::parse("0x888666CA69E0f178DED6D75b5726Cee99A87D698")?;
//!     let query = TransferQuery::new(token, 5_705_956, 5_730_114);
//!     for transfer in client.erc20_transfers(&query).await? {
//!         println!("{}", transfer);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
mod client;
pub mod config;
pub mod erc20;
mod error;
mod transport;
pub mod types;

// Re-export main types
pub use client::EthClient;
pub use config::ClientConfig;
pub use error::SdkError;
pub use transport::{MockTransport, RecordedRequest};

/// Re-export Transport trait for custom implementations
pub use transport::Transport;

#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Re-export primitives for convenience
pub use ethrpc_primitives::{Address, BlockTag, EtherValue, HexString, Quantity, H256};
pub use ethrpc_types::{Block, Log, Receipt, SyncStatus, Transaction, TransactionWithReceipt};
pub use primitive_types::U256;
