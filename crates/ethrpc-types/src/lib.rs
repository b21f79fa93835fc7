//! # ethrpc-types
//!
//! Domain objects assembled from JSON-RPC results.
//!
//! Every object has two forms: a `Raw*` wire record whose fields are the
//! strings the node sent, and a decoded type built from it by a fallible
//! `from_raw`. Assembly is all-or-nothing; the first field that fails to decode
//! aborts with [`DecodeError::Field`] naming it.
//!
//! - [`Block`] - with transaction hashes or full [`Transaction`]s
//! - [`Transaction`]
//! - [`Receipt`] and its [`Log`]s
//! - [`TransactionWithReceipt`] - merged view
//! - [`SyncStatus`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod decode;
pub mod log;
pub mod merged;
pub mod receipt;
pub mod sync;
pub mod transaction;

mod error;

pub use block::{Block, BlockEntry, BlockTransactions, RawBlock};
pub use error::DecodeError;
pub use log::{Log, RawLog};
pub use merged::TransactionWithReceipt;
pub use receipt::{RawReceipt, Receipt};
pub use sync::SyncStatus;
pub use transaction::{RawTransaction, Transaction};
