//! # ethrpc-crypto
//!
//! Keccak-256, the only hash an RPC client needs: method selectors, event
//! topics and local `web3_sha3` checks.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
