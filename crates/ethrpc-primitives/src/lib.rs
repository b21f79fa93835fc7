//! # ethrpc-primitives
//!
//! Value types for talking to an Ethereum JSON-RPC node.
//!
//! Everything here is a pure conversion between the hex strings a node sends
//! and typed values:
//!
//! - [`codec`]: byte/hex/integer conversions with Ethereum quantity rules
//! - [`HexString`]: wire byte values with canonical and display renderings
//! - [`Address`] and [`H256`]: fixed-width values
//! - [`EtherValue`]: arbitrary-precision amounts with a decimal scale
//! - [`Quantity`]: block number or `latest`/`earliest`/`pending`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;

mod address;
mod error;
mod ether_value;
mod hash;
mod hex_string;
mod quantity;

pub use address::Address;
pub use error::PrimitiveError;
pub use ether_value::{EtherValue, DEFAULT_DECIMALS};
pub use hash::H256;
pub use hex_string::HexString;
pub use quantity::{BlockTag, Quantity};

// Re-export big integers so downstream crates agree on one version
pub use num_bigint::{BigInt, BigUint};
