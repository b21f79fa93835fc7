//! ABI encoding and decoding for contract calls and event data
//!
//! Covers the parameter types an RPC client meets when reading transfers and
//! balances: `address`, `bool`, `uint<N>`, `bytes<N>`, `bytes` and `string`.
//!
//! # Example
//!
//! ```rust
//! use ethrpc_sdk::abi::{encode_call_with_argument, FunctionSignature, Token};
//! use ethrpc_primitives::Address;
//!
//! // Call data for balanceOf(owner)
//! let owner = Address::ZERO;
//! let data = encode_call_with_argument("balanceOf(address)", owner.as_bytes());
//! assert_eq!(data.len(), 36);
//!
//! // Decode a (uint32,bool) call
//! let sig = FunctionSignature::parse("baz(uint32,bool)").unwrap();
//! let input = concat!(
//!     "0xcdcd77c0",
//!     "0000000000000000000000000000000000000000000000000000000000000045",
//!     "0000000000000000000000000000000000000000000000000000000000000001",
//! );
//! let tokens = sig.decode_function_input(input).unwrap();
//! assert_eq!(tokens, vec![Token::Int(69), Token::Bool(true)]);
//! ```

mod decode;
mod encode;
mod types;

pub use decode::{FunctionSignature, SELECTOR_LEN, WORD};
pub use encode::{
    encode, encode_call_with_argument, encode_function_call, event_topic, function_selector,
};
pub use types::{ParamType, Token};
