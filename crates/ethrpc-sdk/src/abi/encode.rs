//! ABI encoding

use ethrpc_crypto::keccak256;
use ethrpc_primitives::{codec, H256};
use primitive_types::U256;

use super::decode::WORD;
use super::types::Token;

/// Encode tokens according to Solidity ABI specification
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let head_size = tokens.len() * WORD;

    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for token in tokens {
        if token.type_of().is_dynamic() {
            // Offset counts from the start of the head
            head.extend(encode_u256(&U256::from(head_size + tail.len())));
            tail.extend(encode_token(token));
        } else {
            head.extend(encode_token(token));
        }
    }

    head.extend(tail);
    head
}

/// Encode function call (selector + params)
pub fn encode_function_call(selector: [u8; 4], tokens: &[Token]) -> Vec<u8> {
    let mut result = selector.to_vec();
    result.extend(encode(tokens));
    result
}

/// Call data for a single pre-encoded argument: selector of `signature`
/// followed by `argument` right-aligned in one word
pub fn encode_call_with_argument(signature: &str, argument: &[u8]) -> Vec<u8> {
    codec::concat(&function_selector(signature), &codec::pad_to(argument, WORD))
}

/// Encode a single token
fn encode_token(token: &Token) -> Vec<u8> {
    match token {
        Token::Address(addr) => addr.to_padded_word().as_bytes().to_vec(),
        Token::Bool(b) => {
            let mut buf = [0u8; 32];
            buf[31] = u8::from(*b);
            buf.to_vec()
        }
        Token::Int(value) => {
            // Sign-extend negative values
            let fill = if *value < 0 { 0xff } else { 0x00 };
            let mut buf = [fill; 32];
            buf[24..].copy_from_slice(&value.to_be_bytes());
            buf.to_vec()
        }
        Token::U64(value) => encode_u256(&U256::from(*value)),
        Token::Uint(value) => encode_u256(value),
        Token::FixedBytes(data) => {
            let mut buf = [0u8; 32];
            let len = data.len().min(WORD);
            buf[..len].copy_from_slice(&data[..len]);
            buf.to_vec()
        }
        Token::Bytes(data) => encode_bytes(data),
        Token::String(s) => encode_bytes(s.as_bytes()),
    }
}

/// Encode a U256 as 32 bytes
fn encode_u256(value: &U256) -> Vec<u8> {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes.to_vec()
}

/// Encode dynamic bytes: length word, then data zero-padded to a word boundary
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_u256(&U256::from(data.len()));

    let padded_len = data.len().div_ceil(WORD) * WORD;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);

    result
}

/// Compute function selector (first 4 bytes of keccak256(signature))
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// Compute event topic (keccak256 of the event signature)
pub fn event_topic(signature: &str) -> H256 {
    keccak256(signature.as_bytes())
}
