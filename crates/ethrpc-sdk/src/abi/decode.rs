//! ABI decoding against a fixed, ordered parameter list

use ethrpc_primitives::{codec, Address};
use primitive_types::U256;

use super::types::{ParamType, Token};
use crate::SdkError;

/// ABI word size in bytes
pub const WORD: usize = 32;

/// Method selector size in bytes
pub const SELECTOR_LEN: usize = 4;

/// Ordered parameter list of a function call or event.
///
/// Payload layout is one head word per parameter, in declaration order,
/// followed by a body holding dynamic values. A dynamic parameter's head word
/// is a byte offset counted from the start of the head; the value sits at that
/// offset as a length word followed by the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionSignature {
    params: Vec<ParamType>,
}

impl FunctionSignature {
    /// Create from parameter types
    pub fn new(params: Vec<ParamType>) -> Self {
        Self { params }
    }

    /// Parse `name(type,...)`, `(type,...)` or a bare `type,...` list
    pub fn parse(s: &str) -> Result<Self, SdkError> {
        let inner = match (s.find('('), s.rfind(')')) {
            (Some(open), Some(close)) if open < close => &s[open + 1..close],
            (None, None) => s,
            _ => {
                return Err(SdkError::InvalidAbiType(format!(
                    "unbalanced parentheses in signature: {}",
                    s
                )))
            }
        };
        if inner.trim().is_empty() {
            return Ok(Self::default());
        }
        inner
            .split(',')
            .map(ParamType::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Parameter types in declaration order
    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    /// Size of the head region in bytes
    pub fn head_length(&self) -> usize {
        self.params.len() * WORD
    }

    /// Split the head region into one word per parameter
    pub fn read_head<'a>(&self, payload: &'a [u8]) -> Result<Vec<&'a [u8]>, SdkError> {
        let head_len = self.head_length();
        check_length(payload, head_len)?;
        Ok(payload[..head_len].chunks(WORD).collect())
    }

    /// Decode a raw payload (no selector)
    pub fn decode(&self, payload: &[u8]) -> Result<Vec<Token>, SdkError> {
        let head_len = self.head_length();
        let head = self.read_head(payload)?;
        let body = &payload[head_len..];

        self.params
            .iter()
            .zip(head)
            .map(|(param, word)| {
                if param.is_dynamic() {
                    decode_dynamic(*param, word, head_len, body)
                } else {
                    decode_word(*param, word)
                }
            })
            .collect()
    }

    /// Decode the non-indexed `data` of an event log
    pub fn decode_event_data(&self, data: &str) -> Result<Vec<Token>, SdkError> {
        let payload = codec::decode(data)?;
        self.decode(&payload)
    }

    /// Decode transaction input, skipping the 4-byte method selector
    pub fn decode_function_input(&self, input: &str) -> Result<Vec<Token>, SdkError> {
        let payload = codec::decode(input)?;
        check_length(&payload, SELECTOR_LEN + self.head_length())?;
        self.decode(&payload[SELECTOR_LEN..])
    }
}

/// Interpret a fixed-width head word
fn decode_word(param: ParamType, word: &[u8]) -> Result<Token, SdkError> {
    let token = match param {
        ParamType::Address => Token::Address(Address::from_slice(&word[WORD - Address::LEN..])?),
        ParamType::Bool => Token::Bool(word.iter().any(|&b| b != 0)),
        ParamType::Uint(bits) if bits <= 32 => Token::Int(codec::to_u64(word) as i64),
        ParamType::Uint(bits) if bits <= 64 => Token::U64(codec::to_u64(word)),
        ParamType::Uint(_) => Token::Uint(U256::from_big_endian(word)),
        ParamType::FixedBytes(size) => Token::FixedBytes(word[..size.min(WORD)].to_vec()),
        ParamType::Bytes | ParamType::String => {
            return Err(SdkError::AbiDecode(format!("{} is not a fixed-width type", param)))
        }
    };
    Ok(token)
}

/// Follow a head offset into the body and read a length-prefixed value
fn decode_dynamic(
    param: ParamType,
    word: &[u8],
    head_len: usize,
    body: &[u8],
) -> Result<Token, SdkError> {
    let offset = word_to_usize(word)?;
    let location = offset.checked_sub(head_len).ok_or_else(|| {
        SdkError::AbiDecode(format!("offset {} points into the head", offset))
    })?;

    let data_start = location.saturating_add(WORD);
    check_length(body, data_start)?;
    let length = word_to_usize(&body[location..data_start])?;

    let data_end = data_start.saturating_add(length);
    check_length(body, data_end)?;
    let bytes = body[data_start..data_end].to_vec();

    match param {
        ParamType::String => String::from_utf8(bytes)
            .map(Token::String)
            .map_err(|e| SdkError::AbiDecode(format!("invalid UTF-8: {}", e))),
        _ => Ok(Token::Bytes(bytes)),
    }
}

fn word_to_usize(word: &[u8]) -> Result<usize, SdkError> {
    let value = U256::from_big_endian(word);
    if value.bits() > 64 {
        return Err(SdkError::AbiDecode(format!("length or offset out of range: {}", value)));
    }
    usize::try_from(value.low_u64())
        .map_err(|_| SdkError::AbiDecode(format!("length or offset out of range: {}", value)))
}

/// Check that data has at least `required` bytes
fn check_length(data: &[u8], required: usize) -> Result<(), SdkError> {
    if data.len() < required {
        return Err(SdkError::TruncatedAbiInput {
            required,
            actual: data.len(),
        });
    }
    Ok(())
}
