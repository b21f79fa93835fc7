//! Outbound request parameter types

use ethrpc_primitives::{Address, EtherValue, HexString, Quantity, H256};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::abi::{encode_call_with_argument, function_selector};
use crate::SdkError;

/// Call request for `eth_call`
#[derive(Debug, Clone, Default)]
pub struct EthCallParams {
    /// Sender address
    pub from: Option<Address>,
    /// Contract address
    pub to: Option<Address>,
    /// Gas limit
    pub gas: Option<u64>,
    /// Gas price in wei
    pub gas_price: Option<EtherValue>,
    /// Value in wei
    pub value: Option<EtherValue>,
    /// Call data
    pub data: Option<HexString>,
}

impl EthCallParams {
    /// Call a no-argument contract method, e.g. `totalSupply()`
    pub fn to_contract(contract: Address, signature: &str) -> Self {
        Self {
            to: Some(contract),
            data: Some(HexString::from_bytes(function_selector(signature).to_vec())),
            ..Default::default()
        }
    }

    /// Call a single-argument contract method, e.g. `balanceOf(address)`
    pub fn to_contract_with_argument(contract: Address, signature: &str, argument: &[u8]) -> Self {
        Self {
            to: Some(contract),
            data: Some(HexString::from_bytes(encode_call_with_argument(signature, argument))),
            ..Default::default()
        }
    }
}

impl Serialize for EthCallParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        if let Some(from) = &self.from {
            map.serialize_entry("from", &from.to_hex())?;
        }
        if let Some(to) = &self.to {
            map.serialize_entry("to", &to.to_hex())?;
        }
        if let Some(gas) = &self.gas {
            map.serialize_entry("gas", &format!("0x{:x}", gas))?;
        }
        if let Some(gas_price) = &self.gas_price {
            map.serialize_entry("gasPrice", &gas_price.to_hex_string())?;
        }
        if let Some(value) = &self.value {
            map.serialize_entry("value", &value.to_hex_string())?;
        }
        if let Some(data) = self.data.as_ref().filter(|d| !d.is_empty()) {
            map.serialize_entry("data", &format!("0x{}", hex::encode(data.as_bytes())))?;
        }

        map.end()
    }
}

/// The three topic-match slots of a log filter.
///
/// Slot 0 holds the event signature, slots 1 and 2 the first two indexed
/// arguments. Each slot matches any of its candidates; an empty slot matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTopics {
    slots: [Vec<H256>; 3],
}

impl FilterTopics {
    /// Number of slots
    pub const SLOTS: usize = 3;

    /// Candidates of a slot
    pub fn slot(&self, index: usize) -> Option<&[H256]> {
        self.slots.get(index).map(Vec::as_slice)
    }

    /// True if no slot has a candidate
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

impl Serialize for FilterTopics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(Self::SLOTS))?;
        for slot in &self.slots {
            match slot.as_slice() {
                [] => seq.serialize_element(&Option::<String>::None)?,
                [single] => seq.serialize_element(&single.to_hex())?,
                many => {
                    let list: Vec<String> = many.iter().map(H256::to_hex).collect();
                    seq.serialize_element(&list)?
                }
            }
        }
        seq.end()
    }
}

/// Builder for [`FilterTopics`]
#[derive(Debug, Clone, Default)]
pub struct FilterTopicBuilder {
    topics: FilterTopics,
}

impl FilterTopicBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate to a slot
    pub fn add_topic(mut self, slot: usize, topic: H256) -> Result<Self, SdkError> {
        let candidates = self.topics.slots.get_mut(slot).ok_or_else(|| {
            SdkError::AbiEncode(format!(
                "topic slot {} out of range (max {})",
                slot,
                FilterTopics::SLOTS - 1
            ))
        })?;
        candidates.push(topic);
        Ok(self)
    }

    /// Add an address candidate to a slot, padded to a topic word
    pub fn add_address(self, slot: usize, address: &Address) -> Result<Self, SdkError> {
        self.add_topic(slot, address.to_padded_word())
    }

    /// Finish building
    pub fn build(self) -> FilterTopics {
        self.topics
    }
}

/// Log filter for `eth_getLogs` and `eth_newFilter`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    /// First block (inclusive)
    pub from_block: Quantity,
    /// Last block (inclusive)
    pub to_block: Quantity,
    /// Emitting contract
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Topic slots
    pub topics: FilterTopics,
}

impl FilterParams {
    /// Create a filter
    pub fn new(
        address: Option<Address>,
        from_block: Quantity,
        to_block: Quantity,
        topics: FilterTopics,
    ) -> Self {
        Self {
            from_block,
            to_block,
            address,
            topics,
        }
    }
}
