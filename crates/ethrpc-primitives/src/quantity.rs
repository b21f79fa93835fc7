//! Block selector for the JSON-RPC "default block parameter"

use std::fmt;
use std::str::FromStr;

use crate::{codec, PrimitiveError};

/// Symbolic block tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockTag {
    /// Most recent mined block
    #[default]
    Latest,
    /// Genesis block
    Earliest,
    /// Pending state
    Pending,
}

impl BlockTag {
    /// Wire keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either a concrete block number or a symbolic tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Block number
    Block(u64),
    /// Symbolic tag
    Tag(BlockTag),
}

impl Quantity {
    /// Shorthand for `Quantity::Tag(BlockTag::Latest)`
    pub const LATEST: Quantity = Quantity::Tag(BlockTag::Latest);
    /// Shorthand for `Quantity::Tag(BlockTag::Earliest)`
    pub const EARLIEST: Quantity = Quantity::Tag(BlockTag::Earliest);
    /// Shorthand for `Quantity::Tag(BlockTag::Pending)`
    pub const PENDING: Quantity = Quantity::Tag(BlockTag::Pending);

    /// Build from a block number that may be the `-1` "no number" sentinel.
    ///
    /// Any non-negative number wins over the tag.
    pub fn from_parts(block: i64, tag: BlockTag) -> Self {
        if block >= 0 {
            Quantity::Block(block as u64)
        } else {
            Quantity::Tag(tag)
        }
    }

    /// Decimal number or tag keyword, e.g. `123` or `latest`
    pub fn to_decimal_or_tag(&self) -> String {
        match self {
            Quantity::Block(n) => n.to_string(),
            Quantity::Tag(tag) => tag.as_str().to_string(),
        }
    }

    /// Hex quantity or tag keyword, e.g. `0x7b` or `latest`
    pub fn to_hex_or_tag(&self) -> String {
        match self {
            Quantity::Block(n) => codec::encode_display(&codec::from_u64(*n)),
            Quantity::Tag(tag) => tag.as_str().to_string(),
        }
    }

    /// Block number, if concrete
    pub fn block_number(&self) -> Option<u64> {
        match self {
            Quantity::Block(n) => Some(*n),
            Quantity::Tag(_) => None,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::LATEST
    }
}

impl From<u64> for Quantity {
    fn from(n: u64) -> Self {
        Quantity::Block(n)
    }
}

impl From<BlockTag> for Quantity {
    fn from(tag: BlockTag) -> Self {
        Quantity::Tag(tag)
    }
}

impl FromStr for Quantity {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Quantity::LATEST),
            "earliest" => Ok(Quantity::EARLIEST),
            "pending" => Ok(Quantity::PENDING),
            _ => s
                .parse::<u64>()
                .map(Quantity::Block)
                .map_err(|_| PrimitiveError::UnrecognizedQuantity(s.to_string())),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_or_tag())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Quantity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_or_tag())
    }
}
