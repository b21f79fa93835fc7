//! Property tests for the hex codec and value types

use ethrpc_primitives::{codec, Address, EtherValue, HexString};
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonical_decodes_back(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        prop_assume!(bytes.iter().any(|&b| b != 0));
        let encoded = codec::encode_canonical(&bytes);
        prop_assert_eq!(codec::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn u64_survives_minimal_encoding(n in any::<u64>()) {
        prop_assert_eq!(codec::to_u64(&codec::from_u64(n)), n);
    }

    #[test]
    fn display_matches_integer_hex(n in any::<u64>()) {
        prop_assert_eq!(HexString::from_u64(n).to_string(), format!("{:#x}", n));
    }

    #[test]
    fn big_integer_matches_u64(n in any::<u64>()) {
        let bytes = codec::from_u64(n);
        prop_assert_eq!(codec::to_big_integer(&bytes).to_string(), n.to_string());
    }

    #[test]
    fn pad_grow_preserves_low_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..32),
        extra in 0usize..32,
    ) {
        let padded = codec::pad_to(&bytes, bytes.len() + extra);
        prop_assert_eq!(&padded[extra..], &bytes[..]);
        prop_assert!(padded[..extra].iter().all(|&b| b == 0));
    }

    #[test]
    fn address_string_roundtrip(raw in any::<[u8; 20]>()) {
        let addr = Address::from_bytes(raw);
        let reparsed = Address::parse(&addr.to_string()).unwrap();
        prop_assert_eq!(reparsed, addr);
        prop_assert_eq!(Address::parse_or_zero(&addr.to_string()), addr);
    }

    #[test]
    fn parse_or_zero_never_fails(s in "\\PC*") {
        let addr = Address::parse_or_zero(&s);
        if s.len() != 42 {
            prop_assert!(addr.is_zero());
        }
    }

    #[test]
    fn whole_units_render_without_point(n in 0u64..1_000_000) {
        let v = EtherValue::from_decimal_str(&n.to_string()).unwrap();
        prop_assert_eq!(v.to_string(), n.to_string());
    }
}

#[test]
fn test_empty_canonical() {
    assert_eq!(codec::encode_canonical(&[]), "0x0");
}

#[test]
fn test_quantity_to_ether_scenario() {
    let bytes = codec::decode("0x153711f0a39755800").unwrap();
    assert_eq!(codec::to_big_integer(&bytes).to_string(), "24459365180000000000");
    let value = EtherValue::from(codec::to_big_integer(&bytes));
    assert_eq!(value.to_string(), "24.45936518");
}
