//! Keccak-256 hashing

use ethrpc_primitives::H256;
use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    H256::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            keccak256(&[]).to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_hello() {
        assert_eq!(
            keccak256(b"hello").to_hex(),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_keccak256_zero_word() {
        assert_eq!(
            keccak256(&[0u8; 32]).to_hex(),
            "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"
        );
    }

    // ==================== Signatures ====================

    #[test]
    fn test_keccak256_transfer_event() {
        assert_eq!(
            keccak256(b"Transfer(address,address,uint256)").to_hex(),
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn test_keccak256_method_selectors() {
        assert_eq!(
            &keccak256(b"transfer(address,uint256)").as_bytes()[..4],
            &[0xa9, 0x05, 0x9c, 0xbb]
        );
        assert_eq!(&keccak256(b"balanceOf(address)").as_bytes()[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(&keccak256(b"baz(uint32,bool)").as_bytes()[..4], &[0xcd, 0xcd, 0x77, 0xc0]);
    }

    #[test]
    fn test_keccak256_deterministic() {
        assert_eq!(keccak256(b"input"), keccak256(b"input"));
        assert_ne!(keccak256(&[0x00]), keccak256(&[0x01]));
    }
}
