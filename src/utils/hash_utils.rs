//! Hash Utilities
//! Raw digest functions backing the selectable hash algorithms

use sha2::{Digest as Sha2Digest, Sha256};
use sha3::Keccak256;
use blake2::Blake2s256;

/// Hash a byte slice using Keccak-256
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash a byte slice using SHA-256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash a byte slice using BLAKE2s-256
pub fn blake2s256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2s256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Concatenate two digests, left before right, no separator
pub fn concat_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 64] {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(left);
    data[32..].copy_from_slice(right);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_known_vectors() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(keccak256(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_algorithms_differ() {
        let data = b"merkle";
        assert_ne!(keccak256(data), sha256(data));
        assert_ne!(keccak256(data), blake2s256(data));
        assert_ne!(sha256(data), blake2s256(data));
    }

    #[test]
    fn test_concat_pair_order() {
        let left = [0x11u8; 32];
        let right = [0x22u8; 32];
        let joined = concat_pair(&left, &right);
        assert_eq!(&joined[..32], &left);
        assert_eq!(&joined[32..], &right);
    }
}
