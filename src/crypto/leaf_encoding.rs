//! Canonical Leaf Encoding
//!
//! A leaf is either raw bytes or a nonnegative integer of arbitrary size.
//! Bytes are hashed as-is. Integers are hashed over their minimal big-endian
//! representation: `ceil(hex_digits / 2)` bytes, so `0xabc` becomes
//! `[0x0a, 0xbc]` and zero becomes `[0x00]`. An integer leaf therefore hashes
//! identically to the byte leaf holding the same big-endian bytes.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};

use crate::canonical_spec::{prefixed_hex, strip_hex_prefix};
use crate::crypto::hasher::{Digest, MerkleHasher};
use crate::crypto::{MerkleError, MerkleResult};

/// Raw input value at the base of the tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeafValue {
    /// Byte sequence, used unchanged
    Bytes(Vec<u8>),
    /// Integer leaf; negative values are rejected at encoding time
    Integer(BigInt),
}

impl LeafValue {
    /// Parse a textual leaf
    ///
    /// `0x`-prefixed text (optionally preceded by `-`) is a hexadecimal
    /// integer; anything else is taken as its UTF-8 bytes.
    pub fn parse(text: &str) -> MerkleResult<Self> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) if strip_hex_prefix(rest).is_some() => (true, rest),
            _ => (false, text),
        };

        let digits = match strip_hex_prefix(body) {
            Some(digits) => digits,
            None => return Ok(LeafValue::Bytes(text.as_bytes().to_vec())),
        };

        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| MerkleError::InvalidLeaf(format!("'{}' is not a hex integer", text)))?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(LeafValue::Integer(BigInt::from_biguint(sign, magnitude)))
    }

    /// Canonical bytes fed to the hash function
    pub fn encode(&self) -> MerkleResult<Vec<u8>> {
        encode_leaf(self)
    }
}

/// Encode a leaf into the byte sequence that gets hashed
pub fn encode_leaf(value: &LeafValue) -> MerkleResult<Vec<u8>> {
    match value {
        LeafValue::Bytes(bytes) => Ok(bytes.clone()),
        LeafValue::Integer(integer) => integer
            .to_biguint()
            .map(|magnitude| magnitude.to_bytes_be())
            .ok_or_else(|| {
                MerkleError::Encoding(format!("negative integer leaf {} has no canonical encoding", integer))
            }),
    }
}

/// Encode and hash a single leaf
pub fn hash_leaf<H: MerkleHasher + ?Sized>(hasher: &H, value: &LeafValue) -> MerkleResult<Digest> {
    let encoded = encode_leaf(value)?;
    let digest = hasher.hash(&encoded);
    log::trace!("leaf {} -> {}", value, prefixed_hex(&digest));
    Ok(digest)
}

impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafValue::Bytes(bytes) => write!(f, "bytes({})", prefixed_hex(bytes)),
            LeafValue::Integer(integer) if integer.sign() == Sign::Minus => {
                write!(f, "-0x{:x}", integer.magnitude())
            }
            LeafValue::Integer(integer) => write!(f, "0x{:x}", integer.magnitude()),
        }
    }
}

impl From<Vec<u8>> for LeafValue {
    fn from(bytes: Vec<u8>) -> Self {
        LeafValue::Bytes(bytes)
    }
}

impl From<&[u8]> for LeafValue {
    fn from(bytes: &[u8]) -> Self {
        LeafValue::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for LeafValue {
    fn from(bytes: [u8; N]) -> Self {
        LeafValue::Bytes(bytes.to_vec())
    }
}

impl From<&str> for LeafValue {
    fn from(text: &str) -> Self {
        LeafValue::Bytes(text.as_bytes().to_vec())
    }
}

impl From<u64> for LeafValue {
    fn from(value: u64) -> Self {
        LeafValue::Integer(BigInt::from(value))
    }
}

impl From<u128> for LeafValue {
    fn from(value: u128) -> Self {
        LeafValue::Integer(BigInt::from(value))
    }
}

impl From<i64> for LeafValue {
    fn from(value: i64) -> Self {
        LeafValue::Integer(BigInt::from(value))
    }
}

impl From<BigUint> for LeafValue {
    fn from(value: BigUint) -> Self {
        LeafValue::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for LeafValue {
    fn from(value: BigInt) -> Self {
        LeafValue::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::HashFunction;

    const ADDRESS: &str = "0x1aD91ee08f21bE3dE0BA2ba6918E714dA6B45836";

    #[test]
    fn test_bytes_are_unchanged() {
        let leaf = LeafValue::from(vec![0x00, 0x01, 0xff]);
        assert_eq!(leaf.encode().unwrap(), vec![0x00, 0x01, 0xff]);
    }

    #[test]
    fn test_integer_minimal_big_endian() {
        assert_eq!(LeafValue::from(0xabcu64).encode().unwrap(), vec![0x0a, 0xbc]);
        assert_eq!(LeafValue::from(0xabcdu64).encode().unwrap(), vec![0xab, 0xcd]);
        assert_eq!(LeafValue::from(0x1u64).encode().unwrap(), vec![0x01]);
    }

    #[test]
    fn test_zero_encodes_as_single_byte() {
        assert_eq!(LeafValue::from(0u64).encode().unwrap(), vec![0x00]);
    }

    #[test]
    fn test_negative_integer_is_encoding_error() {
        let err = LeafValue::from(-5i64).encode().unwrap_err();
        assert!(matches!(err, MerkleError::Encoding(_)));

        let parsed = LeafValue::parse("-0x05").unwrap();
        assert!(matches!(parsed.encode(), Err(MerkleError::Encoding(_))));
    }

    #[test]
    fn test_address_integer_is_twenty_bytes() {
        let leaf = LeafValue::parse(ADDRESS).unwrap();
        let encoded = leaf.encode().unwrap();
        assert_eq!(encoded.len(), 20);
        assert_eq!(hex::encode(&encoded), "1ad91ee08f21be3de0ba2ba6918e714da6b45836");
    }

    #[test]
    fn test_integer_and_bytes_hash_identically() {
        let integer = LeafValue::parse(ADDRESS).unwrap();
        let bytes = LeafValue::from(hex::decode("1ad91ee08f21be3de0ba2ba6918e714da6b45836").unwrap());

        let hasher = HashFunction::Keccak256;
        assert_eq!(hash_leaf(&hasher, &integer).unwrap(), hash_leaf(&hasher, &bytes).unwrap());
    }

    #[test]
    fn test_parse_text_and_invalid_hex() {
        assert_eq!(LeafValue::parse("hello").unwrap(), LeafValue::from("hello"));
        assert!(matches!(LeafValue::parse("0xzz"), Err(MerkleError::InvalidLeaf(_))));
        assert!(matches!(LeafValue::parse("0x"), Err(MerkleError::InvalidLeaf(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(LeafValue::from(0xabcu64).to_string(), "0xabc");
        assert_eq!(LeafValue::from(-10i64).to_string(), "-0xa");
        assert_eq!(LeafValue::from(vec![0x01, 0x02]).to_string(), "bytes(0x0102)");
    }
}
