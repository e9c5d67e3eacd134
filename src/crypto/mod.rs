//! Cryptographic Primitives Module
//!
//! Hash functions and canonical leaf encoding used by the tree builder:
//! - Keccak-256 / SHA-256 / BLAKE2s-256 digests behind a pluggable trait
//! - Canonical byte encoding of byte and integer leaves

pub mod hasher;
pub mod leaf_encoding;

// Re-export main types
pub use hasher::{Digest, HashFunction, MerkleHasher};
pub use leaf_encoding::{encode_leaf, LeafValue};

/// Merkle tree error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MerkleError {
    #[error("Cannot build a Merkle tree from an empty leaf sequence")]
    EmptyInput,

    #[error("Leaf encoding failed: {0}")]
    Encoding(String),

    #[error("Invalid leaf: {0}")]
    InvalidLeaf(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for tree operations
pub type MerkleResult<T> = Result<T, MerkleError>;
