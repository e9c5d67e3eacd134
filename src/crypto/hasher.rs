//! Pluggable hash functions for leaf and interior digests
//!
//! Leaves are hashed over their canonical encoding and interior nodes over
//! `left ++ right`. No prefix separates the two domains, so a 64-byte leaf
//! that equals two concatenated digests hashes like an interior node. This
//! is a known limitation of the commitment format and is kept as is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::crypto::{MerkleError, MerkleResult};
use crate::utils::hash_utils::{blake2s256, concat_pair, keccak256, sha256};

/// 32-byte digest produced by every supported hash function
pub type Digest = [u8; 32];

/// One-way digest producer used for both leaves and interior nodes
pub trait MerkleHasher: Send + Sync {
    /// Hash arbitrary bytes
    fn hash(&self, data: &[u8]) -> Digest;

    /// Hash two child digests, left before right
    fn hash_pair(&self, left: &Digest, right: &Digest) -> Digest {
        self.hash(&concat_pair(left, right))
    }

    /// Name used in logs and inspection reports
    fn name(&self) -> &'static str;
}

/// Supported hash functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFunction {
    /// Keccak-256 (Ethereum flavour, not NIST SHA3-256)
    #[default]
    Keccak256,
    /// SHA-256
    Sha256,
    /// BLAKE2s-256
    Blake2s256,
}

impl HashFunction {
    pub const ALL: [HashFunction; 3] = [
        HashFunction::Keccak256,
        HashFunction::Sha256,
        HashFunction::Blake2s256,
    ];
}

impl MerkleHasher for HashFunction {
    fn hash(&self, data: &[u8]) -> Digest {
        match self {
            HashFunction::Keccak256 => keccak256(data),
            HashFunction::Sha256 => sha256(data),
            HashFunction::Blake2s256 => blake2s256(data),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HashFunction::Keccak256 => "keccak256",
            HashFunction::Sha256 => "sha256",
            HashFunction::Blake2s256 => "blake2s256",
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFunction {
    type Err = MerkleError;

    fn from_str(s: &str) -> MerkleResult<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "keccak256" | "keccak" => Ok(HashFunction::Keccak256),
            "sha256" => Ok(HashFunction::Sha256),
            "blake2s256" | "blake2s" => Ok(HashFunction::Blake2s256),
            other => Err(MerkleError::Config(format!("unknown hash function '{}'", other))),
        }
    }
}
