//! Tree construction configuration
//!
//! Loaded from JSON; every field is optional and falls back to its default:
//!
//! ```text
//! { "hash_function": "keccak256", "strategy": "levels", "parallel_threshold": 1000 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canonical_spec::tree_config;
use crate::crypto::{HashFunction, MerkleError, MerkleResult};
use crate::merkle::builder::BuildStrategy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Digest used for leaves and interior nodes
    pub hash_function: HashFunction,
    /// Construction strategy
    pub strategy: BuildStrategy,
    /// Minimum level width before pairing runs on rayon
    pub parallel_threshold: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            hash_function: HashFunction::default(),
            strategy: BuildStrategy::default(),
            parallel_threshold: tree_config::PARALLEL_THRESHOLD,
        }
    }
}

impl TreeConfig {
    pub fn from_json(json: &str) -> MerkleResult<Self> {
        serde_json::from_str(json).map_err(|e| MerkleError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> MerkleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MerkleError::Config(e.to_string()))
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> MerkleResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| MerkleError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}
