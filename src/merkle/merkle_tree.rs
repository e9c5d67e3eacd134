//! Immutable Merkle tree
//!
//! A `MerkleTree` only exists in its built state: construction either
//! returns a complete tree or an error, never a partial root.

use std::fmt;
use std::sync::Arc;

use crate::canonical_spec::tree_config;
use crate::crypto::{Digest, HashFunction, LeafValue, MerkleResult};
use crate::merkle::builder::{BuildStrategy, TreeBuilder};
use crate::merkle::config::TreeConfig;
use crate::merkle::node::TreeNode;
use crate::merkle::tree_inspector::TreeInspector;

/// Root commitment over an ordered leaf sequence
#[derive(Debug, Clone)]
pub struct MerkleTree {
    root: Arc<TreeNode>,
    leaf_count: usize,
    hash_function: &'static str,
    strategy: BuildStrategy,
}

impl MerkleTree {
    pub(crate) fn new(
        root: Arc<TreeNode>,
        leaf_count: usize,
        hash_function: &'static str,
        strategy: BuildStrategy,
    ) -> Self {
        Self {
            root,
            leaf_count,
            hash_function,
            strategy,
        }
    }

    /// Build with Keccak-256 and level-by-level pairing
    pub fn build<I>(leaves: I) -> MerkleResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<LeafValue>,
    {
        TreeBuilder::<HashFunction>::default().build(leaves)
    }

    /// Build with the hash function and strategy from `config`
    pub fn build_with<I>(leaves: I, config: &TreeConfig) -> MerkleResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<LeafValue>,
    {
        TreeBuilder::from_config(config).build(leaves)
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn root_digest(&self) -> &Digest {
        self.root.digest()
    }

    /// Root digest as `0x`-prefixed hex; this is the public commitment
    pub fn get_root_hash(&self) -> String {
        self.root.hex()
    }

    /// Number of leaves supplied at construction, before padding
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Edges between the root and any leaf
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.root.as_ref();
        while let Some(left) = node.left() {
            node = left.as_ref();
            depth += 1;
        }
        depth
    }

    pub fn hash_function(&self) -> &'static str {
        self.hash_function
    }

    pub fn strategy(&self) -> BuildStrategy {
        self.strategy
    }

    /// A single leaf only commits to itself hashed twice
    pub fn is_degenerate(&self) -> bool {
        self.leaf_count < tree_config::MIN_NON_DEGENERATE_LEAVES
    }

    pub fn inspector(&self) -> TreeInspector<'_> {
        TreeInspector::new(self)
    }
}

impl fmt::Display for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspector().render())
    }
}
