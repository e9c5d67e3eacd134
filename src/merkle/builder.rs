//! Tree Builder
//!
//! Turns an ordered leaf sequence into a single root. Both strategies apply
//! the same padding rule: whenever an odd number of nodes is about to be
//! paired, the last node is duplicated first.
//!
//! - `Levels` pairs adjacent nodes level by level until one node remains.
//! - `Halving` splits the list in two, builds each half recursively and
//!   joins the sub-roots, re-padding every odd sublist on the way down.
//!
//! The two agree whenever the leaf count is a power of two (and for one to
//! three leaves); otherwise they commit to the same leaves with different
//! roots.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::canonical_spec::tree_config;
use crate::crypto::leaf_encoding::hash_leaf;
use crate::crypto::{Digest, HashFunction, LeafValue, MerkleError, MerkleHasher, MerkleResult};
use crate::merkle::config::TreeConfig;
use crate::merkle::merkle_tree::MerkleTree;
use crate::merkle::node::TreeNode;

/// Construction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStrategy {
    /// Iterative level-by-level pairing
    #[default]
    Levels,
    /// Recursive halving with padding at every split
    Halving,
}

impl fmt::Display for BuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStrategy::Levels => f.write_str("levels"),
            BuildStrategy::Halving => f.write_str("halving"),
        }
    }
}

impl FromStr for BuildStrategy {
    type Err = MerkleError;

    fn from_str(s: &str) -> MerkleResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "levels" | "level" | "iterative" => Ok(BuildStrategy::Levels),
            "halving" | "recursive" => Ok(BuildStrategy::Halving),
            other => Err(MerkleError::Config(format!("unknown build strategy '{}'", other))),
        }
    }
}

/// Builds immutable Merkle trees with a pluggable hasher
#[derive(Debug, Clone)]
pub struct TreeBuilder<H: MerkleHasher = HashFunction> {
    hasher: H,
    strategy: BuildStrategy,
    parallel_threshold: usize,
}

impl TreeBuilder<HashFunction> {
    /// Builder matching a loaded configuration
    pub fn from_config(config: &TreeConfig) -> Self {
        TreeBuilder::new(config.hash_function)
            .strategy(config.strategy)
            .parallel_threshold(config.parallel_threshold)
    }
}

impl Default for TreeBuilder<HashFunction> {
    fn default() -> Self {
        TreeBuilder::new(HashFunction::default())
    }
}

impl<H: MerkleHasher> TreeBuilder<H> {
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            strategy: BuildStrategy::default(),
            parallel_threshold: tree_config::PARALLEL_THRESHOLD,
        }
    }

    pub fn strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Levels (or sublists) at least this wide are processed with rayon.
    /// Zero is treated as one.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Encode, hash and combine the leaves into a tree
    pub fn build<I>(&self, leaves: I) -> MerkleResult<MerkleTree>
    where
        I: IntoIterator,
        I::Item: Into<LeafValue>,
    {
        let leaves: Vec<LeafValue> = leaves.into_iter().map(Into::into).collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let digests = self.hash_leaves(&leaves)?;
        self.build_from_digests(digests)
    }

    /// Build from leaves that are already hashed
    pub fn build_from_digests(&self, digests: Vec<Digest>) -> MerkleResult<MerkleTree> {
        if digests.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let leaf_count = digests.len();
        if leaf_count < tree_config::MIN_NON_DEGENERATE_LEAVES {
            log::warn!(
                "degenerate tree: {} leaf, root is the leaf digest hashed with itself",
                leaf_count
            );
        }

        let nodes: Vec<Arc<TreeNode>> = digests
            .into_iter()
            .map(|digest| Arc::new(TreeNode::leaf(digest)))
            .collect();

        let root = match self.strategy {
            BuildStrategy::Levels => self.build_levels(nodes)?,
            BuildStrategy::Halving => self.build_halving(&nodes),
        };

        let tree = MerkleTree::new(root, leaf_count, self.hasher.name(), self.strategy);
        log::info!(
            "built {} tree over {} leaves with {}: root {}",
            self.strategy,
            leaf_count,
            self.hasher.name(),
            tree.get_root_hash()
        );
        Ok(tree)
    }

    fn hash_leaves(&self, leaves: &[LeafValue]) -> MerkleResult<Vec<Digest>> {
        if leaves.len() >= self.parallel_threshold {
            leaves
                .par_iter()
                .map(|leaf| hash_leaf(&self.hasher, leaf))
                .collect()
        } else {
            leaves.iter().map(|leaf| hash_leaf(&self.hasher, leaf)).collect()
        }
    }

    fn combine(&self, left: Arc<TreeNode>, right: Arc<TreeNode>) -> Arc<TreeNode> {
        Arc::new(TreeNode::parent(&self.hasher, left, right))
    }

    fn build_levels(&self, mut level: Vec<Arc<TreeNode>>) -> MerkleResult<Arc<TreeNode>> {
        let mut height = 0usize;

        // a lone leaf still gets paired with its duplicate
        while level.len() > 1 || height == 0 {
            pad_odd(&mut level);
            level = self.pair_level(&level);
            height += 1;
            log::debug!("level {}: {} nodes", height, level.len());
        }

        level.into_iter().next().ok_or(MerkleError::EmptyInput)
    }

    fn pair_level(&self, level: &[Arc<TreeNode>]) -> Vec<Arc<TreeNode>> {
        if level.len() >= self.parallel_threshold {
            level
                .par_chunks(2)
                .map(|pair| self.combine(pair[0].clone(), pair[1].clone()))
                .collect()
        } else {
            level
                .chunks(2)
                .map(|pair| self.combine(pair[0].clone(), pair[1].clone()))
                .collect()
        }
    }

    fn build_halving(&self, nodes: &[Arc<TreeNode>]) -> Arc<TreeNode> {
        debug_assert!(!nodes.is_empty());

        if nodes.len() % 2 == 1 {
            let mut padded = nodes.to_vec();
            pad_odd(&mut padded);
            return self.build_halving(&padded);
        }

        if nodes.len() == 2 {
            return self.combine(nodes[0].clone(), nodes[1].clone());
        }

        let (left, right) = nodes.split_at(nodes.len() / 2);
        let (left, right) = if nodes.len() >= self.parallel_threshold {
            rayon::join(|| self.build_halving(left), || self.build_halving(right))
        } else {
            (self.build_halving(left), self.build_halving(right))
        };
        self.combine(left, right)
    }
}

/// Duplicate the last node when the count is odd
fn pad_odd(level: &mut Vec<Arc<TreeNode>>) {
    if level.len() % 2 == 1 {
        if let Some(last) = level.last().cloned() {
            level.push(last);
        }
    }
}
