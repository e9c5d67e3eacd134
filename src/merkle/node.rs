use std::fmt;
use std::sync::Arc;

use crate::canonical_spec::prefixed_hex;
use crate::crypto::{Digest, MerkleHasher};

/// Immutable binary tree node
///
/// Children are shared through `Arc`: the padding duplicate at an odd level
/// is the same immutable node referenced twice, never a mutable alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    digest: Digest,
    children: Option<(Arc<TreeNode>, Arc<TreeNode>)>,
}

impl TreeNode {
    /// Create a leaf node from an already hashed leaf
    pub fn leaf(digest: Digest) -> Self {
        Self {
            digest,
            children: None,
        }
    }

    /// Combine two children into their parent
    pub fn parent<H: MerkleHasher + ?Sized>(hasher: &H, left: Arc<TreeNode>, right: Arc<TreeNode>) -> Self {
        let digest = hasher.hash_pair(&left.digest, &right.digest);
        Self {
            digest,
            children: Some((left, right)),
        }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn left(&self) -> Option<&Arc<TreeNode>> {
        self.children.as_ref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Arc<TreeNode>> {
        self.children.as_ref().map(|(_, right)| right)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Digest rendered as `0x`-prefixed hex
    pub fn hex(&self) -> String {
        prefixed_hex(&self.digest)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node: {}", self.hex())
    }
}
