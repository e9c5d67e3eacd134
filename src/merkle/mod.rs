//! Merkle Tree Module
//! Immutable binary hash trees with pluggable hashing and odd-node padding
pub mod builder;
pub mod config;
pub mod merkle_tree;
pub mod node;
pub mod tree_inspector;

// Re-export main types
pub use builder::{BuildStrategy, TreeBuilder};
pub use config::TreeConfig;
pub use merkle_tree::MerkleTree;
pub use node::TreeNode;
pub use tree_inspector::{InspectionReport, PreOrder, TreeInspector};
