// Core modules
pub mod canonical_spec;
pub mod crypto;
pub mod merkle;
pub mod utils;


// Re-export main types for easy access
pub use crypto::{encode_leaf, Digest, HashFunction, LeafValue, MerkleError, MerkleHasher, MerkleResult};
pub use merkle::{BuildStrategy, InspectionReport, MerkleTree, TreeBuilder, TreeConfig, TreeInspector, TreeNode};
pub use utils::{blake2s256, keccak256, sha256};
