//! Merkle Tree Inspector - diagnostic views over a built tree
//!
//! Every built tree is perfect: padding happens before each pairing, so all
//! leaves sit at the same depth. A padding duplicate is reported as its own
//! tree position, which means the traversal and the level table show
//! `2^depth` leaf positions even when fewer leaves were supplied.

use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::canonical_spec::prefixed_hex;
use crate::crypto::Digest;
use crate::merkle::builder::BuildStrategy;
use crate::merkle::merkle_tree::MerkleTree;
use crate::merkle::node::TreeNode;

/// Summary of a built tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionReport {
    pub leaf_count: usize,
    pub leaf_positions: usize,
    pub depth: usize,
    pub node_count: usize,
    pub hash_function: String,
    pub strategy: BuildStrategy,
    pub root_hash: String,
    pub degenerate: bool,
}

/// Read-only inspector over a `MerkleTree`
#[derive(Debug, Clone, Copy)]
pub struct TreeInspector<'a> {
    tree: &'a MerkleTree,
}

impl<'a> TreeInspector<'a> {
    pub fn new(tree: &'a MerkleTree) -> Self {
        Self { tree }
    }

    /// Pre-order walk (node, left, right) yielding hex digests
    ///
    /// The iterator is lazy; call again to restart from the root.
    pub fn print_tree(&self) -> PreOrder<'a> {
        PreOrder {
            stack: vec![self.tree.root()],
        }
    }

    pub fn get_root_hash(&self) -> String {
        self.tree.get_root_hash()
    }

    /// Digests per level, leaf level first and root level last
    pub fn levels(&self) -> Vec<Vec<Digest>> {
        let mut rows = Vec::with_capacity(self.tree.depth() + 1);
        let mut frontier: Vec<&TreeNode> = vec![self.tree.root()];

        while !frontier.is_empty() {
            rows.push(frontier.iter().map(|node| *node.digest()).collect());
            frontier = frontier
                .iter()
                .filter_map(|node| Some([node.left()?.as_ref(), node.right()?.as_ref()]))
                .flatten()
                .collect();
        }

        rows.reverse();
        rows
    }

    pub fn report(&self) -> InspectionReport {
        let depth = self.tree.depth();
        InspectionReport {
            leaf_count: self.tree.leaf_count(),
            leaf_positions: 1 << depth,
            depth,
            node_count: (1 << (depth + 1)) - 1,
            hash_function: self.tree.hash_function().to_string(),
            strategy: self.tree.strategy(),
            root_hash: self.tree.get_root_hash(),
            degenerate: self.tree.is_degenerate(),
        }
    }

    /// Level-by-level dump, one digest per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, row) in self.levels().iter().enumerate() {
            let _ = writeln!(out, "level {} ({} nodes)", index, row.len());
            for digest in row {
                let _ = writeln!(out, "  {}", prefixed_hex(digest));
            }
        }
        let _ = writeln!(out, "root {}", self.get_root_hash());
        out
    }

    /// Write the level dump to a diagnostic stream
    pub fn write_tree<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }
}

/// Lazy pre-order traversal returned by [`TreeInspector::print_tree`]
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right.as_ref());
        }
        if let Some(left) = node.left() {
            self.stack.push(left.as_ref());
        }
        Some(node.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{HashFunction, MerkleHasher};
    use crate::merkle::builder::TreeBuilder;

    fn tree_of(count: usize) -> MerkleTree {
        let leaves: Vec<Vec<u8>> = (0..count).map(|i| vec![i as u8]).collect();
        MerkleTree::build(leaves).unwrap()
    }

    #[test]
    fn test_pre_order_sequence() {
        let tree = MerkleTree::build(vec!["a", "b"]).unwrap();
        let hasher = HashFunction::Keccak256;
        let a = hasher.hash(b"a");
        let b = hasher.hash(b"b");

        let walk: Vec<String> = tree.inspector().print_tree().collect();
        assert_eq!(
            walk,
            vec![tree.get_root_hash(), prefixed_hex(&a), prefixed_hex(&b)]
        );
    }

    #[test]
    fn test_pre_order_counts_positions() {
        for (count, expected) in [(1usize, 3usize), (2, 3), (3, 7), (4, 7), (5, 15), (8, 15)] {
            let tree = tree_of(count);
            let inspector = tree.inspector();
            assert_eq!(inspector.print_tree().count(), expected, "count {}", count);
            assert_eq!(inspector.report().node_count, expected);
        }
    }

    #[test]
    fn test_print_tree_is_restartable() {
        let tree = tree_of(6);
        let inspector = tree.inspector();
        let first: Vec<String> = inspector.print_tree().collect();
        let second: Vec<String> = inspector.print_tree().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], tree.get_root_hash());
    }

    #[test]
    fn test_levels_shape() {
        let tree = tree_of(3);
        let levels = tree.inspector().levels();

        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].len(), 4);
        assert_eq!(levels[1].len(), 2);
        assert_eq!(levels[2], vec![*tree.root_digest()]);
        // padding duplicate
        assert_eq!(levels[0][2], levels[0][3]);
    }

    #[test]
    fn test_report() {
        let tree = TreeBuilder::new(HashFunction::Sha256)
            .build(vec!["only"])
            .unwrap();
        let report = tree.inspector().report();

        assert_eq!(report.leaf_count, 1);
        assert_eq!(report.leaf_positions, 2);
        assert_eq!(report.depth, 1);
        assert_eq!(report.hash_function, "sha256");
        assert_eq!(report.strategy, BuildStrategy::Levels);
        assert!(report.degenerate);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["root_hash"], serde_json::Value::String(tree.get_root_hash()));
    }

    #[test]
    fn test_write_tree_and_display() {
        let tree = tree_of(2);
        let mut buffer = Vec::new();
        tree.inspector().write_tree(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("level 0 (2 nodes)"));
        assert!(text.trim_end().ends_with(&format!("root {}", tree.get_root_hash())));
        assert_eq!(text, tree.to_string());
    }
}
