//! Merkle Tree Demo
//! Walks through the reference address tree and the padding edge cases

use anyhow::Result;
use merkle_commit::crypto::leaf_encoding::hash_leaf;
use merkle_commit::{BuildStrategy, HashFunction, LeafValue, MerkleHasher, MerkleTree, TreeBuilder};

const ADDRESSES: [&str; 4] = [
    "0x1aD91ee08f21bE3dE0BA2ba6918E714dA6B45836",
    "0x8fb3b37f83698b75d90145d8f536810ad6cdb107",
    "0xb5d85cbf7cb3ee0d56b3bb207d5fc4b82f43f511",
    "0xddfabcdc4d8ffc6d5beaf154f18b778f892a0740",
];

fn main() -> Result<()> {
    env_logger::init();

    println!("🌳 Merkle Tree Demo");
    println!("{}", "=".repeat(40));

    let leaves = ADDRESSES
        .iter()
        .map(|address| LeafValue::parse(address))
        .collect::<Result<Vec<_>, _>>()?;

    // Reference tree
    println!("\n1️⃣  Reference tree ({} leaves)...", leaves.len());
    let tree = MerkleTree::build(leaves.clone())?;
    print!("{}", tree);

    println!("\n   Pre-order walk:");
    for digest in tree.inspector().print_tree() {
        println!("   {}", digest);
    }

    // Manual root
    println!("\n2️⃣  Manual root calculation...");
    let hasher = HashFunction::Keccak256;
    let digests = leaves
        .iter()
        .map(|leaf| hash_leaf(&hasher, leaf))
        .collect::<Result<Vec<_>, _>>()?;
    let left = hasher.hash_pair(&digests[0], &digests[1]);
    let right = hasher.hash_pair(&digests[2], &digests[3]);
    let manual = hasher.hash_pair(&left, &right);
    let matches = &manual == tree.root_digest();
    println!("   Manual root: 0x{}", hex::encode(manual));
    println!("   Tree root:   {}", tree.get_root_hash());
    println!("   Match: {}", if matches { "✅" } else { "❌" });

    // Single leaf
    println!("\n3️⃣  Single leaf...");
    let single = MerkleTree::build(leaves[..1].to_vec())?;
    let expected = hasher.hash_pair(&digests[0], &digests[0]);
    println!("   Root: {}", single.get_root_hash());
    println!("   Equals Hash(leaf ++ leaf): {}", if &expected == single.root_digest() { "✅" } else { "❌" });

    // Odd counts and strategies
    println!("\n4️⃣  Strategy comparison...");
    for count in [3usize, 5, 6, 8] {
        let leaves: Vec<Vec<u8>> = (0..count).map(|i| format!("leaf-{}", i).into_bytes()).collect();
        let levels = TreeBuilder::new(hasher).build(leaves.clone())?;
        let halving = TreeBuilder::new(hasher)
            .strategy(BuildStrategy::Halving)
            .build(leaves)?;
        println!(
            "   {} leaves: levels {} | halving {} | {}",
            count,
            &levels.get_root_hash()[..18],
            &halving.get_root_hash()[..18],
            if levels.root_digest() == halving.root_digest() { "same" } else { "different" }
        );
    }

    // Report
    println!("\n5️⃣  Inspection report...");
    println!("{}", serde_json::to_string_pretty(&tree.inspector().report())?);

    Ok(())
}
