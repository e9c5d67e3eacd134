use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use merkle_commit::{BuildStrategy, HashFunction, LeafValue, TreeBuilder, TreeConfig};

/// Build a Merkle tree over the given leaves and print its root commitment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Leaves: 0x-prefixed hex integers or plain text. Read one per line from stdin when omitted
    leaves: Vec<String>,

    /// JSON config file (hash_function, strategy, parallel_threshold)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hash function: keccak256, sha256, blake2s256
    #[arg(long)]
    hash: Option<HashFunction>,

    /// Construction strategy: levels, halving
    #[arg(short, long)]
    strategy: Option<BuildStrategy>,

    /// Minimum level width before pairing runs in parallel
    #[arg(long)]
    parallel_threshold: Option<usize>,

    /// Print every node digest in pre-order
    #[arg(short, long)]
    print_tree: bool,

    /// Print the level-by-level digest table
    #[arg(short, long)]
    levels: bool,

    /// Print a JSON inspection report instead of the bare root
    #[arg(short, long)]
    report: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TreeConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => TreeConfig::default(),
    };
    if let Some(hash) = args.hash {
        config.hash_function = hash;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(threshold) = args.parallel_threshold {
        config.parallel_threshold = threshold;
    }

    let raw = if args.leaves.is_empty() {
        read_stdin_leaves()?
    } else {
        args.leaves.clone()
    };
    if raw.is_empty() {
        bail!("no leaves given");
    }

    let leaves = raw
        .iter()
        .map(|text| LeafValue::parse(text).with_context(|| format!("parsing leaf '{}'", text)))
        .collect::<Result<Vec<_>>>()?;

    let tree = TreeBuilder::from_config(&config)
        .build(leaves)
        .context("building Merkle tree")?;
    let inspector = tree.inspector();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.print_tree {
        for digest in inspector.print_tree() {
            writeln!(out, "{}", digest)?;
        }
    }
    if args.levels {
        inspector.write_tree(&mut out)?;
    }
    if args.report {
        writeln!(out, "{}", serde_json::to_string_pretty(&inspector.report())?)?;
    } else {
        writeln!(out, "{}", inspector.get_root_hash())?;
    }

    Ok(())
}

fn read_stdin_leaves() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut leaves = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading leaves from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            leaves.push(trimmed.to_string());
        }
    }
    Ok(leaves)
}
