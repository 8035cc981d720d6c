//! merkle_demo
//!
//! Builds a merkle tree over a list of items, prints the tree and its root,
//! then proves and verifies the membership of one item.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use merkle_commit::{
    build, generate, hash_leaves, render, verify, Keccak256, MerkleHasher, PairOrdering, Sha256,
};

/// Items committed to when none are given on the command line
const DEFAULT_ITEMS: [&str; 4] = [
    "0x1fB23Df60A94666893F2b75eD7f179288cf88298",
    "0x221A744e381C2dae12A78Cfad9d62d44520206E7",
    "0x23CFaD0a9DFec8Cc897DdbE97C991BA6Fc510f64",
    "0x0A340b01AD7A7e74ECCf5634213a49daD3b856B9",
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HashChoice {
    Keccak,
    Sha256,
}

/// Build a merkle tree and prove membership of one item
#[derive(Parser, Debug)]
#[command(name = "merkle_demo", version)]
struct Cli {
    /// Items to commit to; `0x`-prefixed hex items are hashed as raw bytes
    items: Vec<String>,

    /// Pair ordering: sorted or positional
    #[arg(long, env = "MERKLE_ORDERING", default_value_t = PairOrdering::Sorted)]
    ordering: PairOrdering,

    /// Hash function used for leaves and nodes
    #[arg(long, value_enum, env = "MERKLE_HASH", default_value_t = HashChoice::Keccak)]
    hash: HashChoice,

    /// Index of the item to prove
    #[arg(long, default_value_t = 1)]
    prove: usize,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let items: Vec<Vec<u8>> = if cli.items.is_empty() {
        DEFAULT_ITEMS.iter().map(|item| item_bytes(item)).collect()
    } else {
        cli.items.iter().map(|item| item_bytes(item)).collect()
    };
    info!(items = items.len(), ordering = %cli.ordering, hash = ?cli.hash, "building tree");

    let valid = match cli.hash {
        HashChoice::Keccak => run(&Keccak256, &items, cli.ordering, cli.prove)?,
        HashChoice::Sha256 => run(&Sha256, &items, cli.ordering, cli.prove)?,
    };
    if !valid {
        bail!("proof for item {} did not verify", cli.prove);
    }
    Ok(())
}

/// `0x`-prefixed hex decodes to its bytes, anything else is taken as UTF-8.
fn item_bytes(item: &str) -> Vec<u8> {
    if item.starts_with("0x") || item.starts_with("0X") {
        if let Ok(bytes) = render::parse_hex(item) {
            return bytes;
        }
    }
    item.as_bytes().to_vec()
}

fn run<H: MerkleHasher>(
    hasher: &H,
    items: &[Vec<u8>],
    ordering: PairOrdering,
    index: usize,
) -> Result<bool> {
    let leaves = hash_leaves(items, hasher);
    let tree = build(leaves, hasher, ordering).context("failed to build merkle tree")?;

    println!("tree:");
    print!("{}", render::tree(&tree));
    println!("root: {}", render::root_hex(&tree));

    let leaf = tree
        .leaf(index)
        .cloned()
        .with_context(|| format!("no item at index {index}"))?;
    let proof = generate(&tree, index, ordering)?;

    println!("proof:");
    if ordering.is_position_sensitive() {
        for (side, hash) in render::positional_proof_to_hex(&proof) {
            println!("  [{side}, {hash}]");
        }
    } else {
        for hash in render::proof_to_hex(&proof) {
            println!("  {hash}");
        }
    }

    let valid = verify(&leaf, &proof, tree.root(), hasher, ordering);
    println!("verify: {valid}");
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_items_are_decoded() {
        assert_eq!(item_bytes("0x0a0B"), vec![0x0a, 0x0b]);
        assert_eq!(item_bytes("0XABCD"), vec![0xab, 0xcd]);
        assert_eq!(item_bytes("0xnothex"), b"0xnothex".to_vec());
        assert_eq!(item_bytes("hello"), b"hello".to_vec());
    }

    #[test]
    fn default_scenario_verifies() {
        let items: Vec<Vec<u8>> = DEFAULT_ITEMS.iter().map(|item| item_bytes(item)).collect();
        assert_eq!(items[0].len(), 20);
        assert!(run(&Keccak256, &items, PairOrdering::Sorted, 1).unwrap());
        assert!(run(&Sha256, &items, PairOrdering::Positional, 3).unwrap());
    }

    #[test]
    fn cli_parses_ordering() {
        let cli = Cli::parse_from(["merkle_demo", "--ordering", "positional", "a", "b"]);
        assert_eq!(cli.ordering, PairOrdering::Positional);
        assert_eq!(cli.items, vec!["a", "b"]);
    }
}
