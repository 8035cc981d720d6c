//! Text rendering of digests, proofs and trees.
//!
//! Nothing in the tree or proof code depends on this module; it exists for
//! callers that want to print or ship values as hex strings.

use std::fmt;

use crate::error::Result;
use crate::hashing::MerkleHasher;
use crate::mtree::MerkleTree;
use crate::proof::{ProofNode, Side};

/// `0x`-prefixed lowercase hex
pub fn digest_to_hex<D: AsRef<[u8]>>(digest: &D) -> String {
    format!("0x{}", hex::encode(digest))
}

/// Decode hex with or without a `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(hex::decode(digits)?)
}

/// root digest as `0x`-prefixed hex
pub fn root_hex<H: MerkleHasher>(tree: &MerkleTree<H>) -> String {
    digest_to_hex(tree.root())
}

/// Sibling digests only, leaf level first. Enough for sorted-pair proofs.
pub fn proof_to_hex<D: AsRef<[u8]>>(proof: &[ProofNode<D>]) -> Vec<String> {
    proof.iter().map(|node| digest_to_hex(&node.hash)).collect()
}

/// Sibling digests tagged with their side, `0` for left and `1` for right.
pub fn positional_proof_to_hex<D: AsRef<[u8]>>(proof: &[ProofNode<D>]) -> Vec<(u8, String)> {
    proof
        .iter()
        .map(|node| {
            let side = match node.side {
                Side::Left => 0,
                Side::Right => 1,
            };
            (side, digest_to_hex(&node.hash))
        })
        .collect()
}

/// Renders a tree root first, one node per line:
/// ```text
/// └─ root
///    ├─ left
///    │  ├─ leaf 0
///    │  └─ leaf 1
///    └─ right
///       └─ leaf 2
/// ```
pub struct TreeDisplay<'a, H: MerkleHasher> {
    tree: &'a MerkleTree<H>,
}

/// displayable view of `tree`
pub fn tree<H: MerkleHasher>(tree: &MerkleTree<H>) -> TreeDisplay<'_, H> {
    TreeDisplay { tree }
}

impl<H: MerkleHasher> TreeDisplay<'_, H> {
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
        index: usize,
        prefix: &str,
        last: bool,
    ) -> fmt::Result {
        let layers = self.tree.layers();
        let connector = if last { "└─ " } else { "├─ " };
        writeln!(f, "{prefix}{connector}{}", hex::encode(&layers[depth][index]))?;
        if depth == 0 {
            return Ok(());
        }

        let child_prefix = format!("{prefix}{}", if last { "   " } else { "│  " });
        let first = 2 * index;
        // a duplicated odd node has a single child
        let end = (first + 2).min(layers[depth - 1].len());
        for child in first..end {
            self.write_node(f, depth - 1, child, &child_prefix, child + 1 == end)?;
        }
        Ok(())
    }
}

impl<H: MerkleHasher> fmt::Debug for TreeDisplay<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeDisplay").field("tree", self.tree).finish()
    }
}

impl<H: MerkleHasher> fmt::Display for TreeDisplay<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree.depth(), 0, "", true)
    }
}
