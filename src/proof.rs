//! Data types for merkle proofs, and proof verification

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hashing::MerkleHasher;
use crate::pairing::{hash_pair, PairOrdering};

/// Chain of siblings up to the root, leaf level first
pub type MerkleProof<H> = Vec<ProofNode<<H as MerkleHasher>::Digest>>;

/// sibling hash and side of node
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct ProofNode<D> {
    /// The sibling's hash
    pub hash: D,
    /// Side of the sibling relative to the node on the path
    pub side: Side,
}

/// Left or Right child of a parent
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Left sibling
    Left,
    /// Right sibling
    Right,
}

/// Recompute the root from `leaf` and `proof` and compare it with `root`.
///
/// Needs nothing but the three values and the hasher; the tree itself is not
/// required. Any mismatch (wrong leaf, tampered sibling, truncated proof,
/// wrong root) yields `false`, never an error. With [`PairOrdering::Sorted`]
/// the `side` of each node is ignored.
pub fn verify<H: MerkleHasher>(
    leaf: &H::Digest,
    proof: &[ProofNode<H::Digest>],
    root: &H::Digest,
    hasher: &H,
    ordering: PairOrdering,
) -> bool {
    // hash proof nodes up to root
    let computed = proof.iter().fold(leaf.clone(), |running_hash, node| match node.side {
        Side::Left => hash_pair(hasher, &node.hash, &running_hash, ordering),
        Side::Right => hash_pair(hasher, &running_hash, &node.hash, ordering),
    });

    let valid = &computed == root;
    if !valid {
        debug!(steps = proof.len(), %ordering, "inclusion proof does not reach root");
    }
    valid
}
