//! A Merkle Tree is a hashed datastructure that allows the construction of proofs.
//! A proof allows proving membership in the tree to a party that only knows the root hash.

#![allow(type_alias_bounds)]

use std::fmt;

use tracing::{debug, trace};

use crate::error::{MerkleError, Result};
use crate::hashing::{Keccak256, MerkleHasher};
use crate::leaves::hash_leaves;
use crate::pairing::{hash_pair, PairOrdering};
use crate::proof::{MerkleProof, ProofNode, Side};

/// Layer in tree
type Layer<H: MerkleHasher> = Vec<H::Digest>;

/// Immutable binary merkle tree over an ordered sequence of leaf digests.
///
/// Every layer is kept, leaves at index 0 and the single-entry root layer
/// last. When a layer has an odd length its last node is paired with itself.
///
/// # Examples
///
/// ```
/// use merkle_commit::{hash_leaves, verify, Keccak256, MerkleTree, PairOrdering};
///
/// let leaves = hash_leaves(&["foo", "bar", "baz"], &Keccak256);
/// let tree = MerkleTree::build(leaves.clone(), &Keccak256, PairOrdering::Sorted).unwrap();
/// let proof = tree.proof(2).unwrap();
/// assert!(verify(&leaves[2], &proof, tree.root(), &Keccak256, PairOrdering::Sorted));
/// ```
pub struct MerkleTree<H: MerkleHasher = Keccak256> {
    layers: Vec<Layer<H>>,
    ordering: PairOrdering,
}

/// Build a tree from leaf digests. See [`MerkleTree::build`].
pub fn build<H: MerkleHasher>(
    leaves: Vec<H::Digest>,
    hasher: &H,
    ordering: PairOrdering,
) -> Result<MerkleTree<H>> {
    MerkleTree::build(leaves, hasher, ordering)
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Construct the full tree from already hashed leaves.
    ///
    /// Fails with [`MerkleError::EmptyInput`] when `leaves` is empty. A single
    /// leaf is its own root.
    pub fn build(leaves: Vec<H::Digest>, hasher: &H, ordering: PairOrdering) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }
        let leaf_count = leaves.len();
        let mut layers = vec![leaves];

        // build layers up to root
        while let Some(layer) = layers.last().filter(|layer| layer.len() > 1) {
            let parents = Self::parent_layer(layer, hasher, ordering);
            trace!(depth = layers.len(), width = parents.len(), "hashed layer");
            layers.push(parents);
        }

        debug!(leaves = leaf_count, layers = layers.len(), %ordering, "built merkle tree");
        Ok(MerkleTree { layers, ordering })
    }

    /// Hash raw items into leaves and build the tree over them.
    pub fn from_items<T>(items: &[T], hasher: &H, ordering: PairOrdering) -> Result<Self>
    where
        T: AsRef<[u8]> + Sync,
    {
        Self::build(hash_leaves(items, hasher), hasher, ordering)
    }

    /// Combine consecutive pairs; a trailing odd node is paired with itself.
    fn parent_layer(layer: &[H::Digest], hasher: &H, ordering: PairOrdering) -> Layer<H> {
        // chunks are never empty, so the first and last element always exist
        let parent =
            |pair: &[H::Digest]| hash_pair(hasher, &pair[0], &pair[pair.len() - 1], ordering);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            layer.par_chunks(2).map(parent).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            layer.chunks(2).map(parent).collect()
        }
    }

    /// return the root hash
    pub fn root(&self) -> &H::Digest {
        &self.layers[self.layers.len() - 1][0]
    }

    /// Pairing rule the tree was built with
    pub fn ordering(&self) -> PairOrdering {
        self.ordering
    }

    /// All layers, leaves first
    pub fn layers(&self) -> &[Vec<H::Digest>] {
        &self.layers
    }

    /// Layer at `depth` counted from the leaves
    pub fn layer(&self, depth: usize) -> Option<&[H::Digest]> {
        self.layers.get(depth).map(Vec::as_slice)
    }

    /// leaf digests in insertion order
    pub fn leaves(&self) -> &[H::Digest] {
        &self.layers[0]
    }

    /// leaf digest at `index`
    pub fn leaf(&self, index: usize) -> Option<&H::Digest> {
        self.layers[0].get(index)
    }

    /// number of leaves
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Depth is the distance of the furthest node from the root
    /// ```text
    ///          0
    ///        /   \
    ///       1     1
    ///      / \   / \
    ///     2   2 2   2
    ///    / \   \
    ///   3   3   3
    /// ```
    ///
    /// Every inclusion proof from this tree has exactly `depth()` nodes.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Index of the first leaf equal to `leaf`
    pub fn leaf_index(&self, leaf: &H::Digest) -> Option<usize> {
        self.layers[0].iter().position(|elem| elem == leaf)
    }

    /// Return true if the digest is one of the leaves
    pub fn contains(&self, leaf: &H::Digest) -> bool {
        self.leaf_index(leaf).is_some()
    }

    /// Sibling path from the leaf at `index` up to just below the root.
    pub fn proof(&self, index: usize) -> Result<MerkleProof<H>> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut idx = index;
        let mut proof = Vec::with_capacity(self.depth());
        for layer in &self.layers[..self.depth()] {
            // determine if sibling node is left or right
            let node = if idx % 2 == 0 {
                // last node of an odd layer is its own sibling
                let hash = layer.get(idx + 1).unwrap_or(&layer[idx]).clone();
                ProofNode { hash, side: Side::Right }
            } else {
                ProofNode {
                    hash: layer[idx - 1].clone(),
                    side: Side::Left,
                }
            };
            proof.push(node);
            // integer halving gives the parent's index
            idx /= 2;
        }

        debug!(index, len = proof.len(), "generated inclusion proof");
        Ok(proof)
    }

    /// Proof for the first leaf equal to `leaf`
    pub fn proof_for_leaf(&self, leaf: &H::Digest) -> Result<MerkleProof<H>> {
        let index = self.leaf_index(leaf).ok_or(MerkleError::LeafNotFound)?;
        self.proof(index)
    }

    /// Check a proof against this tree's root and pairing rule.
    pub fn verify(&self, proof: &MerkleProof<H>, leaf: &H::Digest, hasher: &H) -> bool {
        crate::proof::verify(leaf, proof, self.root(), hasher, self.ordering)
    }
}

/// Extract the proof for `index`, refusing an ordering the tree was not built with.
///
/// An out-of-range index is reported before an ordering mismatch.
pub fn generate<H: MerkleHasher>(
    tree: &MerkleTree<H>,
    index: usize,
    ordering: PairOrdering,
) -> Result<MerkleProof<H>> {
    let leaf_count = tree.leaf_count();
    if index >= leaf_count {
        return Err(MerkleError::IndexOutOfRange { index, leaf_count });
    }
    if ordering != tree.ordering {
        return Err(MerkleError::OrderingMismatch {
            tree: tree.ordering,
            requested: ordering,
        });
    }
    tree.proof(index)
}

impl<H: MerkleHasher> Clone for MerkleTree<H> {
    fn clone(&self) -> Self {
        MerkleTree {
            layers: self.layers.clone(),
            ordering: self.ordering,
        }
    }
}

impl<H: MerkleHasher> PartialEq for MerkleTree<H> {
    fn eq(&self, other: &Self) -> bool {
        self.ordering == other.ordering && self.layers == other.layers
    }
}

impl<H: MerkleHasher> Eq for MerkleTree<H> {}

impl<H: MerkleHasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("ordering", &self.ordering)
            .field("layers", &self.layers)
            .finish()
    }
}
