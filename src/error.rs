//! Error types for merkle_commit

use thiserror::Error;

use crate::pairing::PairOrdering;

/// Errors surfaced by tree construction and proof generation.
///
/// Verification never fails with an error: a bad proof is simply `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MerkleError {
    /// zero leaves given to build
    #[error("cannot build a merkle tree from zero leaves")]
    EmptyInput,

    /// leaf index past the end of the leaf layer
    #[error("leaf index {index} out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// requested index
        index: usize,
        /// leaves in the tree
        leaf_count: usize,
    },

    /// digest is not a leaf of the tree
    #[error("leaf not found in tree")]
    LeafNotFound,

    /// proof requested with a pairing rule the tree was not built with
    #[error("tree was built with {tree} pairing, proof requested with {requested}")]
    OrderingMismatch {
        /// ordering the tree was built with
        tree: PairOrdering,
        /// ordering passed by the caller
        requested: PairOrdering,
    },

    /// malformed hex string
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Result type for merkle_commit operations
pub type Result<T> = std::result::Result<T, MerkleError>;
