//! A Merkle Tree is a hashed datastructure that commits to an ordered sequence of items
//! with a single root digest. Merkle proofs allow proving membership in a tree to a
//! party that only knows the root hash.
//!
//! This implementation is hash-agnostic: every operation takes a [`MerkleHasher`]
//! supplied by the caller. It does not store any data beyond the hashes, and a built
//! tree is immutable.
//!
//! A parent node's hash is the hash of its two children concatenated either in
//! *ascending byte order* or in *left-to-right order*, see [`PairOrdering`].
//! ```text
//! Sorted:     parent hash = hash(lower_child, higher_child)
//! Positional: parent hash = hash(left_child, right_child)
//! ```
//! A layer of odd length pairs its last node with itself.
//!
//! # Examples
//!
//! ```
//! use merkle_commit::{build, generate, hash_leaves, verify, Keccak256, PairOrdering};
//!
//! // hash items into leaves
//! let items = vec!["foo", "bar", "baz"];
//! let leaves = hash_leaves(&items, &Keccak256);
//!
//! // build the tree and read its root
//! let tree = build(leaves.clone(), &Keccak256, PairOrdering::Sorted).unwrap();
//! let root = *tree.root();
//!
//! // generate proofs
//! let proof = generate(&tree, 1, PairOrdering::Sorted).unwrap();
//!
//! // verify proofs without the tree
//! assert!(verify(&leaves[1], &proof, &root, &Keccak256, PairOrdering::Sorted));
//!
//! // use a custom hasher
//! # use merkle_commit::MerkleHasher;
//! #
//! # #[derive(Debug)]
//! # struct MyHasher;
//! #
//! # impl MerkleHasher for MyHasher {
//! #     type Digest = [u8; 32];
//! #
//! #     fn hash(&self, data: &[u8]) -> Self::Digest {
//! #         // do hashing and return result
//! #         [0; 32]
//! #     }
//! # }
//! #
//! let tree = build(hash_leaves(&items, &MyHasher), &MyHasher, PairOrdering::Positional);
//! # assert!(tree.is_ok());
//! ```

#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod error;
pub mod hashing;
pub mod leaves;
pub mod mtree;
pub mod pairing;
pub mod proof;
pub mod render;

pub use error::{MerkleError, Result};
pub use hashing::{FnHasher, Keccak256, MerkleHasher, Sha256};
pub use leaves::hash_leaves;
pub use mtree::{build, generate, MerkleTree};
pub use pairing::PairOrdering;
pub use proof::{verify, MerkleProof, ProofNode, Side};
