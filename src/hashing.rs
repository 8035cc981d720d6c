//! Hashing for merkle_commit
//!
//! The tree never picks a hash function on its own: every operation takes a
//! [`MerkleHasher`] instance supplied by the caller.

use std::fmt::Debug;

use sha2::Digest as _;
use tiny_keccak::{Hasher, Keccak};

/// Allows the use of a custom hashing algorithm
pub trait MerkleHasher: Sync {
    /// type produced by hasher
    type Digest: Clone + Eq + Debug + AsRef<[u8]> + Send + Sync;

    /// data -> digest
    fn hash(&self, data: &[u8]) -> Self::Digest;
}

/// Keccak-256, the hasher used by most Ethereum-style merkle trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl MerkleHasher for Keccak256 {
    type Digest = [u8; 32];

    fn hash(&self, data: &[u8]) -> Self::Digest {
        let mut output = [0u8; 32];
        let mut hasher = Keccak::v256();
        hasher.update(data);
        hasher.finalize(&mut output);
        output
    }
}

/// SHA-256
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl MerkleHasher for Sha256 {
    type Digest = [u8; 32];

    fn hash(&self, data: &[u8]) -> Self::Digest {
        sha2::Sha256::digest(data).into()
    }
}

/// Adapts a plain function or closure into a [`MerkleHasher`].
///
/// ```
/// use merkle_commit::hashing::{FnHasher, MerkleHasher};
///
/// let xor = FnHasher(|data: &[u8]| [data.iter().fold(0u8, |acc, b| acc ^ b)]);
/// assert_eq!(xor.hash(&[1, 2, 3]), [0]);
/// ```
#[derive(Clone, Copy)]
pub struct FnHasher<F>(pub F);

impl<F> Debug for FnHasher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnHasher(<fn>)")
    }
}

impl<F, D> MerkleHasher for FnHasher<F>
where
    F: Fn(&[u8]) -> D + Sync,
    D: Clone + Eq + Debug + AsRef<[u8]> + Send + Sync,
{
    type Digest = D;

    fn hash(&self, data: &[u8]) -> D {
        (self.0)(data)
    }
}

impl<H: MerkleHasher + ?Sized> MerkleHasher for &H {
    type Digest = H::Digest;

    fn hash(&self, data: &[u8]) -> Self::Digest {
        (**self).hash(data)
    }
}
