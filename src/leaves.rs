//! Turning raw items into leaf digests.

use crate::hashing::MerkleHasher;

/// Hash every item once, preserving order.
///
/// An empty input yields an empty output; it is [`build`](crate::build) that
/// rejects an empty leaf set.
pub fn hash_leaves<H, T>(items: &[T], hasher: &H) -> Vec<H::Digest>
where
    H: MerkleHasher,
    T: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| hasher.hash(item.as_ref()))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(|item| hasher.hash(item.as_ref())).collect()
    }
}
