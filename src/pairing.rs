//! Pair combination shared by tree construction and proof verification.
//!
//! A parent node is `hash(combine(left, right))`. How `left` and `right` are
//! laid out before hashing depends on the [`PairOrdering`]:
//! ```text
//! Sorted:     parent = hash(min(a, b) || max(a, b))
//! Positional: parent = hash(left || right)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hashing::MerkleHasher;

/// Rule for laying out two sibling digests before they are hashed together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairOrdering {
    /// Byte-wise ascending order; `combine(a, b) == combine(b, a)`, so proofs
    /// do not depend on sibling position.
    #[default]
    Sorted,
    /// Left child first; proofs must carry the side of every sibling.
    Positional,
}

impl PairOrdering {
    /// Whether verification needs the side recorded in each proof node.
    pub fn is_position_sensitive(&self) -> bool {
        matches!(self, PairOrdering::Positional)
    }
}

impl fmt::Display for PairOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairOrdering::Sorted => f.write_str("sorted"),
            PairOrdering::Positional => f.write_str("positional"),
        }
    }
}

impl FromStr for PairOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorted" => Ok(PairOrdering::Sorted),
            "positional" => Ok(PairOrdering::Positional),
            other => Err(format!(
                "unknown pair ordering '{other}', expected 'sorted' or 'positional'"
            )),
        }
    }
}

/// Concatenate two digests according to `ordering`.
///
/// `left` is the node encountered first in its layer. With
/// [`PairOrdering::Sorted`] that position is ignored.
pub fn combine(left: &[u8], right: &[u8], ordering: PairOrdering) -> Vec<u8> {
    let (first, second) = match ordering {
        PairOrdering::Sorted if right < left => (right, left),
        _ => (left, right),
    };
    let mut buf = Vec::with_capacity(first.len() + second.len());
    buf.extend_from_slice(first);
    buf.extend_from_slice(second);
    buf
}

/// Hash two sibling digests into their parent.
pub fn hash_pair<H: MerkleHasher>(
    hasher: &H,
    left: &H::Digest,
    right: &H::Digest,
    ordering: PairOrdering,
) -> H::Digest {
    hasher.hash(&combine(left.as_ref(), right.as_ref(), ordering))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_is_symmetric() {
        let a = [0x01, 0xff];
        let b = [0x02, 0x00];
        assert_eq!(
            combine(&a, &b, PairOrdering::Sorted),
            combine(&b, &a, PairOrdering::Sorted)
        );
        assert_eq!(combine(&b, &a, PairOrdering::Sorted), vec![0x01, 0xff, 0x02, 0x00]);
    }

    #[test]
    fn positional_keeps_encounter_order() {
        let a = [0x09];
        let b = [0x01];
        assert_eq!(combine(&a, &b, PairOrdering::Positional), vec![0x09, 0x01]);
        assert_eq!(combine(&b, &a, PairOrdering::Positional), vec![0x01, 0x09]);
    }

    #[test]
    fn sorted_duplicate_pair() {
        let a = [0x42, 0x43];
        assert_eq!(combine(&a, &a, PairOrdering::Sorted), vec![0x42, 0x43, 0x42, 0x43]);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Sorted".parse::<PairOrdering>(), Ok(PairOrdering::Sorted));
        assert_eq!("positional".parse::<PairOrdering>(), Ok(PairOrdering::Positional));
        assert!("bitcoin".parse::<PairOrdering>().is_err());
        assert_eq!(PairOrdering::Positional.to_string(), "positional");
        assert_eq!(PairOrdering::default(), PairOrdering::Sorted);
    }

    #[test]
    fn serde_lowercase_names() {
        let json = serde_json::to_string(&PairOrdering::Positional).unwrap();
        assert_eq!(json, "\"positional\"");
        let back: PairOrdering = serde_json::from_str("\"sorted\"").unwrap();
        assert_eq!(back, PairOrdering::Sorted);
    }
}
