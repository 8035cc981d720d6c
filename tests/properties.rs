use proptest::prelude::*;

use merkle_commit::{
    build, generate, hash_leaves, verify, Keccak256, MerkleHasher, MerkleTree, PairOrdering,
};

fn ordering() -> impl Strategy<Value = PairOrdering> {
    prop_oneof![Just(PairOrdering::Sorted), Just(PairOrdering::Positional)]
}

fn items(max: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 1..max)
}

fn ceil_log2(n: usize) -> usize {
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

fn keccak_tree(items: &[Vec<u8>], ordering: PairOrdering) -> (Vec<[u8; 32]>, MerkleTree) {
    let leaves = hash_leaves(items, &Keccak256);
    let tree = build(leaves.clone(), &Keccak256, ordering).expect("non-empty leaves");
    (leaves, tree)
}

proptest! {
    #[test]
    fn root_is_deterministic(items in items(40), ordering in ordering()) {
        let (_, first) = keccak_tree(&items, ordering);
        let (_, second) = keccak_tree(&items, ordering);
        prop_assert_eq!(first.root(), second.root());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_leaf_round_trips(items in items(40), ordering in ordering()) {
        let (leaves, tree) = keccak_tree(&items, ordering);
        for (index, leaf) in leaves.iter().enumerate() {
            let proof = generate(&tree, index, ordering).unwrap();
            prop_assert_eq!(proof.len(), ceil_log2(leaves.len()));
            prop_assert!(verify(leaf, &proof, tree.root(), &Keccak256, ordering));
        }
    }

    #[test]
    fn tampered_sibling_is_rejected(
        items in items(40),
        ordering in ordering(),
        pick in any::<prop::sample::Index>(),
        step in any::<prop::sample::Index>(),
        byte in 0usize..32,
        mask in 1u8..=255,
    ) {
        let (leaves, tree) = keccak_tree(&items, ordering);
        prop_assume!(leaves.len() > 1);

        let index = pick.index(leaves.len());
        let mut proof = tree.proof(index).unwrap();
        let step = step.index(proof.len());
        proof[step].hash[byte] ^= mask;

        prop_assert!(!verify(&leaves[index], &proof, tree.root(), &Keccak256, ordering));
    }

    #[test]
    fn other_leaf_is_rejected(
        items in items(40),
        ordering in ordering(),
        proven in any::<prop::sample::Index>(),
        substitute in any::<prop::sample::Index>(),
    ) {
        let (leaves, tree) = keccak_tree(&items, ordering);
        let proven = proven.index(leaves.len());
        let substitute = substitute.index(leaves.len());
        prop_assume!(leaves[proven] != leaves[substitute]);

        let proof = tree.proof(proven).unwrap();
        prop_assert!(!verify(&leaves[substitute], &proof, tree.root(), &Keccak256, ordering));
    }

    #[test]
    fn wrong_root_is_rejected(
        items in items(20),
        ordering in ordering(),
        other in any::<Vec<u8>>(),
    ) {
        let (leaves, tree) = keccak_tree(&items, ordering);
        let bogus = Keccak256.hash(&other);
        prop_assume!(&bogus != tree.root());

        let proof = tree.proof(0).unwrap();
        prop_assert!(!verify(&leaves[0], &proof, &bogus, &Keccak256, ordering));
    }

    #[test]
    fn sorted_proofs_ignore_sides(items in items(40), pick in any::<prop::sample::Index>()) {
        let (leaves, tree) = keccak_tree(&items, PairOrdering::Sorted);
        let index = pick.index(leaves.len());
        let mut proof = tree.proof(index).unwrap();
        for node in proof.iter_mut() {
            node.side = merkle_commit::Side::Left;
        }
        prop_assert!(verify(&leaves[index], &proof, tree.root(), &Keccak256, PairOrdering::Sorted));
    }
}
