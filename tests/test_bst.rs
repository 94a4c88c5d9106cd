extern crate ordered_trees;
extern crate rand;

use ordered_trees::bst::BoundedTree;
use rand::Rng;
use std::collections::BTreeSet;

#[test]
fn int_test_bst() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = BoundedTree::new();
    let mut expected = BTreeSet::new();
    for _ in 0..10000 {
        let value = rng.gen::<u32>() % 2000;

        if rng.gen::<bool>() {
            assert_eq!(tree.insert(value), expected.insert(value));
        } else {
            assert_eq!(tree.remove(&value), expected.remove(&value));
        }
    }

    assert_eq!(tree.len(), expected.len());
    assert_eq!(
        tree.in_order().into_iter().cloned().collect::<Vec<u32>>(),
        expected.into_iter().collect::<Vec<u32>>(),
    );
}
