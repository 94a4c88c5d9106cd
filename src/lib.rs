#![cfg_attr(feature = "clippy", feature(plugin))]
#![cfg_attr(feature = "clippy", plugin(clippy))]

//! Ordered containers backed by binary search trees.
//!
//! [`AvlTree`](avl_tree/struct.AvlTree.html) is a height-balanced tree and
//! [`BoundedTree`](bst/struct.BoundedTree.html) is its unbalanced counterpart. Both implement
//! [`OrderedTree`](trait.OrderedTree.html), which [`KeyedMap`](map/struct.KeyedMap.html) and
//! [`OrderedSet`](set/struct.OrderedSet.html) are generic over.

#[macro_use]
extern crate log;

mod entry;
mod ordered;
pub mod avl_tree;
pub mod bst;
pub mod map;
pub mod set;

pub use self::entry::Pair;
pub use self::ordered::OrderedTree;
