//! Binary search tree without any rebalancing. Its shape, and therefore its height, depends
//! entirely on the order of insertions and removals.

mod bounded;
mod node;
mod tree;

pub use self::bounded::BoundedTree;
