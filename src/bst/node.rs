use crate::bst::tree;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T> {
    pub value: T,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}
