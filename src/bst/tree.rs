use crate::bst::node::Node;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// precondition: there exists a maximum node in the tree
fn remove_max<T>(tree: &mut Tree<T>) -> T {
    if let Some(ref mut node) = tree {
        if node.right.is_some() {
            return remove_max(&mut node.right);
        }
    }

    match tree.take() {
        Some(node) => {
            let Node { value, left, .. } = *node;
            *tree = left;
            value
        },
        None => unreachable!(),
    }
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            true
        },
    }
}

pub fn remove<T, Q>(tree: &mut Tree<T>, value: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match tree.take() {
        Some(mut node) => match value.cmp(node.value.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // the node keeps its position and takes over the in-order predecessor's value
                    let predecessor = remove_max(&mut node.left);
                    let ret = mem::replace(&mut node.value, predecessor);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node { value: removed, left, right } = *node;
                    *tree = left.or(right);
                    Some(removed)
                }
            },
        },
        None => None,
    }
}

pub fn get<'a, T, Q>(tree: &'a Tree<T>, value: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(node.value.borrow()) {
            Ordering::Less => get(&node.left, value),
            Ordering::Greater => get(&node.right, value),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn get_mut<'a, T, Q>(tree: &'a mut Tree<T>, value: &Q) -> Option<&'a mut T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match value.cmp(node.value.borrow()) {
            Ordering::Less => get_mut(&mut node.left, value),
            Ordering::Greater => get_mut(&mut node.right, value),
            Ordering::Equal => Some(&mut node.value),
        }
    })
}

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

pub fn balanced_height<T>(tree: &Tree<T>) -> Option<i32> {
    match tree {
        None => Some(-1),
        Some(ref node) => {
            let left = balanced_height(&node.left)?;
            let right = balanced_height(&node.right)?;
            if (left - right).abs() > 1 {
                None
            } else {
                Some(cmp::max(left, right) + 1)
            }
        },
    }
}

pub fn in_order<'a, T>(tree: &'a Tree<T>, ret: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        in_order(&node.left, ret);
        ret.push(&node.value);
        in_order(&node.right, ret);
    }
}

pub fn pre_order<'a, T>(tree: &'a Tree<T>, ret: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        ret.push(&node.value);
        pre_order(&node.left, ret);
        pre_order(&node.right, ret);
    }
}

pub fn post_order<'a, T>(tree: &'a Tree<T>, ret: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        post_order(&node.left, ret);
        post_order(&node.right, ret);
        ret.push(&node.value);
    }
}
