use crate::avl_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the balance invariant at the root of `tree`, assuming both subtrees are balanced and
// their heights differ by at most two.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    let factor = node.balance();
    if factor > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if factor < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    } else {
        node.update();
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    match tree.take() {
        Some(node) => {
            let Node { value, right, .. } = *node;
            *tree = right;
            value
        },
        None => unreachable!(),
    }
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove<T, Q>(tree: &mut Tree<T>, value: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let ret = match tree.take() {
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
                    // the node keeps its position and takes over the in-order successor's value
                    let successor = remove_min(&mut node.right);
                    let ret = mem::replace(&mut node.value, successor);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node { value: removed, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(removed)
                }
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
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

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
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

/// Returns the height of the tree recomputed from its shape, or `None` if some node has subtree
/// heights that differ by more than one. The cached heights are not consulted.
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
