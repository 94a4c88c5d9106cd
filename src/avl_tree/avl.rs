use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::ordered::OrderedTree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered container implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Values are unique: inserting a
/// value that compares equal to a stored one leaves the tree unchanged.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// assert!(tree.insert(10));
/// assert!(tree.insert(20));
/// assert!(tree.insert(30));
/// assert!(!tree.insert(30));
///
/// assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
/// assert!(tree.is_balanced());
///
/// assert!(tree.remove(&20));
/// assert!(!tree.contains(&20));
/// assert_eq!(tree.in_order(), vec![&10, &30]);
/// ```
pub struct AvlTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { tree: None, len: 0 }
    }

    /// Inserts a value into the tree. Returns `true` if the value was absent. If an equal value
    /// already exists, the tree is left unchanged and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let AvlTree { ref mut tree, ref mut len } = self;
        let inserted = tree::insert(tree, value);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Removes a value from the tree. Returns `true` if the value was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes a value from the tree and returns it. Returns `None` if the value was absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("a"));
    /// assert_eq!(tree.take("a"), Some(String::from("a")));
    /// assert_eq!(tree.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let AvlTree { ref mut tree, ref mut len } = self;
        tree::remove(tree, value).map(|removed| {
            *len -= 1;
            removed
        })
    }

    /// Checks if a value exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns an immutable reference to the stored value that compares equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get(&self.tree, value)
    }

    /// Returns a mutable reference to the stored value that compares equal to `value`. It is a
    /// logic error to modify the value in a way that changes its ordering.
    pub fn get_mut<Q>(&mut self, value: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, value)
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree: `-1` when empty and `0` for a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree: AvlTree<u32> = (0..7).collect();
    /// assert_eq!(tree.height(), 2);
    /// tree.clear();
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the values of the tree in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::in_order(&self.tree, &mut ret);
        ret
    }

    /// Returns the values of the tree with every node preceding its subtrees.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::pre_order(&self.tree, &mut ret);
        ret
    }

    /// Returns the values of the tree with every node following its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::post_order(&self.tree, &mut ret);
        ret
    }

    /// Checks that the heights of the two subtrees of every node differ by at most one. The check
    /// walks the whole tree and does not trust the cached heights.
    pub fn is_balanced(&self) -> bool {
        tree::balanced_height(&self.tree).is_some()
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<T> {
        AvlTreeIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> OrderedTree<T> for AvlTree<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        AvlTree::insert(self, value)
    }

    fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        AvlTree::take(self, value)
    }

    fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        AvlTree::get(self, value)
    }

    fn get_mut<Q>(&mut self, value: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        AvlTree::get_mut(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        AvlTree::clear(self)
    }

    fn in_order(&self) -> Vec<&T> {
        AvlTree::in_order(self)
    }

    fn pre_order(&self) -> Vec<&T> {
        AvlTree::pre_order(self)
    }

    fn post_order(&self) -> Vec<&T> {
        AvlTree::post_order(self)
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type IntoIter = AvlTreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type IntoIter = AvlTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned values.
pub struct AvlTreeIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert!(tree.is_empty());
        assert!(tree.is_balanced());
        assert_eq!(tree.in_order(), Vec::<&u32>::new());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(1));
        assert!(tree.contains(&1));
        assert_eq!(tree.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = AvlTree::new();
        tree.insert(2);
        tree.insert(1);
        tree.insert(3);
        assert!(!tree.insert(2));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_remove() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        assert!(tree.remove(&1));
        assert!(!tree.contains(&1));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        assert!(!tree.remove(&2));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_single_rotation() {
        let mut tree = AvlTree::new();
        tree.insert(10);
        tree.insert(20);
        tree.insert(30);
        assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
        assert_eq!(tree.post_order(), vec![&10, &30, &20]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_double_rotation() {
        let mut tree = AvlTree::new();
        tree.insert(30);
        tree.insert(10);
        tree.insert(20);
        assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_remove_with_two_children() {
        let mut tree: AvlTree<u32> = vec![20, 10, 30, 5, 15].into_iter().collect();
        assert!(tree.remove(&20));
        assert_eq!(tree.in_order(), vec![&5, &10, &15, &30]);
        assert_eq!(tree.pre_order(), vec![&10, &5, &30, &15]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_insert_remove_inverse() {
        let mut tree: AvlTree<u32> = vec![8, 4, 12, 2, 6].into_iter().collect();
        let before = tree.in_order().into_iter().cloned().collect::<Vec<u32>>();
        assert!(tree.insert(7));
        assert!(tree.remove(&7));
        assert_eq!(tree.in_order().into_iter().cloned().collect::<Vec<u32>>(), before);
    }

    #[test]
    fn test_sorted_inserts_stay_logarithmic() {
        let tree: AvlTree<u32> = (0..1023).collect();
        assert_eq!(tree.height(), 9);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_take_borrowed() {
        let mut tree = AvlTree::new();
        tree.insert(String::from("b"));
        tree.insert(String::from("a"));
        assert!(tree.contains("a"));
        assert_eq!(tree.take("b"), Some(String::from("b")));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_min_max() {
        let tree: AvlTree<u32> = vec![3, 1, 5].into_iter().collect();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut tree: AvlTree<u32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_into_iter() {
        let tree: AvlTree<u32> = vec![1, 5, 3].into_iter().collect();
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let tree: AvlTree<u32> = vec![1, 5, 3].into_iter().collect();
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_debug() {
        let tree: AvlTree<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2}");
    }
}
