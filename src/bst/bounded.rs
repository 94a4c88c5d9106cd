use crate::bst::tree;
use crate::ordered::OrderedTree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered container implemented using an unbalanced binary search tree.
///
/// `BoundedTree<T>` supports the same operations as `AvlTree<T>` but never restructures itself,
/// so a sorted sequence of insertions degenerates into a list. When a removed node has two
/// children, it takes over the value of its in-order predecessor.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BoundedTree;
///
/// let mut tree = BoundedTree::new();
/// assert!(tree.insert(10));
/// assert!(tree.insert(20));
/// assert!(tree.insert(30));
///
/// assert_eq!(tree.pre_order(), vec![&10, &20, &30]);
/// assert!(!tree.is_balanced());
///
/// assert!(tree.remove(&20));
/// assert_eq!(tree.in_order(), vec![&10, &30]);
/// ```
pub struct BoundedTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> BoundedTree<T> {
    /// Constructs a new, empty `BoundedTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BoundedTree;
    ///
    /// let tree: BoundedTree<u32> = BoundedTree::new();
    /// ```
    pub fn new() -> Self {
        BoundedTree { tree: None, len: 0 }
    }

    /// Inserts a value into the tree. Returns `false`, leaving the tree unchanged, if an equal
    /// value already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BoundedTree;
    ///
    /// let mut tree = BoundedTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let BoundedTree { ref mut tree, ref mut len } = self;
        let inserted = tree::insert(tree, value);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Removes a value from the tree. Returns `true` if the value was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes a value from the tree and returns it. Returns `None` if the value was absent.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let BoundedTree { ref mut tree, ref mut len } = self;
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
    /// use ordered_trees::bst::BoundedTree;
    ///
    /// let mut tree = BoundedTree::new();
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

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree: `-1` when empty and `0` for a single element. Heights are
    /// not cached, so this walks the entire tree.
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Checks that the heights of the two subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        tree::balanced_height(&self.tree).is_some()
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::in_order(&self.tree, &mut ret);
        ret
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::pre_order(&self.tree, &mut ret);
        ret
    }

    pub fn post_order(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::post_order(&self.tree, &mut ret);
        ret
    }
}

impl<T> OrderedTree<T> for BoundedTree<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        BoundedTree::insert(self, value)
    }

    fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        BoundedTree::take(self, value)
    }

    fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        BoundedTree::get(self, value)
    }

    fn get_mut<Q>(&mut self, value: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        BoundedTree::get_mut(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        BoundedTree::clear(self)
    }

    fn in_order(&self) -> Vec<&T> {
        BoundedTree::in_order(self)
    }

    fn pre_order(&self) -> Vec<&T> {
        BoundedTree::pre_order(self)
    }

    fn post_order(&self) -> Vec<&T> {
        BoundedTree::post_order(self)
    }
}

impl<T> FromIterator<T> for BoundedTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BoundedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BoundedTree<T>
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

impl<T> fmt::Debug for BoundedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> Default for BoundedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
