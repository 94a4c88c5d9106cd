//! Ordered set layered over an ordered tree.

use crate::avl_tree::AvlTree;
use crate::ordered::OrderedTree;
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

/// An ordered set that forwards every operation to an ordered tree, an `AvlTree` by default.
///
/// # Examples
///
/// ```
/// use ordered_trees::set::OrderedSet;
///
/// let mut set: OrderedSet<u32> = OrderedSet::new();
/// assert!(set.insert(3));
/// assert!(set.insert(1));
/// assert!(!set.insert(3));
///
/// assert!(set.search(&1));
/// assert!(set.remove(&1));
/// assert!(!set.search(&1));
/// assert_eq!(set.len(), 1);
/// ```
pub struct OrderedSet<T, C = AvlTree<T>> {
    tree: C,
    marker: PhantomData<T>,
}

impl<T, C> OrderedSet<T, C>
where
    T: Ord,
    C: OrderedTree<T>,
{
    /// Constructs a new, empty `OrderedSet<T>`.
    pub fn new() -> Self {
        OrderedSet {
            tree: C::default(),
            marker: PhantomData,
        }
    }

    /// Inserts a value into the set. Returns `false`, leaving the set unchanged, if the value
    /// already exists.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value)
    }

    /// Checks if a value exists in the set.
    pub fn search<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over a snapshot of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::set::OrderedSet;
    ///
    /// let mut set: OrderedSet<u32> = OrderedSet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.tree.in_order().into_iter()
    }
}

impl<T, C> fmt::Debug for OrderedSet<T, C>
where
    T: Ord + fmt::Debug,
    C: OrderedTree<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for OrderedSet<T, C>
where
    T: Ord,
    C: OrderedTree<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedSet;
    use crate::bst::BoundedTree;

    #[test]
    fn test_is_empty() {
        let set: OrderedSet<u32> = OrderedSet::new();
        assert!(set.is_empty());
        assert!(!set.search(&0));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set: OrderedSet<u32> = OrderedSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut set: OrderedSet<u32> = OrderedSet::new();
        set.insert(1);
        assert!(!set.remove(&2));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut set: OrderedSet<String> = OrderedSet::new();
        set.insert(String::from("a"));
        assert!(set.search("a"));
        assert!(set.remove("a"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_bounded_tree_backing() {
        let mut set: OrderedSet<u32, BoundedTree<u32>> = OrderedSet::new();
        for value in &[5, 3, 8, 1] {
            set.insert(*value);
        }
        assert!(set.remove(&3));
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &5, &8]);
    }

    #[test]
    fn test_clear() {
        let mut set: OrderedSet<u32> = OrderedSet::new();
        set.insert(1);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(format!("{:?}", set), "{}");
    }
}
