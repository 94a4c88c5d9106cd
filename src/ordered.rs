use std::borrow::Borrow;

/// The ordered-container contract shared by `AvlTree<T>` and `BoundedTree<T>`.
///
/// Elements are unique under `Ord`. Lookups accept any borrowed form of the element type, with
/// the same requirements as `std::collections::BTreeSet`: the ordering of the borrowed form must
/// match the ordering of the element.
pub trait OrderedTree<T>: Default
where
    T: Ord,
{
    /// Inserts a value. Returns `false`, leaving the tree unchanged, if an equal value already
    /// exists.
    fn insert(&mut self, value: T) -> bool;

    /// Removes a value and returns it, or returns `None` if it does not exist.
    fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Removes a value. Returns `false` if it does not exist.
    fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Returns a mutable reference to a stored value. It is a logic error to modify the value in
    /// a way that changes its ordering relative to the other values in the tree.
    fn get_mut<Q>(&mut self, value: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;

    fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn in_order(&self) -> Vec<&T>;

    fn pre_order(&self) -> Vec<&T>;

    fn post_order(&self) -> Vec<&T>;
}
