use crate::avl_tree::AvlTree;
use crate::entry::Pair;
use crate::map::{Error, Result};
use crate::ordered::OrderedTree;
use std::fmt;
use std::marker::PhantomData;

/// An ordered map layered over an ordered tree of `Pair<K, V>`.
///
/// The map is backed by an `AvlTree` unless another `OrderedTree` is named, such as
/// `BoundedTree`. Keys are kept in their natural ascending order, so `iter` yields the smallest key
/// first. Wrap keys in `std::cmp::Reverse` for a map that iterates from the largest key down.
///
/// # Examples
///
/// ```
/// use ordered_trees::map::{Error, KeyedMap};
///
/// let mut map: KeyedMap<&str, u32> = KeyedMap::new();
/// *map.at_mut("a") += 1;
/// *map.at_mut("a") += 1;
///
/// assert_eq!(map.at(&"a"), Ok(&2));
/// assert_eq!(map.at(&"b"), Err(Error::NotFound));
///
/// assert!(map.remove(&"a"));
/// assert!(map.is_empty());
/// ```
pub struct KeyedMap<K, V, C = AvlTree<Pair<K, V>>> {
    tree: C,
    marker: PhantomData<(K, V)>,
}

impl<K, V, C> KeyedMap<K, V, C>
where
    K: Ord,
    C: OrderedTree<Pair<K, V>>,
{
    /// Constructs a new, empty `KeyedMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::map::KeyedMap;
    ///
    /// let map: KeyedMap<u32, u32> = KeyedMap::new();
    /// ```
    pub fn new() -> Self {
        KeyedMap {
            tree: C::default(),
            marker: PhantomData,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists, the map is left
    /// unchanged and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::map::KeyedMap;
    ///
    /// let mut map: KeyedMap<u32, u32> = KeyedMap::new();
    /// assert!(map.insert(1, 1));
    /// assert!(!map.insert(1, 2));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(Pair::new(key, value))
    }

    /// Returns a mutable reference to the value associated with `key`, inserting a default value
    /// first if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::map::KeyedMap;
    ///
    /// let mut map: KeyedMap<&str, Vec<u32>> = KeyedMap::new();
    /// map.at_mut("x").push(1);
    /// map.at_mut("x").push(2);
    /// assert_eq!(map.get(&"x"), Some(&vec![1, 2]));
    /// ```
    pub fn at_mut(&mut self, key: K) -> &mut V
    where
        K: Clone,
        V: Default,
    {
        if !self.tree.contains(&key) {
            debug!("inserting default value for absent key");
            self.tree.insert(Pair::new(key.clone(), V::default()));
        }
        match self.tree.get_mut(&key) {
            Some(pair) => &mut pair.value,
            None => unreachable!(),
        }
    }

    /// Returns an immutable reference to the value associated with `key`, or
    /// `Error::NotFound` if the key does not exist. The map is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::map::{Error, KeyedMap};
    ///
    /// let mut map: KeyedMap<u32, u32> = KeyedMap::new();
    /// map.insert(1, 5);
    /// assert_eq!(map.at(&1), Ok(&5));
    /// assert_eq!(map.at(&2), Err(Error::NotFound));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::NotFound)
    }

    /// Removes a key from the map. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::map::KeyedMap;
    ///
    /// let mut map: KeyedMap<u32, u32> = KeyedMap::new();
    /// map.insert(1, 1);
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.tree.remove(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key).map(|pair| &pair.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key).map(|pair| &mut pair.value)
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

    /// Returns the key-value pairs of the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::map::KeyedMap;
    ///
    /// let mut map: KeyedMap<u32, char> = KeyedMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&1, &'a'), (&2, &'b')]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.tree.in_order().into_iter().map(|pair| (&pair.key, &pair.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V, C> fmt::Debug for KeyedMap<K, V, C>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
    C: OrderedTree<Pair<K, V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for KeyedMap<K, V, C>
where
    K: Ord,
    C: OrderedTree<Pair<K, V>>,
{
    fn default() -> Self {
        Self::new()
    }
}
