use std::borrow::Borrow;
use std::cmp::Ordering;

/// A key-value pair that is ordered by its key alone.
///
/// This is the element type `KeyedMap<K, V>` stores in its underlying tree. Keys compare in their
/// natural order.
#[derive(Debug)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Pair { key, value }
    }
}

impl<K, V> Borrow<K> for Pair<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

impl<K, V> Ord for Pair<K, V>
where
    K: Ord,
{
    fn cmp(&self, other: &Pair<K, V>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> PartialOrd for Pair<K, V>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Pair<K, V>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, V> PartialEq for Pair<K, V>
where
    K: Ord,
{
    fn eq(&self, other: &Pair<K, V>) -> bool {
        self.key == other.key
    }
}

impl<K, V> Eq for Pair<K, V> where K: Ord {}

#[cfg(test)]
mod tests {
    use super::Pair;
    use std::borrow::Borrow;

    #[test]
    fn test_ordering_ignores_value() {
        assert_eq!(Pair::new(1, "a"), Pair::new(1, "b"));
        assert!(Pair::new(1, "z") < Pair::new(2, "a"));
    }

    #[test]
    fn test_borrow_key() {
        let pair = Pair::new(String::from("x"), 0);
        let key: &String = pair.borrow();
        assert_eq!(key, "x");
    }
}
