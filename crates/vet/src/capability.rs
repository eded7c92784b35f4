use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Types that define their own notion of equality, independent of `PartialEq`.
pub trait Equals {
    /// Whether `self` and `other` are equal under the type's own rules.
    fn equals(&self, other: &Self) -> bool;
}

/// Types that define their own strict ordering, independent of `PartialOrd`.
pub trait LessThan {
    /// Whether `self` sorts strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

/// Keyed container with unique keys, lookup by key, and a known size.
pub trait MapLike {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the container has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the value stored under `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Iterates over every entry.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Self::Key, &Self::Value)> + '_>;
}

impl<K, V, S> MapLike for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V> MapLike for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}
