//! Keyed and indexed lookups returning optionals.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap, VecDeque},
    hash::{BuildHasher, Hash},
};

use optvalue_core::{OptionExt, Optional};

use crate::reason::SeqReason;

/// Looks up a value by key or index.
///
/// A missing key is absent with [`SeqReason::KeyNotFound`]; a missing index
/// is absent with [`SeqReason::IndexNotFound`].
pub trait TryGet<K: ?Sized> {
    type Value;

    fn try_get(&self, key: &K) -> Optional<&Self::Value>;
}

impl<K, V, Q, S> TryGet<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn try_get(&self, key: &Q) -> Optional<&V> {
        self.get(key).into_optional_because(SeqReason::KeyNotFound)
    }
}

impl<K, V, Q> TryGet<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn try_get(&self, key: &Q) -> Optional<&V> {
        self.get(key).into_optional_because(SeqReason::KeyNotFound)
    }
}

impl<T> TryGet<usize> for [T] {
    type Value = T;

    fn try_get(&self, index: &usize) -> Optional<&T> {
        self.get(*index).into_optional_because(SeqReason::IndexNotFound)
    }
}

impl<T> TryGet<usize> for VecDeque<T> {
    type Value = T;

    fn try_get(&self, index: &usize) -> Optional<&T> {
        self.get(*index).into_optional_because(SeqReason::IndexNotFound)
    }
}

/// Looks up the first value paired with `key` in a sequence of pairs.
pub fn try_get_pair<'a, K, V, I>(pairs: I, key: &K) -> Optional<&'a V>
where
    K: PartialEq + 'a,
    V: 'a,
    I: IntoIterator<Item = &'a (K, V)>,
{
    pairs
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .into_optional_because(SeqReason::KeyNotFound)
}

#[cfg(test)]
mod tests {
    use optvalue_core::some;

    use super::*;

    #[test]
    fn maps_by_key() {
        let map = HashMap::from([("a", 1), ("b", 2)]);
        assert_eq!(map.try_get("a"), some(&1));
        let missing = map.try_get("z");
        assert_eq!(
            missing.reason().unwrap().downcast_ref::<SeqReason>(),
            Some(&SeqReason::KeyNotFound)
        );

        let tree = BTreeMap::from([(String::from("x"), 'x')]);
        assert_eq!(tree.try_get("x"), some(&'x'));
        assert_eq!(tree.try_get("y").reason().unwrap().to_string(), "key not found");
    }

    #[test]
    fn sequences_by_index() {
        let items = vec![10, 20];
        assert_eq!(items.try_get(&1), some(&20));
        assert_eq!(items.try_get(&2).reason().unwrap().to_string(), "index not found");
        let deque = VecDeque::from([1]);
        assert!(deque.try_get(&5).is_none());
    }

    #[test]
    fn pairs_by_key() {
        let pairs = vec![("a", 1), ("b", 2), ("a", 3)];
        assert_eq!(try_get_pair(&pairs, &"a"), some(&1));
        assert!(try_get_pair(&pairs, &"c").is_none());
    }
}
