//! Insertion-ordered mapping from operator names to per-operator data.

use indexmap::IndexMap;

/// An operator-name-to-value mapping that remembers insertion order.
///
/// Operators are shown in the order the run registered them. With the
/// `serde` feature the map serializes as a plain name-to-value object in
/// that order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct OperatorMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> OperatorMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a value under `name`.
    ///
    /// A new name is appended at the end. An existing name keeps its position
    /// and has its value replaced; the previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(name.into(), value)
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over operator names in insertion order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.entries.values()
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl<V: PartialEq> PartialEq for OperatorMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<V> Default for OperatorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OperatorMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<V> IntoIterator for OperatorMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let map: OperatorMap<u32> = [("zeta", 1), ("alpha", 2), ("mid", 3)]
            .into_iter()
            .collect();

        assert_eq!(map.names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn reinserting_keeps_position_and_returns_old_value() {
        let mut map = OperatorMap::new();
        map.insert("a", 1);
        map.insert("b", 2);

        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().collect::<Vec<_>>(), [("a", &10), ("b", &2)]);
    }

    #[test]
    fn get_finds_by_name() {
        let map: OperatorMap<f64> = [("random", 0.5)].into_iter().collect();
        assert_eq!(map.get("random"), Some(&0.5));
        assert_eq!(map.get("greedy"), None);
    }

    #[test]
    fn collecting_duplicate_names_keeps_first_position_and_last_value() {
        let map: OperatorMap<u32> = [("a", 1), ("b", 2), ("a", 3), ("c", 4)]
            .into_iter()
            .collect();

        assert_eq!(map.len(), 3);
        assert_eq!(
            map.into_iter().collect::<Vec<_>>(),
            [("a".to_owned(), 3), ("b".to_owned(), 2), ("c".to_owned(), 4)]
        );
    }

    #[test]
    fn many_operators_stay_in_order() {
        let map: OperatorMap<usize> = (0..1000).map(|i| (format!("op{i}"), i)).collect();

        assert_eq!(map.len(), 1000);
        assert_eq!(map.get("op999"), Some(&999));
        assert!(map.values().copied().eq(0..1000));
    }

    #[test]
    fn equality_depends_on_order() {
        let ab: OperatorMap<u32> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: OperatorMap<u32> = [("b", 2), ("a", 1)].into_iter().collect();

        assert_eq!(ab, ab.clone());
        assert_ne!(ab, ba);
    }

    #[test]
    fn empty_map() {
        let map: OperatorMap<()> = OperatorMap::default();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_ordered_object() {
        let map: OperatorMap<u32> = [("zeta", 1), ("alpha", 2)].into_iter().collect();

        let json = serde_json::to_string(&map).expect("serializable");
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }
}
