use std::collections::HashMap;
use std::hash::Hash;

/// Map that remembers the order in which keys were first inserted.
///
/// Iteration yields groups in first-encounter order, independent of hashing.
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    order: Vec<K>,
    values: HashMap<K, V>,
}

impl<K, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedGroups<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the group for `key`, creating it with `init` on first sight.
    pub fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        if !self.values.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.values.entry(key).or_insert_with(init)
    }
}

impl<K: Eq + Hash, V> IntoIterator for OrderedGroups<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        let mut values = self.values;
        self.order
            .into_iter()
            .filter_map(|key| values.remove(&key).map(|value| (key, value)))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_first_insertion_order() {
        let mut groups: OrderedGroups<&str, i32> = OrderedGroups::new();
        *groups.entry_or_insert_with("gold", || 0) += 1;
        *groups.entry_or_insert_with("stocks", || 0) += 2;
        *groups.entry_or_insert_with("gold", || 0) += 3;
        *groups.entry_or_insert_with("crypto", || 0) += 4;

        assert_eq!(
            groups.into_iter().collect::<Vec<_>>(),
            vec![("gold", 4), ("stocks", 2), ("crypto", 4)]
        );
    }

    #[test]
    fn test_empty() {
        let groups: OrderedGroups<String, i32> = OrderedGroups::new();
        assert_eq!(groups.into_iter().count(), 0);
    }
}
