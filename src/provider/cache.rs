use std::collections::HashMap;

/// Keyed problem records that keep the order slugs were first seen in.
#[derive(Debug)]
pub struct Cache<V> {
    order: Vec<String>,
    records: HashMap<String, V>,
}

impl<V> Cache<V> {
    /// Later records replace earlier ones with the same slug, the slug keeps
    /// its first position.
    pub fn from_records<I, K>(records: I, key: K) -> Self
    where
        I: IntoIterator<Item = V>,
        K: Fn(&V) -> &str,
    {
        let iter = records.into_iter();
        let mut ret = Cache {
            order: Vec::with_capacity(iter.size_hint().0),
            records: HashMap::with_capacity(iter.size_hint().0),
        };
        for record in iter {
            let slug = key(&record).to_string();
            if ret.records.insert(slug.clone(), record).is_none() {
                ret.order.push(slug);
            }
        }
        ret
    }

    pub fn get(&self, slug: &str) -> Option<&V> {
        self.records.get(slug)
    }
    pub fn contains(&self, slug: &str) -> bool {
        self.records.contains_key(slug)
    }
    pub fn slugs(&self) -> &[String] {
        &self.order
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let cache = Cache::from_records(vec!["c", "a", "b"], |v| *v);
        assert_eq!(cache.slugs(), &["c", "a", "b"]);
        assert_eq!(cache.len(), 3);
        assert!(cache.contains("a"));
        assert!(!cache.contains("d"));
    }

    #[test]
    fn last_writer_wins() {
        let cache = Cache::from_records(
            vec![("two-sum", 1), ("three-sum", 2), ("two-sum", 3)],
            |v| v.0,
        );
        assert_eq!(cache.slugs(), &["two-sum", "three-sum"]);
        assert_eq!(cache.get("two-sum"), Some(&("two-sum", 3)));
    }

    #[test]
    fn empty() {
        let cache = Cache::from_records(Vec::<&str>::new(), |v| *v);
        assert!(cache.is_empty());
        assert_eq!(cache.get("two-sum"), None);
    }
}
