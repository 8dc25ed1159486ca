use std::borrow::Cow;

/// An ordered multimap from raw tag key to one or more raw values.
///
/// Insertion order and original casing are preserved; keys are not unique
/// and are never coalesced or normalized at this layer — collation depends
/// on observing the source's exact bytes when choosing a representative.
#[derive(Debug, Default, Clone)]
pub struct MetadataMap<'a> {
    entries: Vec<(Cow<'a, str>, Cow<'a, str>)>,
}

impl<'a> MetadataMap<'a> {
    pub fn new() -> Self {
        MetadataMap {
            entries: Vec::new(),
        }
    }

    /// Appends a `(key, value)` pair. Silently dropped if `key` is empty —
    /// the data model guarantees no entry has an empty key, and callers
    /// parse untrusted tag bytes where an empty key is adversarial input,
    /// not a programmer error worth panicking over.
    pub fn put(&mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        self.entries.push((key, value.into()));
    }

    /// Returns the first value whose key is byte-equal to `key`, if any.
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Iterates all values matching `key`, in insertion order.
    pub fn values(&self, key: &str) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Total pair count, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order_and_casing() {
        let mut map = MetadataMap::new();
        map.put("ARTIST", "a");
        map.put("Artist", "b");
        map.put("ARTIST", "c");

        let values: Vec<_> = map.values("ARTIST").collect();
        assert_eq!(values, vec!["a", "c"]);
        assert_eq!(map.get_first("Artist"), Some("b"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn get_first_is_case_sensitive_exact_match() {
        let mut map = MetadataMap::new();
        map.put("artist", "lower");
        assert_eq!(map.get_first("ARTIST"), None);
        assert_eq!(map.get_first("artist"), Some("lower"));
    }

    #[test]
    fn empty_key_is_dropped_not_panicked() {
        let mut map = MetadataMap::new();
        map.put("", "orphaned value");
        map.put("ARTIST", "a");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_first("ARTIST"), Some("a"));
    }

    #[test]
    fn missing_key_yields_no_values() {
        let map = MetadataMap::new();
        assert_eq!(map.get_first("ARTIST"), None);
        assert_eq!(map.values("ARTIST").count(), 0);
    }
}
