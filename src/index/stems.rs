use std::collections::HashMap;

/// Stem -> duplicate-free list of items, in the order they were added.
#[derive(Debug, Clone)]
pub struct StemIndex<T> {
    buckets: HashMap<String, Vec<T>>,
}

impl<T> Default for StemIndex<T> {
    fn default() -> Self {
        StemIndex { buckets: HashMap::new() }
    }
}

impl<T: Copy + PartialEq> StemIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` under `stem` unless it is already there.
    pub fn add(&mut self, stem: &str, item: T) {
        if stem.is_empty() {
            return;
        }
        let bucket = self.buckets.entry(stem.to_string()).or_default();
        if !bucket.contains(&item) {
            bucket.push(item);
        }
    }

    /// Items indexed under `stem`; empty on a miss.
    pub fn get(&self, stem: &str) -> &[T] {
        self.buckets.get(stem).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_stem(&self, stem: &str) -> bool {
        self.buckets.contains_key(stem)
    }

    /// Number of distinct stems
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_order_and_skips_duplicates() {
        let mut index = StemIndex::new();
        index.add("exampl", 3);
        index.add("exampl", 1);
        index.add("exampl", 3);

        assert_eq!(index.get("exampl"), &[3, 1]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_miss_is_empty_not_error() {
        let index: StemIndex<u32> = StemIndex::new();
        assert!(index.get("nothing").is_empty());
        assert!(!index.contains_stem("nothing"));
    }

    #[test]
    fn test_empty_stem_is_ignored() {
        let mut index = StemIndex::new();
        index.add("", 1);
        assert!(index.is_empty());
    }
}
