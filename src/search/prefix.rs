use fst::{IntoStreamer, Map, MapBuilder, Streamer};
use crate::core::error::Result;

/// FST-based index for prefix completion
pub struct PrefixIndex {
    /// Finite state transducer over the distinct terms
    fst: Map<Vec<u8>>,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self { fst: Map::default() }
    }
}

impl PrefixIndex {
    /// Build FST from `(term, payload)` pairs. A repeated term keeps the
    /// payload it was first seen with.
    pub fn build<'a, I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut sorted_terms: Vec<(&str, u64)> = terms.into_iter().collect();

        // FST requires sorted, unique input
        sorted_terms.sort_by(|a, b| a.0.cmp(b.0));
        sorted_terms.dedup_by(|later, earlier| later.0 == earlier.0);

        let mut builder = MapBuilder::memory();
        for (term, payload) in sorted_terms {
            builder.insert(term.as_bytes(), payload)?;
        }

        Ok(Self { fst: builder.into_map() })
    }

    pub fn len(&self) -> usize {
        self.fst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fst.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<u64> {
        self.fst.get(term)
    }

    /// Terms starting with `prefix`, in lexicographic order
    pub fn search_prefix(&self, prefix: &str) -> Vec<(String, u64)> {
        let mut results = Vec::new();
        let prefix_bytes = prefix.as_bytes();

        // Range scan from the prefix, stop at the first non-matching term
        let mut stream = self.fst.range().ge(prefix_bytes).into_stream();

        while let Some((term_bytes, payload)) = stream.next() {
            if !term_bytes.starts_with(prefix_bytes) {
                break;
            }

            if let Ok(term) = std::str::from_utf8(term_bytes) {
                results.push((term.to_string(), payload));
            }
        }

        results
    }
}
