use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use log::info;
use parking_lot::{Mutex, RwLock};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::Corpus;
use crate::index::builder::IndexBuilder;
use crate::index::snapshot::IndexSnapshot;
use crate::query::resolver::QueryResolver;
use crate::query::types::{Completion, QueryResult};

/// Owns the current snapshot and swaps in new ones on rebuild.
///
/// Readers take an `Arc` to the snapshot that was current when they asked;
/// a rebuild never touches it, so in-flight lookups finish on the old one.
pub struct Dictionary {
    config: Config,
    current: RwLock<Arc<IndexSnapshot>>,
    generation: AtomicU64,
    rebuild_lock: Mutex<()>,
}

impl Dictionary {
    pub fn open(corpus: Corpus, config: Config) -> Result<Self> {
        let snapshot = IndexBuilder::new(config.clone())
            .with_version(1)
            .build(corpus.entries, corpus.glosses, corpus.tables)?;

        Ok(Self {
            config,
            current: RwLock::new(Arc::new(snapshot)),
            generation: AtomicU64::new(1),
            rebuild_lock: Mutex::new(()),
        })
    }

    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.current.read().clone()
    }

    /// Build from a new corpus version and make it current. On error the
    /// previous snapshot stays in place.
    pub fn rebuild(&self, corpus: Corpus) -> Result<u64> {
        let _guard = self.rebuild_lock.lock();
        let version = self.generation.load(Ordering::SeqCst) + 1;

        // Build without holding the snapshot lock
        let snapshot = IndexBuilder::new(self.config.clone())
            .with_version(version)
            .build(corpus.entries, corpus.glosses, corpus.tables)?;

        *self.current.write() = Arc::new(snapshot);
        self.generation.store(version, Ordering::SeqCst);

        info!("Swapped in index snapshot v{}", version);
        Ok(version)
    }

    pub fn version(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn search(&self, query: &str) -> QueryResult {
        let snapshot = self.snapshot();
        QueryResolver::new(&snapshot).resolve(query)
    }

    pub fn complete(&self, prefix: &str) -> Vec<Completion> {
        let snapshot = self.snapshot();
        QueryResolver::new(&snapshot).complete(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{RawEntry, RawGloss};

    fn corpus(definition: &str) -> Corpus {
        Corpus {
            entries: vec![RawEntry::new("mupli", "gismu").with_field("definition", definition)],
            glosses: vec![RawGloss::new("example", "mupli")],
            ..Corpus::default()
        }
    }

    #[test]
    fn test_rebuild_swaps_snapshot_and_keeps_old_one_alive() {
        let dictionary = Dictionary::open(corpus("an example"), Config::default()).unwrap();
        let before = dictionary.snapshot();

        let version = dictionary.rebuild(corpus("a sample")).unwrap();
        assert_eq!(version, 2);
        assert_eq!(dictionary.snapshot().version, 2);

        // Old readers still see the old data
        assert_eq!(before.version, 1);
        assert!(!before.definition_stems.get("exampl").is_empty());
        assert!(dictionary.snapshot().definition_stems.get("exampl").is_empty());
        assert_ne!(before.etag(), dictionary.snapshot().etag());
    }

    #[test]
    fn test_failed_rebuild_keeps_current_snapshot() {
        let dictionary = Dictionary::open(corpus("an example"), Config::default()).unwrap();

        let mut broken = corpus("a sample");
        broken.glosses.push(RawGloss::new("cat", "mlatu"));
        assert!(dictionary.rebuild(broken).unwrap_err().is_construction());

        assert_eq!(dictionary.version(), 1);
        assert_eq!(dictionary.snapshot().version, 1);
    }

    #[test]
    fn test_search_and_complete_use_current_snapshot() {
        let dictionary = Dictionary::open(corpus("an example"), Config::default()).unwrap();

        let result = dictionary.search("examples");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(dictionary.complete("ex")[0].text, "example");
    }

    #[test]
    fn test_snapshot_is_shared_across_threads() {
        let dictionary = Arc::new(Dictionary::open(corpus("an example"), Config::default()).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dictionary = Arc::clone(&dictionary);
                std::thread::spawn(move || dictionary.search("mupli").exact.is_some())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
