use std::collections::{BTreeSet, HashMap};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::types::{CorpusTables, Entry, EntryId, Gloss, GlossId};
use crate::index::stems::StemIndex;
use crate::morphology::decomposer::AffixVocabulary;
use crate::search::prefix::PrefixIndex;

/// Prefix indexes used for completion
#[derive(Default)]
pub struct CompletionIndex {
    pub words: PrefixIndex,     // payload: entry id
    pub glosses: PrefixIndex,   // payload: gloss id
    pub classes: PrefixIndex,
}

/// Complete, read-only index state produced by one build.
///
/// Nothing mutates a snapshot after the builder returns it, so it can be
/// shared behind an `Arc` and read from any number of threads.
pub struct IndexSnapshot {
    pub entries: IndexMap<String, Entry>,
    pub glosses: Vec<Gloss>,

    pub definition_stems: StemIndex<EntryId>,
    pub note_stems: StemIndex<EntryId>,
    pub gloss_stems: StemIndex<GlossId>,

    /// Search affix -> entries carrying it, in entry order
    pub affixes: HashMap<String, Vec<EntryId>>,

    pub tables: CorpusTables,
    pub completions: CompletionIndex,

    pub config: Config,
    pub phrase_analyzer: Analyzer,

    pub version: u64,
    pub built_at: DateTime<Utc>,
}

impl IndexSnapshot {
    pub fn entry(&self, id: EntryId) -> &Entry {
        &self.entries[id.value()]
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    pub fn gloss(&self, id: GlossId) -> &Gloss {
        &self.glosses[id.value()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in snapshot order (grouped by type).
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Entries whose search affixes include `affix`.
    pub fn entries_with_affix(&self, affix: &str) -> &[EntryId] {
        self.affixes.get(affix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Glosses owned by `entry`.
    pub fn glosses_of(&self, entry: EntryId) -> impl Iterator<Item = &Gloss> {
        self.glosses.iter().filter(move |g| g.entry == entry)
    }

    /// Normalized stem of a free-text query.
    pub fn stem(&self, text: &str) -> String {
        self.phrase_analyzer.stem(text)
    }

    /// Distinct grammar classes, sorted, with their display scale.
    pub fn grammar_classes(&self) -> Vec<(&str, Option<f32>)> {
        self.entries
            .values()
            .filter_map(|e| e.grammar_class.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|class| (class, self.tables.class_scales.get(class).copied()))
            .collect()
    }

    /// Cache validator that changes whenever a new snapshot is built.
    pub fn etag(&self) -> String {
        format!("{}-{}", self.version, self.built_at.timestamp_millis())
    }
}

impl AffixVocabulary for IndexSnapshot {
    fn contains_affix(&self, affix: &str) -> bool {
        self.affixes.contains_key(affix)
    }
}
