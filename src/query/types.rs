use serde::Serialize;
use crate::core::types::{EntryId, EntryType};

/// Matching strategies, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Strategy {
    ExactWord,
    GlossStem,
    Affix,
    GrammarClass,
    EntryType,
    DefinitionStem,
    NoteStem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub entry: EntryId,
    /// Strategy that first added the entry
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphemeMatch {
    pub morpheme: String,
    pub entry: EntryId,
}

/// Offered only when no strategy matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub morpheme_matches: Vec<MorphemeMatch>,
    /// The query did not split into affixes, or one affix has no entry
    pub unknown_affixes: bool,
    /// Entry words and gloss texts one edit away from the query
    pub near_misses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub query: String,
    pub query_stem: String,
    /// Entry whose word equals the query
    pub exact: Option<EntryId>,
    /// Insertion ordered, duplicate free
    pub matches: Vec<Match>,
    pub suggestions: Option<Suggestions>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.matches.iter().map(|m| m.entry)
    }

    pub fn contains(&self, entry: EntryId) -> bool {
        self.matches.iter().any(|m| m.entry == entry)
    }

    /// Entry the caller should redirect to: a single match that was not
    /// found by exact word lookup.
    pub fn redirect(&self) -> Option<EntryId> {
        match self.matches.as_slice() {
            [only] if self.exact.is_none() => Some(only.entry),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompletionKind {
    Entry(EntryType),
    Gloss,
    Class,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub text: String,
    pub kind: CompletionKind,
}
