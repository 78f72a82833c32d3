use indexmap::IndexMap;
use log::debug;
use crate::core::types::EntryId;
use crate::index::snapshot::IndexSnapshot;
use crate::morphology::decomposer::MorphemeDecomposer;
use crate::query::types::{Completion, CompletionKind, Match, MorphemeMatch, QueryResult, Strategy, Suggestions};
use crate::search::fuzzy::FuzzyAutomaton;

/// Resolves free-text queries against one snapshot. Never mutates it.
pub struct QueryResolver<'a> {
    snapshot: &'a IndexSnapshot,
}

impl<'a> QueryResolver<'a> {
    pub fn new(snapshot: &'a IndexSnapshot) -> Self {
        QueryResolver { snapshot }
    }

    pub fn resolve(&self, query: &str) -> QueryResult {
        let snapshot = self.snapshot;
        let query_stem = snapshot.stem(query);

        let mut matches: IndexMap<EntryId, Strategy> = IndexMap::new();
        let mut add = |entry: EntryId, strategy: Strategy| {
            matches.entry(entry).or_insert(strategy);
        };

        // 1. Exact word
        let exact = snapshot.get(query).map(|entry| entry.id);
        if let Some(id) = exact {
            add(id, Strategy::ExactWord);
        }

        // 2. Glosses sharing the query stem
        for &gloss in snapshot.gloss_stems.get(&query_stem) {
            add(snapshot.gloss(gloss).entry, Strategy::GlossStem);
        }

        // 3. Search affixes, unstemmed
        for &id in snapshot.entries_with_affix(query) {
            add(id, Strategy::Affix);
        }

        // 4. Grammar class or class family
        for entry in snapshot.iter() {
            if entry.grammar_class.as_deref() == Some(query) || entry.class_family() == Some(query) {
                add(entry.id, Strategy::GrammarClass);
            }
        }

        // 5. Entry type
        for entry in snapshot.iter() {
            if entry.entry_type.as_str() == query {
                add(entry.id, Strategy::EntryType);
            }
        }

        // 6. and 7. Definition and note stems
        for &id in snapshot.definition_stems.get(&query_stem) {
            add(id, Strategy::DefinitionStem);
        }
        for &id in snapshot.note_stems.get(&query_stem) {
            add(id, Strategy::NoteStem);
        }

        let matches: Vec<Match> = matches
            .into_iter()
            .map(|(entry, strategy)| Match { entry, strategy })
            .collect();

        let suggestions = if matches.is_empty() && !query.is_empty() {
            Some(self.suggest(query, &matches))
        } else {
            None
        };

        QueryResult {
            query: query.to_string(),
            query_stem,
            exact,
            matches,
            suggestions,
        }
    }

    fn suggest(&self, query: &str, matches: &[Match]) -> Suggestions {
        let mut suggestions = self.morpheme_suggestions(query);
        suggestions.near_misses = self.near_misses(query, matches);
        suggestions
    }

    /// Explain a compound through the entries its affixes come from.
    fn morpheme_suggestions(&self, query: &str) -> Suggestions {
        let snapshot = self.snapshot;
        let config = &snapshot.config;
        let decomposer = MorphemeDecomposer::new(
            snapshot,
            config.max_decomposition_steps,
            config.max_decomposition_len,
        );

        let mut suggestions = Suggestions::default();

        let morphemes = match decomposer.decompose(query) {
            Ok(morphemes) => morphemes,
            Err(err) => {
                debug!("No decomposition for '{}': {}", query, err);
                suggestions.unknown_affixes = true;
                return suggestions;
            }
        };

        for morpheme in morphemes.into_iter().filter(|m| m.chars().count() > 1) {
            // Several entries may share an affix; the first in snapshot order is kept.
            match snapshot.entries_with_affix(&morpheme).first() {
                Some(&entry) => suggestions.morpheme_matches.push(MorphemeMatch { morpheme, entry }),
                None => suggestions.unknown_affixes = true,
            }
        }

        suggestions
    }

    /// Entry words, then gloss texts, exactly one edit from the query.
    fn near_misses(&self, query: &str, matches: &[Match]) -> Vec<String> {
        let snapshot = self.snapshot;
        let distance = snapshot.config.near_miss_distance;
        let automaton = FuzzyAutomaton::new(query, distance).build();
        let matched = |entry: EntryId| matches.iter().any(|m| m.entry == entry);

        let mut similar: Vec<String> = snapshot
            .iter()
            .filter(|entry| !matched(entry.id) && automaton.is_at_distance(&entry.word, distance))
            .map(|entry| entry.word.clone())
            .collect();

        for gloss in &snapshot.glosses {
            if matched(gloss.entry) || similar.contains(&gloss.text) {
                continue;
            }
            if automaton.is_at_distance(&gloss.text, distance) {
                similar.push(gloss.text.clone());
            }
        }

        similar
    }

    /// Interleaved completions: entry word, gloss, grammar class per round.
    pub fn complete(&self, prefix: &str) -> Vec<Completion> {
        let snapshot = self.snapshot;
        let completions = &snapshot.completions;

        let mut words = completions.words.search_prefix(prefix).into_iter();
        let mut glosses = completions.glosses.search_prefix(prefix).into_iter();
        let mut classes = completions.classes.search_prefix(prefix).into_iter();

        let mut results = Vec::new();
        for _ in 0..snapshot.config.completion_limit {
            if let Some((word, id)) = words.next() {
                let kind = CompletionKind::Entry(snapshot.entry(EntryId(id as usize)).entry_type);
                results.push(Completion { text: word, kind });
            }
            if let Some((text, _)) = glosses.next() {
                results.push(Completion { text, kind: CompletionKind::Gloss });
            }
            if let Some((class, _)) = classes.next() {
                results.push(Completion { text: class, kind: CompletionKind::Class });
            }
        }

        results
    }
}
