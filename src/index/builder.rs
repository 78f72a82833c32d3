use std::collections::HashMap;
use chrono::Utc;
use indexmap::IndexMap;
use log::{debug, info};
use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{CorpusTables, Entry, EntryId, EntryType, Gloss, GlossId, RawEntry, RawField, RawGloss};
use crate::index::snapshot::{CompletionIndex, IndexSnapshot};
use crate::index::stems::StemIndex;
use crate::render::markup::{Markup, TexMarkup};
use crate::search::prefix::PrefixIndex;

/// Turns raw entry and gloss records into an [`IndexSnapshot`].
///
/// A build either returns a complete snapshot or an error; nothing is
/// carried over between builds.
pub struct IndexBuilder {
    config: Config,
    markup: Box<dyn Markup>,
    text_analyzer: Analyzer,
    phrase_analyzer: Analyzer,
    version: u64,
}

impl IndexBuilder {
    pub fn new(config: Config) -> Self {
        IndexBuilder {
            text_analyzer: Analyzer::text(config.stem_language),
            phrase_analyzer: Analyzer::phrase(config.stem_language),
            markup: Box::new(TexMarkup),
            config,
            version: 0,
        }
    }

    pub fn with_markup(mut self, markup: Box<dyn Markup>) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    pub fn build(
        &self,
        raw_entries: Vec<RawEntry>,
        raw_glosses: Vec<RawGloss>,
        tables: CorpusTables,
    ) -> Result<IndexSnapshot> {
        let mut definition_stems = StemIndex::new();
        let mut note_stems = StemIndex::new();

        let mut entries = self.load_entries(raw_entries, &tables, &mut definition_stems, &mut note_stems)?;
        self.link_references(&mut entries);

        let (glosses, gloss_stems) = self.load_glosses(raw_glosses, &entries)?;

        let mut affixes: HashMap<String, Vec<EntryId>> = HashMap::new();
        for entry in entries.values() {
            for affix in &entry.search_affixes {
                affixes.entry(affix.clone()).or_default().push(entry.id);
            }
        }

        let completions = CompletionIndex {
            words: PrefixIndex::build(entries.values().map(|e| (e.word.as_str(), e.id.value() as u64)))?,
            glosses: PrefixIndex::build(glosses.iter().map(|g| (g.text.as_str(), g.id.value() as u64)))?,
            classes: PrefixIndex::build(
                entries.values().filter_map(|e| e.grammar_class.as_deref()).map(|c| (c, 0)),
            )?,
        };

        info!(
            "Built index v{}: {} entries, {} glosses, {} definition stems, {} note stems, {} gloss stems",
            self.version,
            entries.len(),
            glosses.len(),
            definition_stems.len(),
            note_stems.len(),
            gloss_stems.len(),
        );

        Ok(IndexSnapshot {
            entries,
            glosses,
            definition_stems,
            note_stems,
            gloss_stems,
            affixes,
            tables,
            completions,
            config: self.config.clone(),
            phrase_analyzer: self.phrase_analyzer.clone(),
            version: self.version,
            built_at: Utc::now(),
        })
    }

    fn load_entries(
        &self,
        raw_entries: Vec<RawEntry>,
        tables: &CorpusTables,
        definition_stems: &mut StemIndex<EntryId>,
        note_stems: &mut StemIndex<EntryId>,
    ) -> Result<IndexMap<String, Entry>> {
        // Group by type, keeping corpus order inside each group
        let mut typed: Vec<(EntryType, RawEntry)> = raw_entries
            .into_iter()
            .filter_map(|raw| match EntryType::parse(&raw.kind) {
                Some(entry_type) => Some((entry_type, raw)),
                None => {
                    debug!("Skipping '{}' of unknown type '{}'", raw.word, raw.kind);
                    None
                }
            })
            .collect();
        typed.sort_by_key(|(entry_type, _)| *entry_type);

        let mut entries: IndexMap<String, Entry> = IndexMap::with_capacity(typed.len());

        for (entry_type, raw) in typed {
            if entries.contains_key(&raw.word) {
                return Err(Error::new(
                    ErrorKind::Integrity,
                    format!("entry '{}' appears more than once", raw.word),
                ));
            }

            let id = EntryId(entries.len());
            let mut entry = Entry::new(id, raw.word, entry_type);

            if entry_type.is_root() {
                let word = entry.word.clone();
                let truncated: String = word.chars().take(4).collect();
                entry.add_search_affix(&word);
                entry.add_search_affix(&truncated);
            }

            for field in raw.fields {
                match field {
                    RawField::Affix(affix) => {
                        entry.add_search_affix(&affix);
                        entry.affixes.push(affix);
                    }
                    RawField::GrammarClass(class) => {
                        self.apply_grammar_class(&mut entry, class, tables);
                    }
                    RawField::Definition(text) => {
                        for stem in self.text_analyzer.stems(&text) {
                            definition_stems.add(&stem, id);
                        }
                        entry.definition = Some(self.markup.render(&text));
                    }
                    RawField::Notes(text) => {
                        for stem in self.text_analyzer.stems(&text) {
                            note_stems.add(&stem, id);
                        }
                        entry.notes = Some(self.markup.render(&text));
                    }
                    RawField::Unknown { tag, .. } => {
                        debug!("Ignoring '{}' field on '{}'", tag, entry.word);
                    }
                }
            }

            entries.insert(entry.word.clone(), entry);
        }

        Ok(entries)
    }

    fn apply_grammar_class(&self, entry: &mut Entry, class: String, tables: &CorpusTables) {
        for (terminated, terminator) in &tables.terminators {
            if &class == terminated {
                entry.terminator = Some(terminator.clone());
            }
            if &class == terminator {
                entry.terminates.push(terminated.clone());
            }
        }

        if let Some(sections) = tables.cll.get(&class) {
            for &(chapter, section) in sections {
                entry.reference_links.push(self.config.reference_link(chapter, section));
            }
        }

        entry.grammar_class = Some(class);
    }

    /// Second pass: every entry exists now, so `{word}` references resolve.
    fn link_references(&self, entries: &mut IndexMap<String, Entry>) {
        for index in 0..entries.len() {
            let (definition, notes) = {
                let entry = &entries[index];
                let is_known = |word: &str| entries.contains_key(word);
                (
                    entry.definition.as_deref().map(|text| self.markup.link_references(text, &is_known)),
                    entry.notes.as_deref().map(|text| self.markup.link_references(text, &is_known)),
                )
            };

            let entry = &mut entries[index];
            entry.definition = definition;
            entry.notes = notes;
        }
    }

    fn load_glosses(
        &self,
        raw_glosses: Vec<RawGloss>,
        entries: &IndexMap<String, Entry>,
    ) -> Result<(Vec<Gloss>, StemIndex<GlossId>)> {
        let mut owned: Vec<(EntryType, EntryId, RawGloss)> = Vec::with_capacity(raw_glosses.len());

        for raw in raw_glosses {
            let Some((index, _, entry)) = entries.get_full(&raw.entry_word) else {
                return Err(Error::new(
                    ErrorKind::Integrity,
                    format!("gloss '{}' references unknown entry '{}'", raw.text, raw.entry_word),
                ));
            };
            owned.push((entry.entry_type, EntryId(index), raw));
        }

        owned.sort_by_key(|(entry_type, _, _)| *entry_type);

        let mut glosses = Vec::with_capacity(owned.len());
        let mut gloss_stems = StemIndex::new();

        for (position, (_, entry, raw)) in owned.into_iter().enumerate() {
            let id = GlossId(position);
            gloss_stems.add(&self.phrase_analyzer.stem(&raw.text), id);
            glosses.push(Gloss {
                id,
                text: raw.text,
                entry,
                sense: raw.sense,
                place: raw.place,
            });
        }

        Ok((glosses, gloss_stems))
    }
}
