use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::core::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub usize);

impl EntryId {
    pub fn value(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GlossId(pub usize);

impl GlossId {
    pub fn value(&self) -> usize {
        self.0
    }
}

/// Lexical category of an entry. Declaration order is the index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "gismu")]
    RootWord,
    #[serde(rename = "cmavo")]
    Particle,
    #[serde(rename = "cmavo cluster")]
    ParticleCluster,
    #[serde(rename = "lujvo")]
    Compound,
    #[serde(rename = "fu'ivla")]
    LoanWord,
    #[serde(rename = "experimental gismu")]
    ExperimentalRootWord,
    #[serde(rename = "experimental cmavo")]
    ExperimentalParticle,
    #[serde(rename = "cmene")]
    Name,
}

impl EntryType {
    pub const ALL: [EntryType; 8] = [
        EntryType::RootWord,
        EntryType::Particle,
        EntryType::ParticleCluster,
        EntryType::Compound,
        EntryType::LoanWord,
        EntryType::ExperimentalRootWord,
        EntryType::ExperimentalParticle,
        EntryType::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::RootWord => "gismu",
            EntryType::Particle => "cmavo",
            EntryType::ParticleCluster => "cmavo cluster",
            EntryType::Compound => "lujvo",
            EntryType::LoanWord => "fu'ivla",
            EntryType::ExperimentalRootWord => "experimental gismu",
            EntryType::ExperimentalParticle => "experimental cmavo",
            EntryType::Name => "cmene",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EntryType::RootWord => "Root words.",
            EntryType::Particle => "Particles.",
            EntryType::ParticleCluster => "Particle combinations.",
            EntryType::Compound => "Compound words.",
            EntryType::LoanWord => "Loan words.",
            EntryType::ExperimentalRootWord => "Non-standard root words.",
            EntryType::ExperimentalParticle => "Non-standard particles.",
            EntryType::Name => "Names.",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        EntryType::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Root words are searchable by their full form and 4-letter truncation.
    pub fn is_root(&self) -> bool {
        matches!(self, EntryType::RootWord | EntryType::ExperimentalRootWord)
    }
}

/// One dictionary headword.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub word: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub affixes: Vec<String>,
    pub search_affixes: Vec<String>,
    pub grammar_class: Option<String>,
    pub terminator: Option<String>,
    pub terminates: Vec<String>,
    pub reference_links: Vec<(String, String)>,
    pub definition: Option<String>,
    pub notes: Option<String>,
}

impl Entry {
    pub fn new(id: EntryId, word: String, entry_type: EntryType) -> Self {
        Entry {
            id,
            word,
            entry_type,
            affixes: Vec::new(),
            search_affixes: Vec::new(),
            grammar_class: None,
            terminator: None,
            terminates: Vec::new(),
            reference_links: Vec::new(),
            definition: None,
            notes: None,
        }
    }

    pub fn add_search_affix(&mut self, affix: &str) {
        if !self.search_affixes.iter().any(|a| a == affix) {
            self.search_affixes.push(affix.to_string());
        }
    }

    pub fn has_search_affix(&self, affix: &str) -> bool {
        self.search_affixes.iter().any(|a| a == affix)
    }

    /// Grammar class with everything from the first digit or `*` removed.
    pub fn class_family(&self) -> Option<&str> {
        self.grammar_class.as_deref().map(|class| {
            let end = class
                .find(|c: char| c.is_ascii_digit() || c == '*')
                .unwrap_or(class.len());
            &class[..end]
        })
    }

    pub fn summary(&self) -> EntrySummary<'_> {
        EntrySummary {
            word: &self.word,
            entry_type: self.entry_type,
            affixes: &self.affixes,
            grammar_class: self.grammar_class.as_deref(),
            definition: self.definition.as_deref(),
            notes: self.notes.as_deref(),
        }
    }
}

/// Compact serializable view of an entry.
#[derive(Debug, Serialize)]
pub struct EntrySummary<'a> {
    pub word: &'a str,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub affixes: &'a [String],
    #[serde(rename = "grammarclass")]
    pub grammar_class: Option<&'a str>,
    pub definition: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// A natural-language word associated with an entry.
#[derive(Debug, Clone, Serialize)]
pub struct Gloss {
    pub id: GlossId,
    pub text: String,
    pub entry: EntryId,
    pub sense: Option<String>,
    pub place: Option<String>,
}

/// Child record of a raw entry, keyed by its source tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "TaggedField")]
pub enum RawField {
    Affix(String),
    GrammarClass(String),
    Definition(String),
    Notes(String),
    Unknown { tag: String, text: String },
}

#[derive(Deserialize)]
struct TaggedField {
    tag: String,
    #[serde(default)]
    text: String,
}

impl From<TaggedField> for RawField {
    fn from(field: TaggedField) -> Self {
        RawField::from_tag(&field.tag, &field.text)
    }
}

impl RawField {
    pub fn from_tag(tag: &str, text: &str) -> Self {
        match tag {
            "rafsi" => RawField::Affix(text.to_string()),
            "selmaho" => RawField::GrammarClass(text.to_string()),
            "definition" => RawField::Definition(text.to_string()),
            "notes" => RawField::Notes(text.to_string()),
            _ => RawField::Unknown {
                tag: tag.to_string(),
                text: text.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub word: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<RawField>,
}

impl RawEntry {
    pub fn new(word: &str, kind: &str) -> Self {
        RawEntry {
            word: word.to_string(),
            kind: kind.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, tag: &str, text: &str) -> Self {
        self.fields.push(RawField::from_tag(tag, text));
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGloss {
    #[serde(rename = "word")]
    pub text: String,
    #[serde(rename = "valsi")]
    pub entry_word: String,
    #[serde(default)]
    pub sense: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
}

impl RawGloss {
    pub fn new(text: &str, entry_word: &str) -> Self {
        RawGloss {
            text: text.to_string(),
            entry_word: entry_word.to_string(),
            sense: None,
            place: None,
        }
    }
}

/// Static tables consulted while building, never mutated afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorpusTables {
    /// Grammar class -> font size in ems.
    #[serde(default)]
    pub class_scales: IndexMap<String, f32>,
    /// Grammar class -> `[chapter, section]` pairs.
    #[serde(default)]
    pub cll: IndexMap<String, Vec<(u32, u32)>>,
    /// Grammar class -> class of its terminator.
    #[serde(default)]
    pub terminators: IndexMap<String, String>,
}

impl CorpusTables {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything one build consumes.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub entries: Vec<RawEntry>,
    pub glosses: Vec<RawGloss>,
    pub tables: CorpusTables,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_round_trips_through_name() {
        for t in EntryType::ALL {
            assert_eq!(EntryType::parse(t.as_str()), Some(t));
        }
        assert_eq!(EntryType::parse("zi'evla"), None);
    }

    #[test]
    fn test_class_family_cuts_at_first_digit_or_star() {
        let mut entry = Entry::new(EntryId(0), "pe'i".to_string(), EntryType::Particle);
        entry.grammar_class = Some("UI3a".to_string());
        assert_eq!(entry.class_family(), Some("UI"));

        entry.grammar_class = Some("BAI*".to_string());
        assert_eq!(entry.class_family(), Some("BAI"));

        entry.grammar_class = Some("KOhA".to_string());
        assert_eq!(entry.class_family(), Some("KOhA"));
    }

    #[test]
    fn test_unknown_tag_is_kept_as_unknown() {
        assert_eq!(
            RawField::from_tag("keyword", "x"),
            RawField::Unknown { tag: "keyword".to_string(), text: "x".to_string() }
        );
        assert_eq!(RawField::from_tag("rafsi", "kla"), RawField::Affix("kla".to_string()));
    }

    #[test]
    fn test_raw_entry_from_json_tolerates_unknown_tags() {
        let raw: RawEntry = serde_json::from_str(
            r#"{"word": "klama", "type": "gismu", "fields": [
                {"tag": "rafsi", "text": "kla"},
                {"tag": "glossword", "text": "come"}]}"#,
        ).unwrap();

        assert_eq!(raw.fields[0], RawField::Affix("kla".to_string()));
        assert!(matches!(raw.fields[1], RawField::Unknown { .. }));
    }

    #[test]
    fn test_tables_from_json() {
        let tables = CorpusTables::from_json(
            r#"{"class_scales": {"KOhA": 1.5},
                "cll": {"KOhA": [[7, 1], [7, 5]]},
                "terminators": {"LE": "KU"}}"#,
        ).unwrap();

        assert_eq!(tables.cll["KOhA"], vec![(7, 1), (7, 5)]);
        assert_eq!(tables.terminators.get("LE").map(String::as_str), Some("KU"));
        assert_eq!(tables.class_scales["KOhA"], 1.5);
    }

    #[test]
    fn test_summary_serializes_type_name() {
        let entry = Entry::new(EntryId(0), "klama".to_string(), EntryType::RootWord);
        let json = serde_json::to_value(entry.summary()).unwrap();
        assert_eq!(json["type"], "gismu");
        assert_eq!(json["word"], "klama");
    }
}
