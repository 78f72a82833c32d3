use std::collections::HashSet;
use rust_stemmers::Algorithm;
use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WholeTextTokenizer, WordTokenizer};

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Distinct stems of `text`, in no particular order.
    pub fn stems(&self, text: &str) -> HashSet<String> {
        self.analyze(text).into_iter().map(|token| token.text).collect()
    }

    /// Stem of the whole text as one key.
    pub fn stem(&self, text: &str) -> String {
        self.analyze(text)
            .into_iter()
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Word-by-word analyzer for definitions and notes.
    pub fn text(language: Algorithm) -> Self {
        Analyzer::new("text".to_string(), Box::new(WordTokenizer))
            .add_filter(Box::new(LowercaseFilter))
            .add_filter(Box::new(StemmerFilter::new(language)))
    }

    /// Whole-string analyzer for glosses and queries.
    pub fn phrase(language: Algorithm) -> Self {
        Analyzer::new("phrase".to_string(), Box::new(WholeTextTokenizer))
            .add_filter(Box::new(LowercaseFilter))
            .add_filter(Box::new(StemmerFilter::new(language)))
    }
}

impl Clone for Analyzer {
    fn clone(&self) -> Self {
        Analyzer {
            tokenizer: self.tokenizer.clone_box(),
            filters: self.filters.iter().map(|f| f.clone_box()).collect(),
            name: self.name.clone(),
        }
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_stems_are_distinct_and_lowercased() {
        let analyzer = Analyzer::text(Algorithm::English);
        let stems = analyzer.stems("Example after example, EXAMPLES.");

        assert!(stems.contains("exampl"));
        assert!(stems.contains("after"));
        assert_eq!(stems.len(), 2);
    }

    #[test]
    fn test_phrase_stem_matches_single_word_text_stem() {
        let text = Analyzer::text(Algorithm::English);
        let phrase = Analyzer::phrase(Algorithm::English);

        assert_eq!(phrase.stem("Going"), "go");
        assert!(text.stems("they were going").contains(&phrase.stem("going")));
    }

    #[test]
    fn test_without_lowercase_filter_case_is_kept() {
        let analyzer = Analyzer::new("raw".to_string(), Box::new(WholeTextTokenizer))
            .add_filter(Box::new(StemmerFilter::new(Algorithm::English)));
        assert_eq!(analyzer.stem("Dogs"), "Dog");
        assert_eq!(Analyzer::phrase(Algorithm::English).stem("Dogs"), "dog");
    }

    #[test]
    fn test_phrase_stem_of_empty_text() {
        assert_eq!(Analyzer::phrase(Algorithm::English).stem(""), "");
    }

    #[test]
    fn test_clone_keeps_pipeline() {
        let analyzer = Analyzer::text(Algorithm::English).clone();
        let names: Vec<&str> = analyzer.filters.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["lowercase", "stemmer"]);
        assert_eq!(analyzer.tokenizer.name(), "word");
    }
}
