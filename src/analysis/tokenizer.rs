use std::sync::LazyLock;
use regex::Regex;
use crate::analysis::token::Token;

// Letters, digits, underscore and apostrophes, Unicode-aware.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+").expect("word pattern is valid"));

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Splits definition and note text into word-like runs.
#[derive(Clone, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        WORD_PATTERN
            .find_iter(text)
            .map(|m| Token::new(m.as_str().to_string()))
            .collect()
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(WordTokenizer)
    }
}

/// Treats the whole input as one token. Glosses are stemmed this way.
#[derive(Clone, Default)]
pub struct WholeTextTokenizer;

impl Tokenizer for WholeTextTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }
        vec![Token::new(text.to_string())]
    }

    fn name(&self) -> &str {
        "whole_text"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(WholeTextTokenizer)
    }
}
