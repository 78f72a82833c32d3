use std::borrow::Cow;
use rust_stemmers::{Algorithm, Stemmer};
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Reduces each token to its stem with the configured algorithm.
pub struct StemmerFilter {
    pub algorithm: Algorithm,
}

impl StemmerFilter {
    pub fn new(algorithm: Algorithm) -> Self {
        StemmerFilter { algorithm }
    }
}

impl TokenFilter for StemmerFilter {
    fn filter(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        let stemmer = Stemmer::create(self.algorithm);

        for token in tokens.iter_mut() {
            // Borrowed means the token is already its own stem
            if let Cow::Owned(stem) = stemmer.stem(&token.text) {
                token.text = stem;
            }
        }
        tokens.retain(|token| !token.text.is_empty());
        tokens
    }

    fn name(&self) -> &str {
        "stemmer"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StemmerFilter::new(self.algorithm))
    }
}
