use std::collections::HashSet;
use crate::core::error::{Error, ErrorKind, Result};
use crate::morphology::shapes::{Placement, Shape, HYPHENS, TRUNCATION_HYPHEN};

/// Source of the affix forms that really occur in the dictionary.
pub trait AffixVocabulary {
    fn contains_affix(&self, affix: &str) -> bool;
}

impl AffixVocabulary for HashSet<String> {
    fn contains_affix(&self, affix: &str) -> bool {
        self.contains(affix)
    }
}

impl<F: Fn(&str) -> bool> AffixVocabulary for F {
    fn contains_affix(&self, affix: &str) -> bool {
        self(affix)
    }
}

/// Splits a compound word into known affixes and hyphen letters.
///
/// Segmentation runs left to right and tries the longest shape first at
/// each position, backtracking to shorter shapes when the rest of the word
/// cannot be covered. Hyphen letters come back as one-character morphemes.
pub struct MorphemeDecomposer<'a, V: AffixVocabulary + ?Sized> {
    vocabulary: &'a V,
    max_steps: usize,
    max_len: usize,
}

struct Search<'w> {
    chars: &'w [char],
    morphemes: Vec<String>,
    steps: usize,
}

impl<'a, V: AffixVocabulary + ?Sized> MorphemeDecomposer<'a, V> {
    pub fn new(vocabulary: &'a V, max_steps: usize, max_len: usize) -> Self {
        Self {
            vocabulary,
            max_steps,
            max_len,
        }
    }

    pub fn decompose(&self, word: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = word.chars().collect();

        if chars.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput, "empty word".to_string()));
        }
        if chars.len() > self.max_len {
            return Err(Error::new(
                ErrorKind::Decomposition,
                format!("'{}' is longer than {} letters", word, self.max_len),
            ));
        }

        let mut search = Search {
            chars: &chars,
            morphemes: Vec::new(),
            steps: 0,
        };

        if self.segment(&mut search, 0)? {
            Ok(search.morphemes)
        } else {
            Err(Error::new(
                ErrorKind::Decomposition,
                format!("'{}' does not split into known affixes", word),
            ))
        }
    }

    fn segment(&self, search: &mut Search<'_>, pos: usize) -> Result<bool> {
        search.steps += 1;
        if search.steps > self.max_steps {
            return Err(Error::new(
                ErrorKind::Decomposition,
                format!("gave up after {} steps", self.max_steps),
            ));
        }

        let len = search.chars.len();

        for width in Shape::LENGTHS {
            let end = pos + width;
            if end > len {
                continue;
            }

            let piece = &search.chars[pos..end];
            let Some(shape) = Shape::classify(piece) else {
                continue;
            };
            let affix: String = piece.iter().collect();
            if !self.vocabulary.contains_affix(&affix) {
                continue;
            }

            let at_end = end == len;
            if at_end {
                if shape.can_end_word() {
                    search.morphemes.push(affix);
                    return Ok(true);
                }
                continue;
            }

            match shape.placement() {
                Placement::Full => {}
                Placement::Truncated => {
                    if search.chars[end] == TRUNCATION_HYPHEN
                        && self.try_next(search, affix, Some(TRUNCATION_HYPHEN), end + 1)?
                    {
                        return Ok(true);
                    }
                }
                Placement::Short => {
                    if self.try_next(search, affix.clone(), None, end)? {
                        return Ok(true);
                    }
                    let next = search.chars[end];
                    if HYPHENS.contains(&next) && self.try_next(search, affix, Some(next), end + 1)? {
                        return Ok(true);
                    }
                }
            }
        }

        Ok(false)
    }

    /// Push `affix` (and a hyphen), continue at `pos`, undo on failure.
    fn try_next(&self, search: &mut Search<'_>, affix: String, hyphen: Option<char>, pos: usize) -> Result<bool> {
        let mark = search.morphemes.len();
        search.morphemes.push(affix);
        if let Some(h) = hyphen {
            search.morphemes.push(h.to_string());
        }

        if self.segment(search, pos)? {
            return Ok(true);
        }

        search.morphemes.truncate(mark);
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> HashSet<String> {
        [
            "gerku", "gerk", "ger", "gek",
            "zdani", "zdan", "zda",
            "klama", "klam", "kla",
            "bangu", "bang", "ban", "bau",
            "sa'u", "nun", "mro",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn decompose(word: &str) -> Result<Vec<String>> {
        let vocab = vocabulary();
        MorphemeDecomposer::new(&vocab, 4096, 64).decompose(word)
    }

    #[test]
    fn test_splits_plain_concatenation() {
        assert_eq!(decompose("gerzda").unwrap(), vec!["ger", "zda"]);
        assert_eq!(decompose("klagerzda").unwrap(), vec!["kla", "ger", "zda"]);
    }

    #[test]
    fn test_final_full_form() {
        assert_eq!(decompose("klabangu").unwrap(), vec!["kla", "bangu"]);
    }

    #[test]
    fn test_truncated_form_takes_y_hyphen() {
        assert_eq!(decompose("gerkyzda").unwrap(), vec!["gerk", "y", "zda"]);
    }

    #[test]
    fn test_short_form_with_hyphen() {
        assert_eq!(decompose("nunrkla").unwrap(), vec!["nun", "r", "kla"]);
    }

    #[test]
    fn test_apostrophe_form() {
        assert_eq!(decompose("sa'ukla").unwrap(), vec!["sa'u", "kla"]);
    }

    #[test]
    fn test_backtracks_from_longer_shape() {
        // "klam" fits at position 0 but needs a y after it.
        assert_eq!(decompose("klamro").unwrap(), vec!["kla", "mro"]);
    }

    #[test]
    fn test_consonant_final_form_cannot_end_word() {
        assert!(decompose("zdager").unwrap_err().is_decomposition());
    }

    #[test]
    fn test_unknown_affix_fails() {
        let err = decompose("gerpai").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decomposition);
        assert!(decompose("").is_err());
    }

    #[test]
    fn test_affixes_are_case_sensitive() {
        assert!(decompose("GerZda").unwrap_err().is_decomposition());
        assert!(decompose("GERZDA").unwrap_err().is_decomposition());
    }

    #[test]
    fn test_fails_closed_on_step_budget() {
        let vocab = vocabulary();
        let word = "gerzda".repeat(5);
        let err = MorphemeDecomposer::new(&vocab, 3, 64).decompose(&word).unwrap_err();
        assert!(err.context.contains("gave up"));
    }

    #[test]
    fn test_rejects_overlong_input() {
        let vocab = vocabulary();
        let err = MorphemeDecomposer::new(&vocab, 4096, 8).decompose("klagerzdaklagerzda").unwrap_err();
        assert!(err.is_decomposition());
    }

    #[test]
    fn test_closure_vocabulary() {
        let vocab = |affix: &str| affix == "ger" || affix == "zda";
        let morphemes = MorphemeDecomposer::new(&vocab, 100, 64).decompose("gerzda").unwrap();
        assert_eq!(morphemes, vec!["ger", "zda"]);
    }
}
