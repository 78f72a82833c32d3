use levenshtein_automata::{Distance, LevenshteinAutomatonBuilder, DFA};
use crate::core::utils::bounded_damerau_levenshtein;

/// Automaton for near-miss matching against one query term
pub struct FuzzyAutomaton {
    /// The term candidates are compared with
    term: String,

    /// Maximum edit distance the automaton tracks exactly
    max_edit_distance: u8,

    /// Built DFA, counting adjacent transpositions as one edit
    dfa: Option<DFA>,
}

impl FuzzyAutomaton {
    pub fn new(term: &str, max_edit_distance: u8) -> Self {
        Self {
            term: term.to_string(),
            max_edit_distance,
            dfa: None,
        }
    }

    /// Build the DFA for the term
    pub fn build(mut self) -> Self {
        let builder = LevenshteinAutomatonBuilder::new(self.max_edit_distance, true);
        self.dfa = Some(builder.build_dfa(&self.term));
        self
    }

    /// Edit distance to `candidate`, or `None` past the maximum
    pub fn distance(&self, candidate: &str) -> Option<u8> {
        match &self.dfa {
            Some(dfa) => {
                let mut state = dfa.initial_state();
                for &byte in candidate.as_bytes() {
                    state = dfa.transition(state, byte);
                }
                match dfa.distance(state) {
                    Distance::Exact(d) => Some(d),
                    Distance::AtLeast(_) => None,
                }
            }
            None => bounded_damerau_levenshtein(
                &self.term,
                candidate,
                self.max_edit_distance as usize,
            )
            .map(|d| d as u8),
        }
    }

    /// True when `candidate` is exactly `distance` edits away
    pub fn is_at_distance(&self, candidate: &str, distance: u8) -> bool {
        self.distance(candidate) == Some(distance)
    }
}
