use std::cmp::min;
use std::mem;

/// Damerau-Levenshtein distance, optimal string alignment variant.
///
/// Counts insertions, deletions, substitutions and transpositions of two
/// adjacent characters as one edit each. Works on chars, not bytes.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    bounded_damerau_levenshtein(a, b, usize::MAX).unwrap_or(usize::MAX)
}

/// Same as [`damerau_levenshtein`] but gives up with `None` as soon as the
/// distance is known to exceed `limit`.
pub fn bounded_damerau_levenshtein(a: &str, b: &str, limit: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > limit {
        return None;
    }
    if a.is_empty() {
        return Some(b.len());
    }
    if b.is_empty() {
        return Some(a.len());
    }

    let mut prev_two: Vec<usize> = (0..=b.len()).collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr[j] = min(
                min(
                    prev[j] + 1,     // deletion
                    curr[j - 1] + 1, // insertion
                ),
                prev[j - 1] + cost,  // substitution
            );

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr[j] = min(curr[j], prev_two[j - 2] + 1);
            }

            row_min = min(row_min, curr[j]);
        }

        // Later rows never drop below min(this row, previous row + 1).
        if row_min > limit && i < a.len() && prev.iter().min().is_some_and(|&m| m > limit) {
            return None;
        }

        mem::swap(&mut prev_two, &mut prev);
        mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= limit).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_zero() {
        assert_eq!(damerau_levenshtein("klama", "klama"), 0);
        assert_eq!(damerau_levenshtein("", ""), 0);
    }

    #[test]
    fn test_adjacent_transposition_is_one_edit() {
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("klmaa", "klama"), 1);
    }

    #[test]
    fn test_basic_edits() {
        assert_eq!(damerau_levenshtein("klema", "klama"), 1);  // substitution
        assert_eq!(damerau_levenshtein("klam", "klama"), 1);   // insertion
        assert_eq!(damerau_levenshtein("klamaa", "klama"), 1); // deletion
        assert_eq!(damerau_levenshtein("klema", "klaku"), 3);
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_optimal_string_alignment_semantics() {
        // Each substring is edited at most once.
        assert_eq!(damerau_levenshtein("ca", "abc"), 3);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("klama", "klaku"),
            ("gerku", "gekru"),
            ("mu'u", "mupli"),
            ("", "x"),
            ("kitten", "sitting"),
            ("ca", "abc"),
        ];
        for (a, b) in pairs {
            assert_eq!(damerau_levenshtein(a, b), damerau_levenshtein(b, a), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(damerau_levenshtein("café", "cafe"), 1);
        assert_eq!(damerau_levenshtein("éa", "aé"), 1);
    }

    #[test]
    fn test_bounded_agrees_with_unbounded() {
        let words = ["klama", "klaku", "klema", "lamku", "gerku", "", "k", "amalk", "kitten", "sitting"];
        for a in words {
            for b in words {
                let full = damerau_levenshtein(a, b);
                for limit in 0..4 {
                    let bounded = bounded_damerau_levenshtein(a, b, limit);
                    if full <= limit {
                        assert_eq!(bounded, Some(full), "{} / {} limit {}", a, b, limit);
                    } else {
                        assert_eq!(bounded, None, "{} / {} limit {}", a, b, limit);
                    }
                }
            }
        }
    }
}
