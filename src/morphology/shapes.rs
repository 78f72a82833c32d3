// Phonological shapes of Lojban affixes (rafsi).
//
// C = consonant, V = vowel. A compound is a chain of short forms, each
// optionally followed by a hyphen letter, ending in a vowel-final short
// form or a full five-letter form.

const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'x', 'z',
];
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

// Consonant pairs allowed at the start of a word.
const INITIAL_PAIRS: &[&str] = &[
    "bl", "br", "cf", "ck", "cl", "cm", "cn", "cp", "cr", "ct", "dj", "dr", "dz", "fl", "fr",
    "gl", "gr", "jb", "jd", "jg", "jm", "jv", "kl", "kr", "ml", "mr", "pl", "pr", "sf", "sk",
    "sl", "sm", "sn", "sp", "sr", "st", "tc", "tr", "ts", "vl", "vr", "xl", "xr", "zb", "zd",
    "zg", "zm", "zv",
];
const DIPHTHONGS: &[&str] = &["ai", "ei", "oi", "au"];

/// Letters that glue two affixes together.
pub const HYPHENS: &[char] = &['r', 'n', 'y'];

/// Hyphen required after a four-letter form.
pub const TRUNCATION_HYPHEN: char = 'y';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Ccv,
    Cvv,
    CvApostropheV,
    Cvc,
    Cvcc,
    Ccvc,
    Cvccv,
    Ccvcv,
}

/// How a shape may be placed inside a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Three-letter form, optional hyphen after it
    Short,
    /// Four-letter form, must be followed by `y`
    Truncated,
    /// Five-letter form, final position only
    Full,
}

impl Shape {
    /// Candidate lengths in the order the decomposer tries them.
    pub const LENGTHS: [usize; 3] = [5, 4, 3];

    pub fn classify(chars: &[char]) -> Option<Shape> {
        let pattern: String = chars.iter().map(|&c| pattern_letter(c)).collect();
        let initial_pair = chars.len() >= 2 && is_initial_pair(chars[0], chars[1]);

        match pattern.as_str() {
            "CCV" if initial_pair => Some(Shape::Ccv),
            "CVV" if is_diphthong(chars[1], chars[2]) => Some(Shape::Cvv),
            "CV'V" => Some(Shape::CvApostropheV),
            "CVC" => Some(Shape::Cvc),
            "CVCC" => Some(Shape::Cvcc),
            "CCVC" if initial_pair => Some(Shape::Ccvc),
            "CVCCV" => Some(Shape::Cvccv),
            "CCVCV" if initial_pair => Some(Shape::Ccvcv),
            _ => None,
        }
    }

    pub fn placement(&self) -> Placement {
        match self {
            Shape::Ccv | Shape::Cvv | Shape::CvApostropheV | Shape::Cvc => Placement::Short,
            Shape::Cvcc | Shape::Ccvc => Placement::Truncated,
            Shape::Cvccv | Shape::Ccvcv => Placement::Full,
        }
    }

    /// Whether the form may close a compound.
    pub fn can_end_word(&self) -> bool {
        !matches!(self, Shape::Cvc | Shape::Cvcc | Shape::Ccvc)
    }
}

fn pattern_letter(c: char) -> char {
    if CONSONANTS.contains(&c) {
        'C'
    } else if VOWELS.contains(&c) {
        'V'
    } else if c == '\'' {
        '\''
    } else {
        '?'
    }
}

fn is_initial_pair(a: char, b: char) -> bool {
    INITIAL_PAIRS.iter().any(|pair| {
        let mut letters = pair.chars();
        letters.next() == Some(a) && letters.next() == Some(b)
    })
}

fn is_diphthong(a: char, b: char) -> bool {
    DIPHTHONGS.iter().any(|d| {
        let mut letters = d.chars();
        letters.next() == Some(a) && letters.next() == Some(b)
    })
}
