//! Part-of-speech categories over Penn Treebank tags
//!
//! Keeps tagset knowledge in one place so the finders can ask "is this a
//! preposition" rather than matching raw tags.

/// Coarse category, following the universal tagset with pre/postpositions
/// and particles merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCategory {
    Noun,
    Adjective,
    Adverb,
    Verb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

const NOUN_TAGS: &[&str] = &["NN", "NNP", "NNPS", "NNS"];
const PRONOUN_TAGS: &[&str] = &["PRP", "PRP$", "WP", "WP$"];
const ADJECTIVE_TAGS: &[&str] = &["JJ", "JJR", "JJS"];
const ADVERB_TAGS: &[&str] = &["RB", "RBR", "RBS", "WRB"];
const VERB_TAGS: &[&str] = &["MD", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];
const PREPOSITION_TAGS: &[&str] = &["IN", "POS", "RP", "TO"];
const DETERMINER_TAGS: &[&str] = &["DT", "WDT", "PDT", "EX"];
const CONJUNCTION_TAGS: &[&str] = &["CC"];
const NUMBER_TAGS: &[&str] = &["CD"];
const PUNCTUATION_TAGS: &[&str] = &[
    ".", ",", ";", ":", "!", "?", // sentence punctuation
    "-lrb-", "-rrb-", "[", "]", "(", ")", // brackets
    "\"", "`", "'", // quotes
    "-", "--", "*", "/", "\\", "$",
];

const PUNCTUATION_CHARS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '\'', '`', '"', '-', '*', '/', '\\',
];

/// Tags that mark comparative or superlative adjectives/adverbs
pub const COMPARATIVE_TAGS: &[&str] = &["JJR", "JJS", "RBR", "RBS"];

/// Lower-cased forms that usually head a comparison
pub const COMPARATIVE_CUES: &[&str] = &["as", "more", "less", "most", "least"];

impl PosCategory {
    /// Category of a tag, `None` for an empty tag
    pub fn of(pos: &str) -> Option<PosCategory> {
        if pos.is_empty() {
            return None;
        }
        let category = if NOUN_TAGS.contains(&pos) {
            PosCategory::Noun
        } else if ADJECTIVE_TAGS.contains(&pos) {
            PosCategory::Adjective
        } else if ADVERB_TAGS.contains(&pos) {
            PosCategory::Adverb
        } else if VERB_TAGS.contains(&pos) {
            PosCategory::Verb
        } else if PRONOUN_TAGS.contains(&pos) {
            PosCategory::Pronoun
        } else if PREPOSITION_TAGS.contains(&pos) {
            PosCategory::Preposition
        } else if DETERMINER_TAGS.contains(&pos) {
            PosCategory::Determiner
        } else if CONJUNCTION_TAGS.contains(&pos) {
            PosCategory::Conjunction
        } else if NUMBER_TAGS.contains(&pos) {
            PosCategory::Number
        } else if PUNCTUATION_TAGS.contains(&pos) {
            PosCategory::Punctuation
        } else {
            PosCategory::Other
        };
        Some(category)
    }
}

pub fn is_noun(pos: &str) -> bool {
    NOUN_TAGS.contains(&pos)
}

pub fn is_adjective(pos: &str) -> bool {
    ADJECTIVE_TAGS.contains(&pos)
}

pub fn is_verb(pos: &str) -> bool {
    VERB_TAGS.contains(&pos)
}

pub fn is_preposition(pos: &str) -> bool {
    PREPOSITION_TAGS.contains(&pos)
}

pub fn is_determiner(pos: &str) -> bool {
    DETERMINER_TAGS.contains(&pos)
}

pub fn is_conjunction(pos: &str) -> bool {
    CONJUNCTION_TAGS.contains(&pos)
}

pub fn is_punctuation(pos: &str) -> bool {
    PUNCTUATION_TAGS.contains(&pos)
}

/// JJR, JJS, RBR or RBS
pub fn is_comparative(pos: &str) -> bool {
    COMPARATIVE_TAGS.contains(&pos)
}

/// Form (already lower-cased) is one of the common comparative cue words
pub fn is_comparative_cue(form: &str) -> bool {
    COMPARATIVE_CUES.contains(&form)
}

/// Both tags fall into the same category
pub fn same_category(pos1: &str, pos2: &str) -> bool {
    PosCategory::of(pos1) == PosCategory::of(pos2)
}

/// True if the surface form consists only of punctuation characters.
/// Empty forms are not punctuation.
pub fn is_punctuation_form(form: &str) -> bool {
    !form.is_empty() && form.chars().all(|c| PUNCTUATION_CHARS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(PosCategory::of("NNS"), Some(PosCategory::Noun));
        assert_eq!(PosCategory::of("JJR"), Some(PosCategory::Adjective));
        assert_eq!(PosCategory::of("TO"), Some(PosCategory::Preposition));
        assert_eq!(PosCategory::of("EX"), Some(PosCategory::Determiner));
        assert_eq!(PosCategory::of(","), Some(PosCategory::Punctuation));
        assert_eq!(PosCategory::of("UH"), Some(PosCategory::Other));
        assert_eq!(PosCategory::of(""), None);
    }

    #[test]
    fn test_comparatives() {
        assert!(is_comparative("RBS"));
        assert!(!is_comparative("JJ"));
        assert!(is_comparative_cue("more"));
        assert!(!is_comparative_cue("More"));
    }

    #[test]
    fn test_punctuation_form() {
        assert!(is_punctuation_form("..."));
        assert!(is_punctuation_form("--"));
        assert!(!is_punctuation_form("a."));
        assert!(!is_punctuation_form(""));
    }

    #[test]
    fn test_same_category() {
        assert!(same_category("NN", "NNPS"));
        assert!(!same_category("NN", "VB"));
    }
}
