//! Locate tokens and token sequences in a sentence
//!
//! Results are word positions. Sequence matches never overlap.

use crate::tree::Sentence;
use crate::word::{Word, WordId};

/// How tokens are compared with words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    /// Skip words that are predicates (tokens), or candidates that start on one
    /// (sequences)
    pub ignore_predicates: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            ignore_predicates: false,
        }
    }
}

/// Word attribute a single token is compared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchField {
    #[default]
    Form,
    Lemma,
    Pos,
    Deprel,
}

impl MatchField {
    fn value(self, word: &Word) -> &str {
        match self {
            MatchField::Form => &word.form,
            MatchField::Lemma => &word.lemma,
            MatchField::Pos => &word.pos,
            MatchField::Deprel => &word.deprel,
        }
    }
}

fn same_token(token: &str, value: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        token == value
    } else {
        token.to_lowercase() == value.to_lowercase()
    }
}

/// First word whose `field` equals `token`
pub fn find_token(
    sentence: &Sentence,
    token: &str,
    field: MatchField,
    options: MatchOptions,
) -> Option<WordId> {
    token_matches(sentence, token, field, options).next()
}

/// All words whose `field` equals `token`, in sentence order
pub fn find_all_tokens(
    sentence: &Sentence,
    token: &str,
    field: MatchField,
    options: MatchOptions,
) -> Vec<WordId> {
    token_matches(sentence, token, field, options).collect()
}

fn token_matches<'a>(
    sentence: &'a Sentence,
    token: &'a str,
    field: MatchField,
    options: MatchOptions,
) -> impl Iterator<Item = WordId> + 'a {
    sentence
        .words()
        .iter()
        .enumerate()
        .filter(move |(_, word)| {
            same_token(token, field.value(word), options.case_sensitive)
                && !(options.ignore_predicates && word.is_predicate())
        })
        .map(|(i, _)| i + 1)
}

/// Positions of the first run of words whose forms equal `tokens`
pub fn find_sequence<S: AsRef<str>>(
    sentence: &Sentence,
    tokens: &[S],
    options: MatchOptions,
) -> Option<Vec<WordId>> {
    scan_sequences(sentence, tokens, options, true).into_iter().next()
}

/// Positions of every non-overlapping run of words whose forms equal
/// `tokens`, scanning left to right
pub fn find_all_sequences<S: AsRef<str>>(
    sentence: &Sentence,
    tokens: &[S],
    options: MatchOptions,
) -> Vec<Vec<WordId>> {
    scan_sequences(sentence, tokens, options, false)
}

fn scan_sequences<S: AsRef<str>>(
    sentence: &Sentence,
    tokens: &[S],
    options: MatchOptions,
    first_only: bool,
) -> Vec<Vec<WordId>> {
    let words = sentence.words();
    let mut found = Vec::new();
    if tokens.is_empty() || tokens.len() > words.len() {
        return found;
    }

    let mut start = 0;
    while start + tokens.len() <= words.len() {
        let window = &words[start..start + tokens.len()];
        let matches = window
            .iter()
            .zip(tokens)
            .all(|(word, token)| same_token(token.as_ref(), &word.form, options.case_sensitive));

        if matches && !(options.ignore_predicates && window[0].is_predicate()) {
            found.push((start + 1..=start + tokens.len()).collect());
            if first_only {
                break;
            }
            start += tokens.len();
        } else {
            start += 1;
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srl::SrlSentence;
    use crate::types::{PredicateDirection, PredicateType};

    fn options() -> MatchOptions {
        MatchOptions::default()
    }

    #[test]
    fn test_find_sequence() {
        let sentence = Sentence::from_tokenized("the camera is better than the old camera");
        assert_eq!(
            find_sequence(&sentence, &["better", "than"], options()),
            Some(vec![4, 5])
        );
        assert_eq!(find_sequence(&sentence, &["than", "better"], options()), None);
        assert_eq!(find_sequence::<&str>(&sentence, &[], options()), None);
    }

    #[test]
    fn test_find_sequence_restarts_after_partial_match() {
        let sentence = Sentence::from_tokenized("a a b");
        assert_eq!(find_sequence(&sentence, &["a", "b"], options()), Some(vec![2, 3]));
    }

    #[test]
    fn test_find_all_sequences_do_not_overlap() {
        let sentence = Sentence::from_tokenized("x x x x x");
        let found = find_all_sequences(&sentence, &["x", "x"], options());
        assert_eq!(found, vec![vec![1, 2], vec![3, 4]]);

        let sentence = Sentence::from_tokenized("the camera and the lens");
        assert_eq!(
            find_all_sequences(&sentence, &["the"], options()),
            vec![vec![1], vec![4]]
        );
    }

    #[test]
    fn test_case_sensitivity() {
        let sentence = Sentence::from_tokenized("Better than ever");
        assert_eq!(find_sequence(&sentence, &["better"], options()), None);

        let insensitive = MatchOptions {
            case_sensitive: false,
            ..options()
        };
        assert_eq!(find_sequence(&sentence, &["better"], insensitive), Some(vec![1]));
    }

    #[test]
    fn test_ignore_predicates() {
        let mut sentence = SrlSentence::from_tokenized("more zoom and more battery");
        sentence
            .add_predicate(1, PredicateType::Ranked, PredicateDirection::Superior)
            .unwrap();

        let skip = MatchOptions {
            ignore_predicates: true,
            ..options()
        };
        assert_eq!(find_sequence(&sentence, &["more"], options()), Some(vec![1]));
        assert_eq!(find_sequence(&sentence, &["more"], skip), Some(vec![4]));
        assert_eq!(find_all_sequences(&sentence, &["more"], skip), vec![vec![4]]);
        assert_eq!(find_all_tokens(&sentence, "more", MatchField::Form, skip), vec![4]);
    }

    #[test]
    fn test_find_token_by_field() {
        let sentence = Sentence::from_tagged(
            &["Dogs", "run", "faster"],
            &["NNS", "VBP", "RBR"],
        )
        .unwrap();

        assert_eq!(find_token(&sentence, "RBR", MatchField::Pos, options()), Some(3));
        assert_eq!(find_token(&sentence, "dogs", MatchField::Form, options()), None);
        assert_eq!(
            find_all_tokens(&sentence, "", MatchField::Deprel, options()),
            vec![1, 2, 3]
        );
    }
}
