//! Surface span of an argument's phrase

use crate::pos;
use crate::tree::Sentence;
use crate::types::ArgumentType;
use crate::word::{Word, WordId};

/// Words that may not sit at the edge of a phrase for this role
fn excluded_at_edge(word: &Word, role: ArgumentType) -> bool {
    let tag = word.pos.as_str();
    if word.is_predicate() || pos::is_comparative(tag) {
        return true;
    }
    let function_word = pos::is_conjunction(tag) || pos::is_preposition(tag) || pos::is_punctuation(tag);
    match role {
        ArgumentType::Entity1 | ArgumentType::Entity2 => function_word,
        ArgumentType::Aspect => function_word || pos::is_determiner(tag),
        ArgumentType::Sentiment | ArgumentType::Argument => true,
    }
}

/// Contiguous positions covering `argument` and its direct dependents.
///
/// The window runs from the leftmost to the rightmost of them. Edge words
/// that are predicates, comparatives or (depending on the role) function
/// words are trimmed off, moving inward up to the argument itself. Returns an
/// empty list if `argument` is not a word of the sentence.
pub fn subtree_window(sentence: &Sentence, argument: WordId, role: ArgumentType) -> Vec<WordId> {
    let Some(word) = sentence.get(argument) else {
        return Vec::new();
    };

    let mut low = word.children().next().map_or(argument, |c| c.min(argument));
    let mut high = word.children().last().map_or(argument, |c| c.max(argument));

    let is_excluded = |id: WordId| {
        sentence
            .get(id)
            .is_some_and(|w| excluded_at_edge(w, role))
    };
    while low < argument && is_excluded(low) {
        low += 1;
    }
    while high > argument && is_excluded(high) {
        high -= 1;
    }

    (low..=high).collect()
}
