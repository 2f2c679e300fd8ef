//! Pick the word that represents a multi-word phrase
//!
//! Annotated phrases (predicates like "more expensive than", arguments like
//! "the old Nikon") are stored on a single word. These heuristics choose it.

use crate::pos;
use crate::tree::Sentence;
use crate::word::WordId;

fn pos_of(sentence: &Sentence, id: WordId) -> &str {
    sentence.get(id).map(|w| w.pos.as_str()).unwrap_or_default()
}

/// Head word of a predicate phrase.
///
/// In order of preference: a comparative cue word (`more`, `less`, ...), a
/// word with a comparative tag, the first content word, the first
/// determiner, the first preposition.
pub fn predicate_head(sentence: &Sentence, span: &[WordId]) -> Option<WordId> {
    match span {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let cue = span.iter().copied().find(|&id| {
        sentence
            .get(id)
            .is_some_and(|w| pos::is_comparative_cue(&w.form.to_lowercase()))
    });
    if cue.is_some() {
        return cue;
    }

    let comparative = span
        .iter()
        .copied()
        .find(|&id| pos::is_comparative(pos_of(sentence, id)));
    if comparative.is_some() {
        return comparative;
    }

    let mut prepositions = Vec::new();
    let mut determiners = Vec::new();
    let mut content = Vec::new();
    for &id in span {
        let tag = pos_of(sentence, id);
        if pos::is_preposition(tag) {
            prepositions.push(id);
        } else if pos::is_determiner(tag) {
            determiners.push(id);
        } else {
            content.push(id);
        }
    }

    content
        .first()
        .or(determiners.first())
        .or(prepositions.first())
        .copied()
}

/// Head word of an argument phrase.
///
/// Prepositions and punctuation are set aside. If exactly one word remains it
/// is the head; if none remain, the first preposition (else the first
/// punctuation mark) is. Otherwise the head is the lowest common ancestor of
/// the whole span, folded pairwise from the left. An intermediate ancestor
/// outside the span is replaced by the previous result.
pub fn argument_head(sentence: &Sentence, span: &[WordId]) -> Option<WordId> {
    match span {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let mut prepositions = Vec::new();
    let mut punctuation = Vec::new();
    let mut content = Vec::new();
    for &id in span {
        let tag = pos_of(sentence, id);
        if pos::is_preposition(tag) {
            prepositions.push(id);
        } else if pos::is_punctuation(tag) {
            punctuation.push(id);
        } else {
            content.push(id);
        }
    }

    match content.len() {
        1 => Some(content[0]),
        0 => prepositions.first().or(punctuation.first()).copied(),
        _ => {
            let mut current = span[0];
            for &next in &span[1..] {
                match sentence.lowest_common_ancestor(current, next) {
                    Some(lca) if span.contains(&lca) => current = lca,
                    _ => {}
                }
            }
            Some(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    /// Canon is much better than the old Nikon .
    fn comparison() -> Sentence {
        let rows = [
            ("Canon", "NNP", 2, "nsubj"),
            ("is", "VBZ", 0, "root"),
            ("much", "RB", 4, "advmod"),
            ("better", "JJR", 2, "acomp"),
            ("than", "IN", 4, "prep"),
            ("the", "DT", 8, "det"),
            ("old", "JJ", 8, "amod"),
            ("Nikon", "NNP", 5, "pobj"),
            (".", ".", 2, "punct"),
        ];
        let mut sentence = Sentence::new();
        for (i, (form, tag, head, deprel)) in rows.into_iter().enumerate() {
            sentence.append(Word::new(i + 1, form, form, tag, head, deprel));
        }
        sentence.build_dependency_tree().unwrap();
        sentence
    }

    #[test]
    fn test_empty_and_single_spans() {
        let sentence = comparison();
        assert_eq!(predicate_head(&sentence, &[]), None);
        assert_eq!(argument_head(&sentence, &[]), None);
        assert_eq!(predicate_head(&sentence, &[5]), Some(5));
        assert_eq!(argument_head(&sentence, &[9]), Some(9));
    }

    #[test]
    fn test_predicate_head_prefers_comparative_tag() {
        let sentence = comparison();
        assert_eq!(predicate_head(&sentence, &[3, 4, 5]), Some(4));
    }

    #[test]
    fn test_predicate_head_prefers_cue_word() {
        let sentence = Sentence::from_tagged(&["More", "expensive"], &["JJR", "JJ"]).unwrap();
        assert_eq!(predicate_head(&sentence, &[2, 1]), Some(1));

        let sentence = Sentence::from_tagged(&["as", "good", "as"], &["RB", "JJ", "IN"]).unwrap();
        assert_eq!(predicate_head(&sentence, &[1, 2, 3]), Some(1));
    }

    #[test]
    fn test_predicate_head_fallbacks() {
        let sentence = comparison();
        // determiner before preposition
        assert_eq!(predicate_head(&sentence, &[5, 6]), Some(6));
        // first content word
        assert_eq!(predicate_head(&sentence, &[5, 7, 8]), Some(7));
        assert_eq!(predicate_head(&sentence, &[5, 5]), Some(5));
    }

    #[test]
    fn test_argument_head_single_content_word() {
        let sentence = comparison();
        assert_eq!(argument_head(&sentence, &[5, 8, 9]), Some(8));
    }

    #[test]
    fn test_argument_head_without_content() {
        let sentence = comparison();
        assert_eq!(argument_head(&sentence, &[9, 5]), Some(5));
        assert_eq!(argument_head(&sentence, &[9, 9]), Some(9));
    }

    #[test]
    fn test_argument_head_common_ancestor() {
        let sentence = comparison();
        assert_eq!(argument_head(&sentence, &[6, 7, 8]), Some(8));
        // folded over the full span, so the preposition wins
        assert_eq!(argument_head(&sentence, &[5, 6, 7, 8]), Some(5));
    }

    #[test]
    fn test_argument_head_keeps_previous_outside_span() {
        let sentence = comparison();
        // lca(Canon, much) is "is", which is not in the span
        assert_eq!(argument_head(&sentence, &[1, 3]), Some(1));
    }
}
