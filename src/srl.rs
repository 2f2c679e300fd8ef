//! Semantic role layer on top of a dependency tree
//!
//! An [`SrlSentence`] adds comparative predicates and their typed arguments
//! to a [`Sentence`]. Predicates and arguments are referred to by position, so
//! cloning the sentence carries the whole annotation over unchanged.

use rustc_hash::FxHashMap;
use std::ops::Deref;

use crate::error::{Error, Result};
use crate::tree::Sentence;
use crate::types::{ArgumentType, PredicateDirection, PredicateType};
use crate::word::WordId;

/// A sentence with predicates and predicate-argument relations
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SrlSentence {
    sentence: Sentence,
    /// Predicate positions, in sentence order
    predicates: Vec<WordId>,
    /// predicate -> argument -> role
    arguments: FxHashMap<WordId, FxHashMap<WordId, ArgumentType>>,
}

impl SrlSentence {
    /// Empty sentence without annotation
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitespace-tokenized sentence without annotation
    pub fn from_tokenized(text: &str) -> Self {
        Self::from(Sentence::from_tokenized(text))
    }

    /// The underlying sentence
    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    /// Mutable access to the underlying sentence, for appending words and
    /// building the tree
    pub fn sentence_mut(&mut self) -> &mut Sentence {
        &mut self.sentence
    }

    /// Register a word as predicate and mark it with its comparison type.
    ///
    /// Fails without changing anything if the word is not a surface word of
    /// this sentence or is already a predicate.
    pub fn add_predicate(
        &mut self,
        predicate: WordId,
        kind: PredicateType,
        direction: PredicateDirection,
    ) -> Result<()> {
        if !self.sentence.contains(predicate) {
            log::warn!(
                "Cannot add predicate {}: not in this sentence",
                predicate
            );
            return Err(Error::NotInSentence(predicate));
        }
        if self.predicates.contains(&predicate) {
            log::warn!(
                "Cannot add predicate {}: already a predicate",
                predicate
            );
            return Err(Error::AlreadyPredicate(predicate));
        }

        if let Some(word) = self.sentence.get_mut(predicate) {
            word.mark_as_predicate(kind, direction);
        }
        self.predicates.push(predicate);
        self.predicates.sort_unstable();
        Ok(())
    }

    /// Predicates in sentence order
    pub fn predicates(&self) -> &[WordId] {
        &self.predicates
    }

    /// Unregister and unmark a predicate. Its argument relations are kept.
    pub fn remove_predicate(&mut self, predicate: WordId) {
        self.predicates.retain(|&p| p != predicate);
        if let Some(word) = self.sentence.get_mut(predicate) {
            word.unmark_as_predicate();
        }
    }

    /// Record `argument` as an argument of `predicate` with a role.
    ///
    /// A second call for the same pair replaces the role. The predicate does
    /// not have to be registered.
    pub fn add_argument(
        &mut self,
        predicate: WordId,
        argument: WordId,
        role: ArgumentType,
    ) -> Result<()> {
        if !self.sentence.contains(predicate) {
            log::warn!(
                "Cannot add argument {} to predicate {}: predicate not in this sentence",
                argument,
                predicate
            );
            return Err(Error::NotInSentence(predicate));
        }
        if !self.sentence.contains(argument) {
            log::warn!(
                "Cannot add argument {} to predicate {}: argument not in this sentence",
                argument,
                predicate
            );
            return Err(Error::NotInSentence(argument));
        }

        self.arguments
            .entry(predicate)
            .or_default()
            .insert(argument, role);
        Ok(())
    }

    /// All arguments of a predicate, in sentence order. Empty if none.
    pub fn arguments_of(&self, predicate: WordId) -> Vec<WordId> {
        let mut found: Vec<WordId> = self
            .arguments
            .get(&predicate)
            .map(|args| args.keys().copied().collect())
            .unwrap_or_default();
        found.sort_unstable();
        found
    }

    /// Arguments of a predicate that have the given role, in sentence order
    pub fn arguments_with_type(&self, predicate: WordId, role: ArgumentType) -> Vec<WordId> {
        let mut found: Vec<WordId> = self
            .arguments
            .get(&predicate)
            .map(|args| {
                args.iter()
                    .filter(|&(_, r)| *r == role)
                    .map(|(&a, _)| a)
                    .collect()
            })
            .unwrap_or_default();
        found.sort_unstable();
        found
    }

    /// Role of `argument` for `predicate`, if any
    pub fn relation(&self, predicate: WordId, argument: WordId) -> Option<ArgumentType> {
        self.arguments
            .get(&predicate)
            .and_then(|args| args.get(&argument))
            .copied()
    }

    /// Roles a word plays, one entry per predicate in sentence order
    pub fn roles_of(&self, word: WordId) -> Vec<Option<ArgumentType>> {
        self.predicates
            .iter()
            .map(|&p| self.relation(p, word))
            .collect()
    }

    /// The sentence on one line with predicates marked `[P]` and arguments
    /// marked `[<predicate>_<role>]`
    pub fn srl_string(&self) -> String {
        let mut parts = Vec::with_capacity(self.len());
        for (i, word) in self.words().iter().enumerate() {
            let id = i + 1;
            let mut part = word.form.clone();
            if word.is_predicate() {
                part.push_str("[P]");
            }
            for &predicate in &self.predicates {
                if let Some(role) = self.relation(predicate, id) {
                    let form = self
                        .get(predicate)
                        .map(|p| p.form.as_str())
                        .unwrap_or_default();
                    part.push_str(&format!("[{}_{}]", form, role));
                }
            }
            parts.push(part);
        }
        parts.join(" ")
    }

    /// One line per word with position, word summary, predicate and roles
    pub fn srl_tree_string(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words().iter().enumerate() {
            let id = i + 1;
            out.push_str(&format!("{} {}", id, word));
            if let Some(frame) = word.predicate() {
                out.push_str(&format!(
                    " P={}",
                    frame.kind.to_code(frame.direction)
                ));
            }
            for role in self.roles_of(id).into_iter().flatten() {
                out.push_str(&format!(" A={}", role));
            }
            out.push('\n');
        }
        out
    }
}

impl From<Sentence> for SrlSentence {
    fn from(sentence: Sentence) -> Self {
        Self {
            sentence,
            predicates: Vec::new(),
            arguments: FxHashMap::default(),
        }
    }
}

impl Deref for SrlSentence {
    type Target = Sentence;

    fn deref(&self) -> &Sentence {
        &self.sentence
    }
}
