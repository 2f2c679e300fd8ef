//! A single token of a dependency-parsed sentence

use std::collections::BTreeSet;
use std::fmt;

use crate::types::{PredicateDirection, PredicateType};

/// Position of a word in its sentence. 0 is the synthetic root.
pub type WordId = usize;

/// Form of the synthetic root word
pub const ROOT_FORM: &str = "ROOT";

/// Comparison introduced by a predicate word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateFrame {
    pub kind: PredicateType,
    pub direction: PredicateDirection,
}

/// A word in a dependency tree
///
/// `head` and `children` are indices into the owning sentence and are only
/// filled in by [`Sentence::build_dependency_tree`](crate::Sentence::build_dependency_tree).
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub id: WordId,
    pub form: String,
    pub lemma: String,
    pub pos: String,
    pub deprel: String,
    /// Head id as given in the input
    pub head_id: WordId,
    pub(crate) head: Option<WordId>,
    pub(crate) children: BTreeSet<WordId>,
    pub(crate) predicate: Option<PredicateFrame>,
}

impl Word {
    /// Create a word with all attributes
    pub fn new(
        id: WordId,
        form: &str,
        lemma: &str,
        pos: &str,
        head_id: WordId,
        deprel: &str,
    ) -> Self {
        Self {
            id,
            form: form.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            deprel: deprel.to_string(),
            head_id,
            head: None,
            children: BTreeSet::new(),
            predicate: None,
        }
    }

    /// Create a word with just a surface form and an unset id
    pub fn from_form(form: &str) -> Self {
        Self::new(0, form, "", "", 0, "")
    }

    /// Resolved head, including the root (id 0)
    pub fn head(&self) -> Option<WordId> {
        self.head
    }

    /// Direct dependents in sentence order
    pub fn children(&self) -> impl Iterator<Item = WordId> + '_ {
        self.children.iter().copied()
    }

    pub fn is_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn predicate(&self) -> Option<PredicateFrame> {
        self.predicate
    }

    pub(crate) fn set_head(&mut self, head: WordId) {
        self.head = Some(head);
        self.head_id = head;
    }

    pub(crate) fn mark_as_predicate(&mut self, kind: PredicateType, direction: PredicateDirection) {
        self.predicate = Some(PredicateFrame { kind, direction });
    }

    pub(crate) fn unmark_as_predicate(&mut self) {
        self.predicate = None;
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({},{},{},{},{})",
            self.form, self.id, self.lemma, self.pos, self.deprel, self.head_id
        )
    }
}
