//! Dependency tree for one sentence
//!
//! Words live in an arena indexed by their position. Index 0 holds the
//! synthetic root, 1..=N the surface tokens. Heads and children are stored as
//! indices, so cycles in malformed input cannot create ownership cycles, and
//! cloning a sentence is a deep copy.

use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::word::{ROOT_FORM, Word, WordId};

/// Position of one word relative to another in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreePosition {
    /// Same word
    Same,
    /// Direct dependent
    Child,
    /// Direct head
    Parent,
    /// Same head
    Sibling,
    /// On the path to the root
    Ancestor,
    /// Somewhere below
    Descendant,
    /// Below a direct sibling
    SiblingDescendant,
    Other,
}

/// A sentence as a sequence of words plus a dependency structure
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    words: Vec<Word>,
    /// `# key = value` comment lines that preceded the sentence
    pub metadata: BTreeMap<String, String>,
}

impl Sentence {
    /// Create an empty sentence (only the root)
    pub fn new() -> Self {
        Self {
            words: vec![Word::new(0, ROOT_FORM, "", "", 0, "")],
            metadata: BTreeMap::new(),
        }
    }

    /// Create a sentence from whitespace-separated tokens.
    ///
    /// Words carry only their form; there is no dependency structure.
    pub fn from_tokenized(text: &str) -> Self {
        let mut sentence = Self::new();
        for token in text.split_whitespace() {
            sentence.append(Word::from_form(token));
        }
        sentence
    }

    /// Create a sentence from tokens and one part-of-speech tag per token
    pub fn from_tagged<T: AsRef<str>, P: AsRef<str>>(tokens: &[T], tags: &[P]) -> Result<Self> {
        if tokens.len() != tags.len() {
            return Err(Error::TagCountMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }
        let mut sentence = Self::new();
        for (token, tag) in tokens.iter().zip(tags) {
            let mut word = Word::from_form(token.as_ref());
            word.pos = tag.as_ref().to_string();
            sentence.append(word);
        }
        Ok(sentence)
    }

    /// Add a word to the end of the sentence and return its position.
    ///
    /// A word with id 0 gets its position as id. A word that already has a
    /// different id is kept as is, with a warning.
    pub fn append(&mut self, mut word: Word) -> WordId {
        let position = self.words.len();
        if word.id == 0 {
            word.id = position;
        } else if word.id != position {
            log::warn!(
                "Adding word '{}' with id {} at position {}",
                word.form,
                word.id,
                position
            );
        }
        self.words.push(word);
        position
    }

    /// Link every word to its head, and every head to its children.
    ///
    /// Must run after all words are appended. Running it again leaves heads
    /// and children unchanged. Fails without touching the sentence if a head
    /// id points past the end.
    pub fn build_dependency_tree(&mut self) -> Result<()> {
        let len = self.words.len();
        if let Some((word, head)) = self
            .words
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, w)| (i, w.head_id))
            .find(|&(_, head)| head >= len)
        {
            return Err(Error::HeadOutOfRange {
                word,
                head,
                len: len - 1,
            });
        }

        for i in 1..len {
            let head = self.words[i].head_id;
            self.words[i].set_head(head);
            self.words[head].children.insert(i);
        }
        Ok(())
    }

    /// Get a surface word by position (1-based).
    ///
    /// Returns `None` for the root position and for positions past the end.
    pub fn get(&self, index: WordId) -> Option<&Word> {
        if index > 0 {
            self.words.get(index)
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, index: WordId) -> Option<&mut Word> {
        if index > 0 {
            self.words.get_mut(index)
        } else {
            None
        }
    }

    /// The synthetic root word
    pub fn root(&self) -> &Word {
        &self.words[0]
    }

    /// Surface words in order (without the root)
    pub fn words(&self) -> &[Word] {
        &self.words[1..]
    }

    /// Number of surface words
    pub fn len(&self) -> usize {
        self.words.len() - 1
    }

    /// True if the sentence holds only the root
    pub fn is_empty(&self) -> bool {
        self.words.len() <= 1
    }

    /// Whether `id` names a surface word of this sentence
    pub fn contains(&self, id: WordId) -> bool {
        id > 0 && id < self.words.len()
    }

    /// Position of a word borrowed from this sentence
    pub fn index_of(&self, word: &Word) -> Option<WordId> {
        self.words.iter().position(|w| std::ptr::eq(w, word))
    }

    /// Head of a word as a surface word.
    ///
    /// Words attached to the root have no head here.
    pub fn head(&self, id: WordId) -> Option<&Word> {
        self.head_link(id).and_then(|h| self.get(h))
    }

    /// Direct dependents of a word, in sentence order
    pub fn children(&self, id: WordId) -> Vec<&Word> {
        match self.words.get(id) {
            Some(word) => word.children().filter_map(|c| self.words.get(c)).collect(),
            None => Vec::new(),
        }
    }

    /// Resolved head index, including the root
    fn head_link(&self, id: WordId) -> Option<WordId> {
        self.words.get(id).and_then(|w| w.head)
    }

    /// All words below `id` in the tree, not including `id` itself
    pub fn descendants(&self, id: WordId) -> BTreeSet<WordId> {
        let mut found = BTreeSet::new();
        let mut visited = FxHashSet::default();
        visited.insert(id);
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let Some(word) = self.words.get(current) else {
                continue;
            };
            for child in word.children() {
                if visited.insert(child) {
                    found.insert(child);
                    stack.push(child);
                }
            }
        }
        found
    }

    /// Words from the root down to `id`.
    ///
    /// The first element is the topmost word reached (the root once the tree
    /// is built), the last is `id` itself.
    pub fn path_to_root(&self, id: WordId) -> Vec<WordId> {
        if id >= self.words.len() {
            return Vec::new();
        }
        let mut path = vec![id];
        let mut visited = FxHashSet::default();
        visited.insert(id);
        let mut current = self.head_link(id);
        while let Some(head) = current {
            if !visited.insert(head) {
                log::warn!("Cycle in dependency tree at word {}", head);
                break;
            }
            path.push(head);
            current = self.head_link(head);
        }
        path.reverse();
        path
    }

    /// Lowest common ancestor of two words.
    ///
    /// Direct relations are answered from the heads: a word with itself, a
    /// word with its head, and two words with a shared head. Otherwise both
    /// root paths are walked in lockstep and the head of the first element
    /// past the shared prefix is returned.
    pub fn lowest_common_ancestor(&self, a: WordId, b: WordId) -> Option<WordId> {
        let path_a = self.path_to_root(a);
        let path_b = self.path_to_root(b);
        self.lca_with_paths(a, b, &path_a, &path_b)
    }

    fn lca_with_paths(
        &self,
        a: WordId,
        b: WordId,
        path_a: &[WordId],
        path_b: &[WordId],
    ) -> Option<WordId> {
        if a == b {
            return Some(b);
        }
        let head_a = self.head_link(a);
        let head_b = self.head_link(b);
        if head_a == Some(b) {
            return Some(b);
        }
        if head_b == Some(a) {
            return Some(a);
        }
        if head_a == head_b {
            return head_a;
        }

        // Answer is the head of the first word past the shared prefix, not
        // the last shared word. In a well-formed tree both name the same word.
        let mut iter_a = path_a.iter().copied();
        let mut iter_b = path_b.iter().copied();
        let mut one = iter_a.next();
        let mut two = iter_b.next();
        while one.is_some() && one == two {
            one = iter_a.next();
            two = iter_b.next();
        }

        match one.or(two) {
            Some(diverged) => self.head_link(diverged),
            None => {
                log::warn!(
                    "No common ancestor found for words {} and {}",
                    a,
                    b
                );
                None
            }
        }
    }

    /// Path from `a` to `b` through their lowest common ancestor.
    ///
    /// The first list goes up from `a` to the ancestor (inclusive), the
    /// second goes down from below the ancestor to `b`.
    pub fn path_between(&self, a: WordId, b: WordId) -> (Vec<WordId>, Vec<WordId>) {
        let path_a = self.path_to_root(a);
        let path_b = self.path_to_root(b);
        let lca = self.lca_with_paths(a, b, &path_a, &path_b);

        let mut up = Vec::new();
        for &id in path_a.iter().rev() {
            up.push(id);
            if Some(id) == lca {
                break;
            }
        }

        let down = path_b
            .iter()
            .copied()
            .skip_while(|&id| Some(id) != lca)
            .skip(1)
            .collect();

        (up, down)
    }

    /// Where `b` sits in the tree relative to `a`
    pub fn tree_position(&self, a: WordId, b: WordId) -> TreePosition {
        if a == b {
            return TreePosition::Same;
        }

        let head_a = self.head_link(a);
        let head_b = self.head_link(b);
        if head_b == Some(a) {
            return TreePosition::Child;
        }
        if head_a == Some(b) {
            return TreePosition::Parent;
        }
        if head_a == head_b {
            return TreePosition::Sibling;
        }

        let path_a = self.path_to_root(a);
        if path_a.contains(&b) {
            return TreePosition::Ancestor;
        }
        let path_b = self.path_to_root(b);
        if path_b.contains(&a) {
            return TreePosition::Descendant;
        }
        if head_a.is_some_and(|h| path_b.contains(&h)) {
            return TreePosition::SiblingDescendant;
        }

        TreePosition::Other
    }

    /// Order of two words in the sentence
    pub fn compare_sequence(&self, a: WordId, b: WordId) -> Ordering {
        a.cmp(&b)
    }

    /// Same word forms in the same order. Analyses are not compared.
    pub fn is_same_sentence(&self, other: &Sentence) -> bool {
        self.len() == other.len()
            && self
                .words()
                .iter()
                .zip(other.words())
                .all(|(a, b)| a.form == b.form)
    }

    /// Compare the token strings of two sentences lexicographically
    pub fn compare_text(&self, other: &Sentence) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }

    /// One line per word: position and word summary
    pub fn tree_string(&self) -> String {
        self.words()
            .iter()
            .enumerate()
            .map(|(i, w)| format!("{} {}\n", i + 1, w))
            .collect()
    }
}

impl Default for Sentence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&word.form)?;
        }
        Ok(())
    }
}
