//! Interfaces to external NLP tools
//!
//! Tokenizers, sentence splitters and taggers live outside this crate. They
//! plug in through these traits; their output is turned into untreed
//! sentences by [`tag_sentence`].

use std::fmt;

use crate::error::Result;
use crate::tree::Sentence;

/// Half-open byte range `[begin, end)` in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextSpan {
    pub begin: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `offset` falls inside the span
    pub fn contains(&self, offset: usize) -> bool {
        self.begin <= offset && offset < self.end
    }

    /// Whether `other` lies completely inside this span
    pub fn covers(&self, other: &TextSpan) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// The part of `text` under the span, `None` if it is out of bounds or
    /// not on character boundaries
    pub fn covered_text<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.begin..self.end)
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

/// Splits text into tokens
pub trait Tokenizer {
    /// Spans of all tokens, in text order
    fn token_spans(&self, text: &str) -> Vec<TextSpan>;

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.token_spans(text)
            .iter()
            .filter_map(|span| span.covered_text(text))
            .map(str::to_string)
            .collect()
    }
}

/// Splits a document into sentences
pub trait SentenceSplitter {
    /// Spans of all sentences, in text order
    fn split(&self, text: &str) -> Vec<TextSpan>;
}

/// Assigns one part-of-speech tag per token
pub trait PosTagger {
    fn tag(&self, tokens: &[String]) -> Vec<String>;
}

/// Tokens are maximal runs of non-whitespace characters
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn token_spans(&self, text: &str) -> Vec<TextSpan> {
        let mut spans = Vec::new();
        let mut start = None;
        for (i, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(begin)) => {
                    spans.push(TextSpan::new(begin, i));
                    start = None;
                }
                (false, None) => start = Some(i),
                _ => {}
            }
        }
        if let Some(begin) = start {
            spans.push(TextSpan::new(begin, text.len()));
        }
        spans
    }
}

/// Tokenize and tag one sentence of text.
///
/// The result has forms and tags but no dependency structure. Fails if the
/// tagger returns a different number of tags than there are tokens.
pub fn tag_sentence<T, P>(tokenizer: &T, tagger: &P, text: &str) -> Result<Sentence>
where
    T: Tokenizer + ?Sized,
    P: PosTagger + ?Sized,
{
    let tokens = tokenizer.tokenize(text);
    let tags = tagger.tag(&tokens);
    Sentence::from_tagged(&tokens, &tags)
}
