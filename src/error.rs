//! Error types for compsrl

use std::path::PathBuf;
use thiserror::Error;

use crate::word::WordId;

/// Result type for compsrl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for compsrl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed record in a CoNLL file. Aborts the current sentence.
    #[error("Parse error in {file} at line {line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    /// A head id that points outside its sentence.
    #[error("Word {word} has head {head}, but the sentence has only {len} words")]
    HeadOutOfRange { word: WordId, head: usize, len: usize },

    /// Word id is not a surface word of the sentence.
    #[error("Word {0} is not in this sentence")]
    NotInSentence(WordId),

    /// Word is already registered as a predicate.
    #[error("Word {0} is already a predicate")]
    AlreadyPredicate(WordId),

    /// Tagger output does not line up with the tokens.
    #[error("Got {tags} tags for {tokens} tokens")]
    TagCountMismatch { tokens: usize, tags: usize },

    /// Bad configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bad glob pattern for a corpus.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// File could not be opened.
    #[error("Failed to open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parse error for a file position.
    pub fn parse(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}
