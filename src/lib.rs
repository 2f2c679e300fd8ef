//! Compsrl: dependency trees with comparative semantic roles
//!
//! Sentences annotated with comparison predicates and their arguments
//! (entities, aspect, sentiment), read from and written to CoNLL 2009 style
//! files, plus the tree queries and head-finding heuristics that rule-based
//! extraction builds on.

// Data model
pub mod error; // Error type shared by all modules
pub mod pos; // Penn Treebank tag categories
pub mod srl; // Predicates and arguments on top of a tree
pub mod tree; // Sentence arena and tree algorithms
pub mod types; // Argument and predicate classifications
pub mod word; // Single word

// Input and output
pub mod config; // Grouping and read mode
pub mod conll; // CoNLL reader and writer
pub mod corpus; // Sentence collections over files

// Heuristics
pub mod head; // Phrase head selection
pub mod mapping; // Token and sequence lookup
pub mod subtree; // Argument phrase windows

pub mod tools; // Tokenizer/tagger interfaces

// Re-exports for convenience
pub use config::Config;
pub use conll::{ParseReader, ParseWriter, Projection, ReadMode};
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use head::{argument_head, predicate_head};
pub use mapping::{
    MatchField, MatchOptions, find_all_sequences, find_all_tokens, find_sequence, find_token,
};
pub use srl::SrlSentence;
pub use subtree::subtree_window;
pub use tree::{Sentence, TreePosition};
pub use types::{ArgumentType, Grouping, PredicateDirection, PredicateType};
pub use word::{PredicateFrame, Word, WordId};
