//! Runtime configuration
//!
//! The argument grouping changes the meaning of every argument code read or
//! written, so it is fixed in a [`Config`] before any parsing starts and
//! passed to the codec rather than kept as global state.

use std::fmt;
use std::str::FromStr;

use crate::conll::ReadMode;
use crate::error::{Error, Result};
use crate::mapping::MatchOptions;
use crate::types::Grouping;

/// Environment variable holding the argument grouping
pub const GROUPING_VAR: &str = "COMPSRL_GROUPING";
/// Environment variable holding the read mode
pub const READ_MODE_VAR: &str = "COMPSRL_READ_MODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How argument codes map onto argument types
    pub grouping: Grouping,
    /// Which annotation layers the reader keeps
    pub read_mode: ReadMode,
    /// Token matching respects case
    pub case_sensitive: bool,
    /// Token matching skips candidates that start on a predicate
    pub ignore_predicates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grouping: Grouping::All,
            read_mode: ReadMode::Full,
            case_sensitive: true,
            ignore_predicates: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_read_mode(mut self, read_mode: ReadMode) -> Self {
        self.read_mode = read_mode;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_ignore_predicates(mut self, ignore_predicates: bool) -> Self {
        self.ignore_predicates = ignore_predicates;
        self
    }

    /// Defaults overridden by `COMPSRL_GROUPING` and `COMPSRL_READ_MODE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(GROUPING_VAR) {
            config.grouping = value.parse()?;
        }
        if let Some(value) = lookup(READ_MODE_VAR) {
            config.read_mode = value.parse()?;
        }
        log::debug!(
            "Using argument grouping {} and read mode {}",
            config.grouping,
            config.read_mode
        );
        Ok(config)
    }

    /// Options for token and sequence matching
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            ignore_predicates: self.ignore_predicates,
        }
    }
}

impl FromStr for ReadMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deps" | "only-deps" => Ok(ReadMode::OnlyDeps),
            "preds" | "only-preds" => Ok(ReadMode::OnlyPredicates),
            "full" | "srl" => Ok(ReadMode::Full),
            other => Err(Error::invalid_config(format!(
                "unknown read mode '{}' (expected deps, preds or full)",
                other
            ))),
        }
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadMode::OnlyDeps => "deps",
            ReadMode::OnlyPredicates => "preds",
            ReadMode::Full => "full",
        };
        f.write_str(name)
    }
}
