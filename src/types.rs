//! Closed label sets for comparative annotation
//!
//! Argument roles, the grouping that coarsens corpus argument codes, and the
//! predicate type/direction pair encoded as two-digit corpus codes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Role of an argument relative to its comparative predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgumentType {
    Entity1,
    Entity2,
    Aspect,
    Sentiment,
    /// Catch-all default
    Argument,
}

/// How the four corpus argument codes are collapsed onto `ArgumentType`.
///
/// Groups in parentheses are merged:
/// - `One`: just `argument`
/// - `Two`: (entity1, entity2), (aspect, sentiment)
/// - `Thra`: (entity1, entity2), aspect, sentiment
/// - `Thre`: entity1, entity2, (aspect, sentiment)
/// - `All`: entity1, entity2, aspect, sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grouping {
    One,
    Two,
    Thra,
    Thre,
    #[default]
    All,
}

impl FromStr for Grouping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one" => Ok(Grouping::One),
            "two" => Ok(Grouping::Two),
            "thra" => Ok(Grouping::Thra),
            "thre" => Ok(Grouping::Thre),
            "all" => Ok(Grouping::All),
            other => Err(Error::invalid_config(format!(
                "unknown argument grouping '{}' (expected one, two, thra, thre or all)",
                other
            ))),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Grouping::One => "ONE",
            Grouping::Two => "TWO",
            Grouping::Thra => "THRA",
            Grouping::Thre => "THRE",
            Grouping::All => "ALL",
        };
        f.write_str(name)
    }
}

impl ArgumentType {
    /// Types that can be produced under a grouping
    pub fn reachable(grouping: Grouping) -> &'static [ArgumentType] {
        use ArgumentType::*;
        match grouping {
            Grouping::One => &[Argument],
            Grouping::Two => &[Entity1, Aspect],
            Grouping::Thra => &[Entity1, Aspect, Sentiment],
            Grouping::Thre => &[Entity1, Entity2, Aspect],
            Grouping::All => &[Entity1, Entity2, Aspect, Sentiment],
        }
    }

    /// Corpus codes of all reachable types, in `reachable` order
    pub fn mapped_codes(grouping: Grouping) -> Vec<&'static str> {
        Self::reachable(grouping)
            .iter()
            .map(|t| t.to_code(grouping))
            .collect()
    }

    /// Read a corpus code ignoring any grouping.
    ///
    /// A0 aspect, A1 entity1, A2 entity2, A3 sentiment; anything else is
    /// the catch-all.
    pub fn from_unmapped_code(code: &str) -> Self {
        match code {
            "A0" => ArgumentType::Aspect,
            "A1" => ArgumentType::Entity1,
            "A2" => ArgumentType::Entity2,
            "A3" => ArgumentType::Sentiment,
            _ => ArgumentType::Argument,
        }
    }

    /// Corpus code ignoring any grouping
    pub fn unmapped_code(self) -> &'static str {
        match self {
            ArgumentType::Aspect => "A0",
            ArgumentType::Entity1 => "A1",
            ArgumentType::Entity2 => "A2",
            ArgumentType::Sentiment => "A3",
            ArgumentType::Argument => "A",
        }
    }

    /// Read a corpus code under a grouping
    pub fn from_code(code: &str, grouping: Grouping) -> Self {
        match grouping {
            Grouping::One => ArgumentType::Argument,
            Grouping::Two => match code {
                "A0" | "A3" => ArgumentType::Aspect,
                _ => ArgumentType::Entity1,
            },
            Grouping::Thra => match code {
                "A0" => ArgumentType::Aspect,
                "A3" => ArgumentType::Sentiment,
                _ => ArgumentType::Entity1,
            },
            Grouping::Thre => match code {
                "A1" => ArgumentType::Entity1,
                "A2" => ArgumentType::Entity2,
                _ => ArgumentType::Aspect,
            },
            Grouping::All => Self::from_unmapped_code(code),
        }
    }

    /// Corpus code under a grouping
    pub fn to_code(self, grouping: Grouping) -> &'static str {
        match grouping {
            Grouping::One => "A0",
            Grouping::Two => match self {
                ArgumentType::Aspect | ArgumentType::Sentiment => "A0",
                _ => "A1",
            },
            Grouping::Thra => match self {
                ArgumentType::Aspect => "A0",
                ArgumentType::Sentiment => "A3",
                _ => "A1",
            },
            Grouping::Thre => match self {
                ArgumentType::Aspect | ArgumentType::Sentiment => "A0",
                ArgumentType::Entity1 => "A1",
                _ => "A2",
            },
            Grouping::All => self.unmapped_code(),
        }
    }

    /// entity1 or entity2
    pub fn is_entity(self) -> bool {
        matches!(self, ArgumentType::Entity1 | ArgumentType::Entity2)
    }

    /// aspect or sentiment
    pub fn is_target(self) -> bool {
        matches!(self, ArgumentType::Aspect | ArgumentType::Sentiment)
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgumentType::Entity1 => "entity1",
            ArgumentType::Entity2 => "entity2",
            ArgumentType::Aspect => "aspect",
            ArgumentType::Sentiment => "sentiment",
            ArgumentType::Argument => "argument",
        };
        f.write_str(name)
    }
}

/// Comparison type introduced by a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateType {
    Ranked,
    Superlative,
    Equative,
    Difference,
    Undefined,
}

/// Direction of a comparison: entity1 is inferior/superior to entity2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateDirection {
    Inferior,
    Superior,
    Undefined,
}

impl fmt::Display for PredicateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            PredicateDirection::Inferior => "-",
            PredicateDirection::Superior => "+",
            PredicateDirection::Undefined => "x",
        };
        f.write_str(symbol)
    }
}

impl PredicateType {
    /// Two-digit corpus code for a type/direction pair.
    ///
    /// 01 ranked superior, 02 equative, 03 superlative superior,
    /// 04 difference, 05 ranked inferior, 06 superlative inferior.
    /// Ranked and superlative without an inferior direction count as
    /// superior; undefined types give 00.
    pub fn to_code(self, direction: PredicateDirection) -> &'static str {
        match self {
            PredicateType::Ranked if direction == PredicateDirection::Inferior => "05",
            PredicateType::Ranked => "01",
            PredicateType::Equative => "02",
            PredicateType::Superlative if direction == PredicateDirection::Inferior => "06",
            PredicateType::Superlative => "03",
            PredicateType::Difference => "04",
            PredicateType::Undefined => "00",
        }
    }

    /// Type encoded by a two-digit code
    pub fn from_code(code: &str) -> Self {
        match code {
            "01" | "05" => PredicateType::Ranked,
            "02" => PredicateType::Equative,
            "03" | "06" => PredicateType::Superlative,
            "04" => PredicateType::Difference,
            _ => PredicateType::Undefined,
        }
    }
}

impl PredicateDirection {
    /// Direction encoded by a two-digit code
    pub fn from_code(code: &str) -> Self {
        match code {
            "05" | "06" => PredicateDirection::Inferior,
            "01" | "03" => PredicateDirection::Superior,
            _ => PredicateDirection::Undefined,
        }
    }
}

/// Split a predicate annotation `<family>.<code>` into type and direction.
///
/// Returns `None` if the annotation has no `.` separator.
pub fn predicate_from_annotation(annotation: &str) -> Option<(PredicateType, PredicateDirection)> {
    let (_family, rest) = annotation.split_once('.')?;
    let code = rest.split('.').next().unwrap_or(rest);
    Some((
        PredicateType::from_code(code),
        PredicateDirection::from_code(code),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_sizes() {
        assert_eq!(ArgumentType::reachable(Grouping::One).len(), 1);
        assert_eq!(ArgumentType::reachable(Grouping::Two).len(), 2);
        assert_eq!(ArgumentType::reachable(Grouping::Thra).len(), 3);
        assert_eq!(ArgumentType::reachable(Grouping::Thre).len(), 3);
        assert_eq!(ArgumentType::reachable(Grouping::All).len(), 4);
    }

    #[test]
    fn test_all_grouping_round_trips() {
        for code in ["A0", "A1", "A2", "A3"] {
            let t = ArgumentType::from_code(code, Grouping::All);
            assert_eq!(t.to_code(Grouping::All), code);
        }
        assert_eq!(
            ArgumentType::from_code("A", Grouping::All),
            ArgumentType::Argument
        );
    }

    #[test]
    fn test_coarse_groupings() {
        assert_eq!(
            ArgumentType::from_code("A2", Grouping::One),
            ArgumentType::Argument
        );
        assert_eq!(
            ArgumentType::from_code("A3", Grouping::Two),
            ArgumentType::Aspect
        );
        assert_eq!(
            ArgumentType::from_code("A2", Grouping::Two),
            ArgumentType::Entity1
        );
        assert_eq!(
            ArgumentType::from_code("A3", Grouping::Thra),
            ArgumentType::Sentiment
        );
        assert_eq!(
            ArgumentType::from_code("A3", Grouping::Thre),
            ArgumentType::Aspect
        );
        assert_eq!(ArgumentType::Sentiment.to_code(Grouping::Thre), "A0");
        assert_eq!(ArgumentType::Entity2.to_code(Grouping::Thra), "A1");
    }

    #[test]
    fn test_reachable_types_are_fixed_points() {
        // Every reachable type survives a write/read cycle under its grouping
        for grouping in [
            Grouping::Two,
            Grouping::Thra,
            Grouping::Thre,
            Grouping::All,
        ] {
            for t in ArgumentType::reachable(grouping) {
                assert_eq!(ArgumentType::from_code(t.to_code(grouping), grouping), *t);
            }
        }
    }

    #[test]
    fn test_mapped_codes() {
        assert_eq!(
            ArgumentType::mapped_codes(Grouping::All),
            vec!["A1", "A2", "A0", "A3"]
        );
        assert_eq!(ArgumentType::mapped_codes(Grouping::One), vec!["A0"]);
    }

    #[test]
    fn test_grouping_from_str() {
        assert_eq!("THRA".parse::<Grouping>().unwrap(), Grouping::Thra);
        assert_eq!("thre".parse::<Grouping>().unwrap(), Grouping::Thre);
        assert_eq!(" All ".parse::<Grouping>().unwrap(), Grouping::All);
        assert!("three".parse::<Grouping>().is_err());
    }

    #[test]
    fn test_predicate_codes() {
        let table = [
            ("01", PredicateType::Ranked, PredicateDirection::Superior),
            ("02", PredicateType::Equative, PredicateDirection::Undefined),
            ("03", PredicateType::Superlative, PredicateDirection::Superior),
            ("04", PredicateType::Difference, PredicateDirection::Undefined),
            ("05", PredicateType::Ranked, PredicateDirection::Inferior),
            ("06", PredicateType::Superlative, PredicateDirection::Inferior),
        ];
        for (code, kind, direction) in table {
            assert_eq!(PredicateType::from_code(code), kind);
            assert_eq!(PredicateDirection::from_code(code), direction);
            assert_eq!(kind.to_code(direction), code);
        }
        assert_eq!(PredicateType::from_code("09"), PredicateType::Undefined);
        assert_eq!(
            PredicateType::Undefined.to_code(PredicateDirection::Superior),
            "00"
        );
    }

    #[test]
    fn test_predicate_from_annotation() {
        assert_eq!(
            predicate_from_annotation("comparative.05"),
            Some((PredicateType::Ranked, PredicateDirection::Inferior))
        );
        assert_eq!(predicate_from_annotation("comparative"), None);
    }

    #[test]
    fn test_direction_symbols() {
        assert_eq!(PredicateDirection::Inferior.to_string(), "-");
        assert_eq!(PredicateDirection::Superior.to_string(), "+");
        assert_eq!(PredicateDirection::Undefined.to_string(), "x");
    }
}
