//! Computer opponent strength.

use crate::movers::{Easy, Medium, Minimax, MoveStrategy};
use serde::{Deserialize, Serialize};

/// How strongly the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Win-or-block lookahead, random otherwise.
    Medium,
    /// Full minimax search.
    Hard,
}

impl Difficulty {
    /// The move strategy for this level.
    pub fn strategy(self) -> &'static dyn MoveStrategy {
        match self {
            Difficulty::Easy => &Easy,
            Difficulty::Medium => &Medium,
            Difficulty::Hard => &Minimax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_strategy_names_match_display() {
        use strum::IntoEnumIterator;
        for difficulty in Difficulty::iter() {
            assert_eq!(difficulty.strategy().name(), difficulty.to_string());
        }
    }
}
