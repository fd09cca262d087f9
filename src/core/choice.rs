//! The three throwable choices and the outcome of comparing two of them.
//!
//! ## Choice
//!
//! `Choice` is a closed enum: rock, paper, scissors. Parsing from text is
//! case-insensitive and trims whitespace, so `" ROCK "` is accepted. Any
//! other token is a `ParseChoiceError`, which callers recover from by
//! re-prompting - there is no silent default.
//!
//! ## Beats relation
//!
//! The win relation is the fixed three-cycle rock > scissors > paper > rock,
//! encoded once in [`Choice::beats`] rather than recomputed per comparison.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the three throwable choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in canonical order.
    ///
    /// Used for uniform random selection and for prompt menus.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    ///
    /// ```
    /// use parlor::core::Choice;
    ///
    /// assert_eq!(Choice::Rock.beats(), Choice::Scissors);
    /// assert_eq!(Choice::Scissors.beats(), Choice::Paper);
    /// assert_eq!(Choice::Paper.beats(), Choice::Rock);
    /// ```
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Lowercase token for this choice, as used in prompts and transcripts.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a token is not a recognized choice.
///
/// Carries the offending token (trimmed, original case) for the warning
/// message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized choice \"{0}\"")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError(token.to_string())),
        }
    }
}

/// Result of comparing two choices in a single round.
///
/// "First" and "second" refer to argument positions in
/// [`resolve_round`](crate::engine::resolve_round), not to any player
/// identity - the engine maps first to the human seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both picked the same choice. Neither score moves.
    Tie,
    /// The first choice defeats the second.
    FirstWins,
    /// The second choice defeats the first.
    SecondWins,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_a_three_cycle() {
        for choice in Choice::ALL {
            assert_ne!(choice.beats(), choice);
            // Following the relation three times returns to the start.
            assert_eq!(choice.beats().beats().beats(), choice);
        }
    }

    #[test]
    fn test_parse_valid_tokens() {
        assert_eq!("rock".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!("paper".parse::<Choice>(), Ok(Choice::Paper));
        assert_eq!("scissors".parse::<Choice>(), Ok(Choice::Scissors));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!("  ROCK ".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!("Paper".parse::<Choice>(), Ok(Choice::Paper));
        assert_eq!("\tsCiSsOrS\n".parse::<Choice>(), Ok(Choice::Scissors));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        let err = "lizard".parse::<Choice>().unwrap_err();
        assert_eq!(err, ParseChoiceError("lizard".to_string()));

        assert!("".parse::<Choice>().is_err());
        assert!("rock paper".parse::<Choice>().is_err());
    }

    #[test]
    fn test_display_matches_token() {
        for choice in Choice::ALL {
            assert_eq!(format!("{}", choice), choice.token());
            // Display output parses back to the same choice.
            assert_eq!(choice.token().parse::<Choice>(), Ok(choice));
        }
    }

    #[test]
    fn test_choice_serialization() {
        let json = serde_json::to_string(&Choice::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");

        let deserialized: Choice = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Choice::Scissors);
    }
}
