//! Single-round resolution.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, RoundOutcome};

/// Decide one round between two choices.
///
/// Equal choices tie; otherwise the fixed beats relation decides. Pure,
/// deterministic, and total over all nine input pairs.
///
/// ```
/// use parlor::core::{Choice, RoundOutcome};
/// use parlor::engine::resolve_round;
///
/// assert_eq!(resolve_round(Choice::Rock, Choice::Scissors), RoundOutcome::FirstWins);
/// assert_eq!(resolve_round(Choice::Rock, Choice::Paper), RoundOutcome::SecondWins);
/// assert_eq!(resolve_round(Choice::Rock, Choice::Rock), RoundOutcome::Tie);
/// ```
#[must_use]
pub const fn resolve_round(a: Choice, b: Choice) -> RoundOutcome {
    // Discriminant casts: derived `==` is not callable in const fn.
    if a as u8 == b as u8 {
        RoundOutcome::Tie
    } else if a.beats() as u8 == b as u8 {
        RoundOutcome::FirstWins
    } else {
        RoundOutcome::SecondWins
    }
}

/// One completed round of a match, for transcripts and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub number: u32,
    /// The human's throw.
    pub human: Choice,
    /// The computer's throw.
    pub computer: Choice,
    /// Outcome with the human in the first seat.
    pub outcome: RoundOutcome,
}
