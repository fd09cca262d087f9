//! Match scorekeeping.
//!
//! ## MatchState
//!
//! A `MatchState` is the single mutable record a running match owns: both
//! scores, rounds played, and the fixed round total. It is created zeroed at
//! match start, updated once per completed round, and dropped when the match
//! ends or is cancelled. Nothing persists across matches.
//!
//! ## Invariants
//!
//! - `rounds_played <= rounds_total`
//! - `human_score + computer_score <= rounds_played` (ties move neither)
//!
//! Both are enforced by construction: the only mutation is
//! [`MatchState::record`], which refuses rounds beyond the total.

use serde::{Deserialize, Serialize};

use super::choice::RoundOutcome;

/// Overall result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Human score strictly greater.
    HumanWins,
    /// Computer score strictly greater.
    ComputerWins,
    /// Scores equal.
    Tie,
}

/// Scores and round counters for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Rounds won by the human.
    pub human_score: u32,
    /// Rounds won by the computer.
    pub computer_score: u32,
    /// Completed rounds, including ties.
    pub rounds_played: u32,
    /// Fixed length of the match.
    pub rounds_total: u32,
}

impl MatchState {
    /// Create a zeroed state for a match of `rounds_total` rounds.
    #[must_use]
    pub fn new(rounds_total: u32) -> Self {
        assert!(rounds_total > 0, "a match must have at least 1 round");
        Self {
            human_score: 0,
            computer_score: 0,
            rounds_played: 0,
            rounds_total,
        }
    }

    /// Record one completed round.
    ///
    /// `FirstWins` credits the human, `SecondWins` the computer, and a tie
    /// credits neither. Panics if the match is already complete.
    pub fn record(&mut self, outcome: RoundOutcome) {
        assert!(
            self.rounds_played < self.rounds_total,
            "match already complete"
        );
        self.rounds_played += 1;
        match outcome {
            RoundOutcome::FirstWins => self.human_score += 1,
            RoundOutcome::SecondWins => self.computer_score += 1,
            RoundOutcome::Tie => {}
        }
    }

    /// Number of tied rounds so far.
    #[must_use]
    pub fn ties(&self) -> u32 {
        self.rounds_played - self.human_score - self.computer_score
    }

    /// Whether all rounds have been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rounds_played == self.rounds_total
    }

    /// Final result, once the match is complete.
    ///
    /// Returns `None` while rounds remain: an in-progress lead is not a
    /// result.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if !self.is_complete() {
            return None;
        }
        Some(match self.human_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => MatchResult::HumanWins,
            std::cmp::Ordering::Less => MatchResult::ComputerWins,
            std::cmp::Ordering::Equal => MatchResult::Tie,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_zeroed() {
        let state = MatchState::new(5);
        assert_eq!(state.human_score, 0);
        assert_eq!(state.computer_score, 0);
        assert_eq!(state.rounds_played, 0);
        assert_eq!(state.rounds_total, 5);
        assert!(!state.is_complete());
        assert_eq!(state.result(), None);
    }

    #[test]
    #[should_panic(expected = "at least 1 round")]
    fn test_zero_round_match_rejected() {
        let _ = MatchState::new(0);
    }

    #[test]
    fn test_record_credits_the_right_seat() {
        let mut state = MatchState::new(3);

        state.record(RoundOutcome::FirstWins);
        assert_eq!((state.human_score, state.computer_score), (1, 0));

        state.record(RoundOutcome::Tie);
        assert_eq!((state.human_score, state.computer_score), (1, 0));
        assert_eq!(state.ties(), 1);

        state.record(RoundOutcome::SecondWins);
        assert_eq!((state.human_score, state.computer_score), (1, 1));
    }

    #[test]
    fn test_scores_never_exceed_rounds_played() {
        let mut state = MatchState::new(5);
        let outcomes = [
            RoundOutcome::FirstWins,
            RoundOutcome::Tie,
            RoundOutcome::SecondWins,
            RoundOutcome::Tie,
            RoundOutcome::FirstWins,
        ];

        for outcome in outcomes {
            state.record(outcome);
            assert!(state.human_score + state.computer_score <= state.rounds_played);
            assert!(state.rounds_played <= state.rounds_total);
        }

        // Wins plus ties account for every round.
        assert_eq!(
            state.human_score + state.computer_score + state.ties(),
            state.rounds_played
        );
    }

    #[test]
    #[should_panic(expected = "match already complete")]
    fn test_record_past_total_panics() {
        let mut state = MatchState::new(1);
        state.record(RoundOutcome::Tie);
        state.record(RoundOutcome::Tie);
    }

    #[test]
    fn test_result_requires_completion() {
        let mut state = MatchState::new(2);
        state.record(RoundOutcome::FirstWins);
        assert_eq!(state.result(), None);

        state.record(RoundOutcome::FirstWins);
        assert_eq!(state.result(), Some(MatchResult::HumanWins));
    }

    #[test]
    fn test_result_covers_all_three_cases() {
        let mut human = MatchState::new(1);
        human.record(RoundOutcome::FirstWins);
        assert_eq!(human.result(), Some(MatchResult::HumanWins));

        let mut computer = MatchState::new(1);
        computer.record(RoundOutcome::SecondWins);
        assert_eq!(computer.result(), Some(MatchResult::ComputerWins));

        let mut tied = MatchState::new(1);
        tied.record(RoundOutcome::Tie);
        assert_eq!(tied.result(), Some(MatchResult::Tie));
    }

    #[test]
    fn test_state_serialization() {
        let mut state = MatchState::new(5);
        state.record(RoundOutcome::FirstWins);
        state.record(RoundOutcome::Tie);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
