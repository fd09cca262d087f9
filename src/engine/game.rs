//! The match loop: a fixed number of rounds between two seats.
//!
//! ## Lifecycle
//!
//! A match moves `NotStarted -> InProgress -> Completed`, or
//! `InProgress -> Cancelled` the moment the human seat declines to answer.
//! Both terminal states carry the final [`MatchState`]; only `Completed`
//! carries a [`MatchResult`], because a cancelled match has no result and
//! emits no final summary.
//!
//! ## Output
//!
//! The loop's only side effect is the transcript written through the
//! injected [`Reporter`]: a header, two lines per completed round (outcome
//! and running score), and either a cancellation notice or a two-line final
//! summary.

use crate::core::{MatchResult, MatchState, RoundOutcome};
use crate::players::{Player, Selection, Strategy};
use crate::report::Reporter;

use super::round::{resolve_round, RoundRecord};

/// Match parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Number of rounds to play. Must be at least 1.
    pub rounds: u32,
}

impl MatchConfig {
    /// Default match length.
    pub const DEFAULT_ROUNDS: u32 = 5;

    /// Create a config for a match of `rounds` rounds.
    #[must_use]
    pub fn new(rounds: u32) -> Self {
        assert!(rounds > 0, "a match must have at least 1 round");
        Self { rounds }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROUNDS)
    }
}

/// Terminal state of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// All rounds were played.
    Completed {
        /// Final comparison of the two scores.
        result: MatchResult,
        /// Scores at the end of the last round.
        state: MatchState,
        /// Every round, in play order.
        rounds: Vec<RoundRecord>,
    },
    /// The human cancelled before the last round finished.
    Cancelled {
        /// Scores for the rounds that did complete.
        state: MatchState,
        /// The rounds that completed before cancellation.
        rounds: Vec<RoundRecord>,
    },
}

impl MatchOutcome {
    /// The final scores, regardless of how the match ended.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        match self {
            MatchOutcome::Completed { state, .. } | MatchOutcome::Cancelled { state, .. } => state,
        }
    }

    /// The completed rounds, regardless of how the match ended.
    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        match self {
            MatchOutcome::Completed { rounds, .. } | MatchOutcome::Cancelled { rounds, .. } => {
                rounds
            }
        }
    }
}

/// Runs matches for a given configuration.
///
/// The engine owns no I/O: both seats and the output surface are injected
/// per call, so the same engine value can run an interactive session or a
/// fully scripted test.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play one match to a terminal state.
    ///
    /// Each round asks the human seat first; a cancellation halts the loop
    /// immediately, skipping the remaining rounds and the final summary.
    /// Otherwise the computer seat answers, the round is resolved with the
    /// human in the first seat, and the running score is reported.
    pub fn play<H, C, R>(&self, human: &mut H, computer: &mut C, reporter: &mut R) -> MatchOutcome
    where
        H: Player + ?Sized,
        C: Strategy + ?Sized,
        R: Reporter + ?Sized,
    {
        let total = self.config.rounds;
        let mut state = MatchState::new(total);
        let mut rounds = Vec::with_capacity(total as usize);

        reporter.report(&format!(
            "--- Rock Paper Scissors: Best of {total} rounds ---"
        ));

        for number in 1..=total {
            let human_choice = match human.choose() {
                Selection::Chosen(choice) => choice,
                Selection::Cancelled => {
                    log::debug!("match cancelled at round {number} of {total}");
                    reporter.report("Game cancelled by the user.");
                    return MatchOutcome::Cancelled { state, rounds };
                }
            };
            let computer_choice = computer.choose();
            let outcome = resolve_round(human_choice, computer_choice);
            log::debug!(
                "round {number}: human {human_choice} vs computer {computer_choice} -> {outcome:?}"
            );

            state.record(outcome);
            rounds.push(RoundRecord {
                number,
                human: human_choice,
                computer: computer_choice,
                outcome,
            });

            reporter.report(&match outcome {
                RoundOutcome::Tie => {
                    format!("Round {number}: Tie! Both chose {human_choice}.")
                }
                RoundOutcome::FirstWins => {
                    format!("Round {number}: You win! {human_choice} beats {computer_choice}.")
                }
                RoundOutcome::SecondWins => {
                    format!("Round {number}: You lose! {computer_choice} beats {human_choice}.")
                }
            });
            reporter.report(&format!(
                "Score after round {number}: You {} - Computer {}",
                state.human_score, state.computer_score
            ));
        }

        let result = state
            .result()
            .expect("all rounds played, result must exist");

        reporter.report("--- Final Result ---");
        let scores = format!(
            "Final score: You {} - Computer {}",
            state.human_score, state.computer_score
        );
        reporter.report(&match result {
            MatchResult::HumanWins => format!("You are the overall winner! {scores}"),
            MatchResult::ComputerWins => format!("Computer wins the game. {scores}"),
            MatchResult::Tie => format!("The game is a tie! {scores}"),
        });

        MatchOutcome::Completed {
            result,
            state,
            rounds,
        }
    }
}
