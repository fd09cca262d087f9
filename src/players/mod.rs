//! Choice providers for both seats of a match.
//!
//! The human seat implements [`Player`] and may cancel; the computer seat
//! implements [`Strategy`] and always answers. Keeping the seams this narrow
//! means the match loop never touches a terminal, which is what makes it
//! testable:
//!
//! - [`RandomStrategy`]: uniform random throws from a seeded RNG
//! - [`ScriptedPlayer`] / [`ScriptedStrategy`]: canned sequences for tests
//! - [`PromptPlayer`]: the re-prompt-until-valid loop over an injected
//!   prompt source, so the invalid-token path runs without a display

use std::collections::VecDeque;

use crate::core::{Choice, GameRng};

/// Text shown when asking the human for a throw.
pub const CHOICE_PROMPT: &str = "Enter your choice: rock, paper, or scissors";

/// Warning shown after an unrecognized token, before re-prompting.
pub const INVALID_CHOICE_WARNING: &str =
    "Invalid choice. Please type \"rock\", \"paper\", or \"scissors\".";

/// A human answer: either a throw or an explicit refusal to continue.
///
/// Cancellation is a normal terminal signal, not an error. The match loop
/// halts on it without emitting a final summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A valid throw.
    Chosen(Choice),
    /// The human declined to provide further input.
    Cancelled,
}

/// The human seat: asked once per round, may cancel.
///
/// Implementations own their validation loop; by the time a `Selection`
/// comes back it is either a valid choice or a cancellation, never a raw
/// token.
pub trait Player {
    /// Obtain the next throw, or a cancellation signal.
    fn choose(&mut self) -> Selection;
}

/// The computer seat: always produces a throw, never cancels.
pub trait Strategy {
    /// Produce the next throw.
    fn choose(&mut self) -> Choice;
}

/// Uniform random strategy backed by a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a strategy drawing from the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose(&mut self) -> Choice {
        Choice::ALL[self.rng.gen_range_usize(0..Choice::ALL.len())]
    }
}

/// Player that replays a fixed sequence of selections.
///
/// An exhausted script cancels, so a test that under-provisions choices
/// halts the match instead of hanging or panicking.
#[derive(Clone, Debug)]
pub struct ScriptedPlayer {
    script: VecDeque<Selection>,
}

impl ScriptedPlayer {
    /// Create a player from a selection sequence.
    pub fn new(script: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Convenience: a player that throws the given choices, then cancels.
    pub fn choices(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self::new(choices.into_iter().map(Selection::Chosen))
    }
}

impl Player for ScriptedPlayer {
    fn choose(&mut self) -> Selection {
        self.script.pop_front().unwrap_or(Selection::Cancelled)
    }
}

/// Strategy that replays a fixed sequence of throws.
///
/// Panics if asked for more throws than were scripted; a strategy has no
/// cancellation to fall back on.
#[derive(Clone, Debug)]
pub struct ScriptedStrategy {
    script: VecDeque<Choice>,
}

impl ScriptedStrategy {
    /// Create a strategy from a throw sequence.
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Strategy for ScriptedStrategy {
    fn choose(&mut self) -> Choice {
        self.script
            .pop_front()
            .expect("scripted strategy ran out of throws")
    }
}

/// Human seat driven by an injected prompt/warn pair.
///
/// Each call to [`Player::choose`] loops: ask the prompt source for a raw
/// token, parse it, and on failure emit the warning and ask again. A `None`
/// from the prompt source is the cancellation signal. Invalid tokens never
/// default silently.
///
/// The two closures are the whole UI contract: the binary wires them to
/// `dialoguer` and the terminal, tests wire them to a canned token list and
/// a warning counter.
pub struct PromptPlayer<P, W>
where
    P: FnMut(&str) -> Option<String>,
    W: FnMut(&str),
{
    prompt: P,
    warn: W,
}

impl<P, W> PromptPlayer<P, W>
where
    P: FnMut(&str) -> Option<String>,
    W: FnMut(&str),
{
    /// Create a player over a prompt source and a warning sink.
    pub fn new(prompt: P, warn: W) -> Self {
        Self { prompt, warn }
    }
}

impl<P, W> Player for PromptPlayer<P, W>
where
    P: FnMut(&str) -> Option<String>,
    W: FnMut(&str),
{
    fn choose(&mut self) -> Selection {
        loop {
            let Some(raw) = (self.prompt)(CHOICE_PROMPT) else {
                return Selection::Cancelled;
            };
            match raw.parse::<Choice>() {
                Ok(choice) => return Selection::Chosen(choice),
                Err(err) => {
                    log::debug!("rejected input: {err}");
                    (self.warn)(INVALID_CHOICE_WARNING);
                }
            }
        }
    }
}
