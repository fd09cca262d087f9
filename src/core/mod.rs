//! Core data model: choices, round outcomes, match state, RNG.
//!
//! These types carry no I/O and no policy. The match loop in
//! [`crate::engine`] drives them; the collaborator seams live in
//! [`crate::players`] and [`crate::report`].

pub mod choice;
pub mod rng;
pub mod state;

pub use choice::{Choice, ParseChoiceError, RoundOutcome};
pub use rng::GameRng;
pub use state::{MatchResult, MatchState};
