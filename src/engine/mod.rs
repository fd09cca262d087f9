//! Round resolution and the match loop.

pub mod game;
pub mod round;

pub use game::{MatchConfig, MatchEngine, MatchOutcome};
pub use round::{resolve_round, RoundRecord};
