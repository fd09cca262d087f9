//! # parlor
//!
//! Console engines for three classic beginner exercises, with the event
//! handling stripped away and the rules kept: a best-of-N rock-paper-scissors
//! match, a four-function calculator, and a hover-to-shade sketch grid.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: Every counter that would be a global in a quick
//!    script is a field on a state value owned by exactly one loop.
//!
//! 2. **Injected collaborators**: The match engine never reads a terminal or
//!    writes one. It asks a [`players::Player`] for the human's throw, a
//!    [`players::Strategy`] for the computer's, and emits its transcript
//!    through a [`report::Reporter`]. Tests script all three.
//!
//! 3. **Cancellation is a value**: Declining to answer is a first-class
//!    terminal outcome, not an error. The remaining rounds are skipped and
//!    no final summary is produced.
//!
//! ## Modules
//!
//! - `core`: choices, round outcomes, match state, seeded RNG
//! - `engine`: round resolution and the match loop
//! - `players`: choice providers for both seats
//! - `report`: the line-oriented output seam
//! - `calc`: four-function calculator state machine
//! - `sketch`: the shadeable grid

pub mod calc;
pub mod core;
pub mod engine;
pub mod players;
pub mod report;
pub mod sketch;

// Re-export commonly used types
pub use crate::core::{Choice, GameRng, MatchResult, MatchState, ParseChoiceError, RoundOutcome};

pub use crate::engine::{resolve_round, MatchConfig, MatchEngine, MatchOutcome, RoundRecord};

pub use crate::players::{
    Player, PromptPlayer, RandomStrategy, ScriptedPlayer, ScriptedStrategy, Selection, Strategy,
};

pub use crate::report::{BufferReporter, Reporter};

pub use crate::calc::{operate, CalcError, Calculator, Operator};

pub use crate::sketch::{PaintMode, Rgb, Shade, SketchError, SketchPad};
