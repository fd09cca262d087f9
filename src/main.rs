//! Interactive rock-paper-scissors session.
//!
//! Plays a best-of-N match against a random computer opponent on the
//! terminal. Type `quit` (or press Ctrl-C) at any prompt to cancel the
//! match. Pass `--seed` to replay a session.

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

use parlor::core::GameRng;
use parlor::engine::{MatchConfig, MatchEngine, MatchOutcome};
use parlor::players::{PromptPlayer, RandomStrategy};
use parlor::report::Reporter;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play rock-paper-scissors against the computer")]
struct Args {
    /// Number of rounds to play.
    #[arg(long, default_value_t = MatchConfig::DEFAULT_ROUNDS, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// RNG seed for the computer opponent. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,
}

/// Writes the match transcript to stdout, with the section headers bolded.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: &str) {
        if line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("Score after") {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
}

/// Read one token from the terminal.
///
/// `None` means the human cancelled: either an explicit `quit`/`q` or an
/// interrupted prompt (Ctrl-C shows up as a dialoguer error).
fn read_token(prompt: &str) -> Option<String> {
    let raw: String = Input::new()
        .with_prompt(format!("{prompt} (or \"quit\")"))
        .allow_empty(true)
        .interact_text()
        .ok()?;

    match raw.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => None,
        _ => Some(raw),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let rng = GameRng::new(args.seed.unwrap_or_else(rand::random));
    log::info!("computer seed {}", rng.seed());

    let mut human = PromptPlayer::new(read_token, |warning: &str| {
        println!("{}", warning.yellow());
    });
    let mut computer = RandomStrategy::new(rng);
    let mut reporter = ConsoleReporter;

    let engine = MatchEngine::new(MatchConfig::new(args.rounds));
    match engine.play(&mut human, &mut computer, &mut reporter) {
        MatchOutcome::Completed { .. } => {}
        MatchOutcome::Cancelled { state, .. } => {
            log::info!(
                "cancelled after {} of {} rounds",
                state.rounds_played,
                state.rounds_total
            );
        }
    }
}
