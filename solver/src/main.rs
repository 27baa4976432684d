//! Klondike Solitaire Solver
//!
//! Reads one 104-character deck per stdin line, searches each for a winning
//! move sequence within the per-deck wall-clock budget, and writes one JSON
//! result envelope per deck to stdout (after informational replay lines for
//! wins). Diagnostics go to stderr and never interleave with envelopes.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod enumerator;
mod report;
mod solve;
mod transposition;

use std::io::{self, BufRead};
use std::process;
use std::time::Duration;

use klondike_game_engine::{Deck, GameState, Rules};

use crate::report::ResultEnvelope;
use crate::solve::{verify_solution, Solver};

const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

fn main() {
    let timeout_seconds = match parse_timeout() {
        Ok(timeout) => timeout,
        Err(bad) => {
            eprintln!("Invalid timeout {:?}: expected a positive number of seconds", bad);
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut clean = true;
    for (line_number, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("I/O error reading input: {}", err);
                process::exit(1);
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Deck::parse(trimmed) {
            Ok(deck) => process_deck(&deck, timeout_seconds),
            Err(err) => {
                eprintln!("line {}: rejected deck: {}", line_number + 1, err);
                clean = false;
            }
        }
    }
    if !clean {
        process::exit(1);
    }
}

/// One positional argument: the per-deck timeout in seconds.
fn parse_timeout() -> Result<f64, String> {
    match std::env::args().nth(1) {
        None => Ok(DEFAULT_TIMEOUT_SECS),
        Some(arg) => arg.parse::<f64>().ok().filter(|t| *t > 0.0).ok_or(arg),
    }
}

fn process_deck(deck: &Deck, timeout_seconds: f64) {
    eprintln!("[{}] solving deck {}", chrono::Utc::now().to_rfc3339(), deck);

    let game = GameState::new(Rules::default(), deck.clone());
    let solver = Solver::new(Duration::from_secs_f64(timeout_seconds));
    let outcome = solver.solve(&game);

    // Defensive invariant check: never report a win that does not replay.
    let verified = match &outcome.winning_moves {
        Some(moves) => match verify_solution(&game, moves) {
            Ok(()) => {
                for (index, m) in moves.iter().enumerate() {
                    println!("move {:>3}: {}", index + 1, m);
                }
                Some(moves.as_slice())
            }
            Err(index) => {
                eprintln!(
                    "solver bug: move {} of {} fails replay on deck {}\n{}",
                    index,
                    moves.len(),
                    deck,
                    game
                );
                None
            }
        },
        None => None,
    };

    let envelope = ResultEnvelope::new(deck, &outcome, verified, timeout_seconds);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("failed to serialize envelope: {}", err),
    }
    eprintln!(
        "[{}] {:?} after {} nodes in {:.3}s",
        chrono::Utc::now().to_rfc3339(),
        envelope.status,
        outcome.calls,
        outcome.elapsed.as_secs_f64()
    );
}
