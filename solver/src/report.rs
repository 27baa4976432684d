//! Result envelopes written to standard output.
//!
//! One JSON envelope per input deck, on its own line, after any
//! informational replay lines. Field names are part of the wire format.

use klondike_game_engine::{Deck, Move};
use serde::Serialize;

use crate::solve::SolveOutcome;

/// Implementation tag carried in every envelope.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Win,
    Lose,
    Timeout,
}

/// A move in wire form: the stable kind tag plus its integer payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub extras: Vec<u8>,
}

impl From<Move> for MoveRecord {
    fn from(m: Move) -> Self {
        MoveRecord { kind: m.tag(), extras: m.extras() }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub deck: Vec<String>,
    pub status: Status,
    pub winning_moves: Option<Vec<MoveRecord>>,
    pub moves_considered: u64,
    pub elapsed_seconds: f64,
    pub timeout_seconds: f64,
    pub version: &'static str,
}

impl ResultEnvelope {
    /// Assemble the envelope for one deck. `verified` carries the winning
    /// moves only when the replay check passed; a solver win that fails
    /// verification is downgraded to a loss by the caller passing None.
    pub fn new(
        deck: &Deck,
        outcome: &SolveOutcome,
        verified: Option<&[Move]>,
        timeout_seconds: f64,
    ) -> Self {
        let status = if verified.is_some() {
            Status::Win
        } else if outcome.timed_out {
            Status::Timeout
        } else {
            Status::Lose
        };
        ResultEnvelope {
            deck: deck.cards().iter().map(|card| card.to_string()).collect(),
            status,
            winning_moves: verified
                .map(|moves| moves.iter().map(|m| MoveRecord::from(*m)).collect()),
            moves_considered: outcome.calls,
            elapsed_seconds: outcome.elapsed.as_secs_f64(),
            timeout_seconds,
            version: VERSION,
        }
    }
}
