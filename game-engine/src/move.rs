//! Move representation for Klondike game transitions.
//!
//! Moves are the edges of the game-state graph the solver walks. Each
//! variant carries at most three small integer payloads, so a `Move` is a
//! cheap `Copy` value. The stable wire tags and extras ordering match the
//! driver's result envelopes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Turn `draw_size` cards from the hand onto the waste, flipping the
    /// waste back into the hand first when the hand is empty.
    Draw,

    /// Play the waste top onto its foundation pile.
    WasteToFoundation,

    /// Play the waste top onto tableau column `dst`.
    WasteToTableau { dst: u8 },

    /// Play the face-up top of column `src` onto its foundation pile.
    TableauToFoundation { src: u8 },

    /// Move `face_up(src)[row..]` onto column `dst`.
    TableauToTableau { src: u8, row: u8, dst: u8 },

    /// Bring a foundation top back onto tableau column `dst`. Modeled but
    /// never emitted by the solver.
    FoundationToTableau { suit: u8, dst: u8 },
}

impl Move {
    /// The stable identifier of this move kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Move::Draw => "DRAW",
            Move::WasteToFoundation => "WASTE_TO_FOUNDATION",
            Move::WasteToTableau { .. } => "WASTE_TO_TABLEAU",
            Move::TableauToFoundation { .. } => "TABLEAU_TO_FOUNDATION",
            Move::TableauToTableau { .. } => "TABLEAU_TO_TABLEAU",
            Move::FoundationToTableau { .. } => "FOUNDATION_TO_TABLEAU",
        }
    }

    /// The integer payloads of this move, in wire order.
    pub fn extras(&self) -> Vec<u8> {
        match *self {
            Move::Draw | Move::WasteToFoundation => vec![],
            Move::WasteToTableau { dst } => vec![dst],
            Move::TableauToFoundation { src } => vec![src],
            Move::TableauToTableau { src, row, dst } => vec![src, row, dst],
            Move::FoundationToTableau { suit, dst } => vec![suit, dst],
        }
    }

    /// True for moves that play a card off the waste. These re-arm the
    /// solver's single permitted deck flip.
    pub fn is_waste_play(&self) -> bool {
        matches!(self, Move::WasteToFoundation | Move::WasteToTableau { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())?;
        for extra in self.extras() {
            write!(f, " {}", extra)?;
        }
        Ok(())
    }
}
