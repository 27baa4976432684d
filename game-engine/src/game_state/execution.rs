//! Move execution logic for GameState.

use std::mem;

use super::{GameError, GameState};
use crate::card::Suit;
use crate::r#move::Move;

impl GameState {
    /// Validates a move and applies it in place. After every applied move,
    /// any column whose face-up stack emptied turns up its top face-down
    /// card (once per column).
    pub fn execute_move(&mut self, m: &Move) -> Result<(), GameError> {
        self.is_move_valid(m)?;
        match *m {
            Move::Draw => self.execute_draw(),
            Move::WasteToFoundation => {
                let card = self.waste.pop().ok_or(GameError::EmptyWaste)?;
                self.foundations.place(card.suit());
            }
            Move::WasteToTableau { dst } => {
                let card = self.waste.pop().ok_or(GameError::EmptyWaste)?;
                self.tableau.column_mut(dst as usize).push_face_up(card);
            }
            Move::TableauToFoundation { src } => {
                let card = self
                    .tableau
                    .column_mut(src as usize)
                    .pop_face_up()
                    .ok_or(GameError::NoCardInColumn { column: src })?;
                self.foundations.place(card.suit());
            }
            Move::TableauToTableau { src, row, dst } => {
                let cards = self
                    .tableau
                    .column_mut(src as usize)
                    .split_face_up(row as usize);
                self.tableau.column_mut(dst as usize).extend_face_up(cards);
            }
            Move::FoundationToTableau { suit, dst } => {
                let parsed =
                    Suit::try_from(suit).map_err(|_| GameError::SuitOutOfRange { suit })?;
                let card = self
                    .foundations
                    .take_top(parsed)
                    .ok_or(GameError::EmptyFoundation { suit })?;
                self.tableau.column_mut(dst as usize).push_face_up(card);
            }
        }
        self.tableau.flip_exposed_cards();
        Ok(())
    }

    /// Draw semantics: with an empty hand the waste flips back first (the
    /// earliest-drawn card returns to the top of the stock), then up to
    /// `draw_size` cards move from the hand top onto the waste one at a
    /// time, preserving draw order.
    fn execute_draw(&mut self) {
        if self.hand.is_empty() {
            self.hand = mem::take(&mut self.waste);
            self.hand.reverse();
        }
        for _ in 0..self.rules.draw_size {
            match self.hand.pop() {
                Some(card) => self.waste.push(card),
                None => break,
            }
        }
    }
}
