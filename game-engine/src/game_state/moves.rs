//! Grouped move generation for GameState.
//!
//! The solver orders and caches these groups; the engine only knows which
//! moves are legal. Every generator filters through `is_move_valid`.

use super::GameState;
use crate::r#move::Move;

impl GameState {
    /// Foundation plays of Aces: the waste top first, then tableau tops in
    /// column order. These are always safe and get tried before anything
    /// else.
    pub fn ace_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some(card) = self.waste_top() {
            if card.is_ace() && self.is_move_valid(&Move::WasteToFoundation).is_ok() {
                moves.push(Move::WasteToFoundation);
            }
        }
        for src in 0..self.tableau.column_count() {
            if let Some(card) = self.tableau.column(src).top_card() {
                let m = Move::TableauToFoundation { src: src as u8 };
                if card.is_ace() && self.is_move_valid(&m).is_ok() {
                    moves.push(m);
                }
            }
        }
        moves
    }

    /// Non-Ace foundation plays, waste first then tableau tops.
    pub fn foundation_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some(card) = self.waste_top() {
            if !card.is_ace() && self.is_move_valid(&Move::WasteToFoundation).is_ok() {
                moves.push(Move::WasteToFoundation);
            }
        }
        for src in 0..self.tableau.column_count() {
            if let Some(card) = self.tableau.column(src).top_card() {
                let m = Move::TableauToFoundation { src: src as u8 };
                if !card.is_ace() && self.is_move_valid(&m).is_ok() {
                    moves.push(m);
                }
            }
        }
        moves
    }

    /// Full-stack tableau-to-tableau moves (row 0). Moving the whole
    /// face-up stack is what exposes a face-down card. Unsorted; legality
    /// depends only on the face-up layout.
    pub fn revealing_tableau_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for src in 0..self.tableau.column_count() {
            if self.tableau.column(src).face_up().is_empty() {
                continue;
            }
            for dst in 0..self.tableau.column_count() {
                if src == dst {
                    continue;
                }
                let m = Move::TableauToTableau { src: src as u8, row: 0, dst: dst as u8 };
                if self.is_move_valid(&m).is_ok() {
                    moves.push(m);
                }
            }
        }
        moves
    }

    /// The waste top onto every legal tableau column.
    pub fn waste_to_tableau_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.waste_top().is_none() {
            return moves;
        }
        for dst in 0..self.tableau.column_count() {
            let m = Move::WasteToTableau { dst: dst as u8 };
            if self.is_move_valid(&m).is_ok() {
                moves.push(m);
            }
        }
        moves
    }

    /// Partial-stack tableau-to-tableau moves (row >= 1). These never
    /// expose a face-down card; legality depends only on the face-up
    /// layout.
    pub fn partial_stack_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for src in 0..self.tableau.column_count() {
            for row in 1..self.tableau.column(src).face_up().len() {
                for dst in 0..self.tableau.column_count() {
                    if src == dst {
                        continue;
                    }
                    let m = Move::TableauToTableau {
                        src: src as u8,
                        row: row as u8,
                        dst: dst as u8,
                    };
                    if self.is_move_valid(&m).is_ok() {
                        moves.push(m);
                    }
                }
            }
        }
        moves
    }

    pub fn can_draw(&self) -> bool {
        self.is_move_valid(&Move::Draw).is_ok()
    }
}
