//! Move validation logic for GameState.

use super::{GameError, GameState};
use crate::card::{Card, Suit};
use crate::r#move::Move;
use crate::rules;

impl GameState {
    /// Validates a move without executing it.
    pub fn is_move_valid(&self, m: &Move) -> Result<(), GameError> {
        match *m {
            Move::Draw => self.validate_draw(),
            Move::WasteToFoundation => self.validate_waste_to_foundation(),
            Move::WasteToTableau { dst } => self.validate_waste_to_tableau(dst),
            Move::TableauToFoundation { src } => self.validate_tableau_to_foundation(src),
            Move::TableauToTableau { src, row, dst } => {
                self.validate_tableau_to_tableau(src, row, dst)
            }
            Move::FoundationToTableau { suit, dst } => {
                self.validate_foundation_to_tableau(suit, dst)
            }
        }
    }

    fn column_in_range(&self, column: u8) -> Result<usize, GameError> {
        let index = column as usize;
        if index < self.tableau.column_count() {
            Ok(index)
        } else {
            Err(GameError::ColumnOutOfRange { column })
        }
    }

    /// Shared landing rule: a King may start an empty column, anything else
    /// must continue the destination stack.
    fn validate_drop_on_column(&self, card: &Card, dst: usize) -> Result<(), GameError> {
        match self.tableau.column(dst).top_card() {
            None => {
                if rules::can_start_empty_column(card) {
                    Ok(())
                } else {
                    Err(GameError::NeedsKingForEmptyColumn)
                }
            }
            Some(top) => {
                if rules::can_stack_on_tableau(card, top) {
                    Ok(())
                } else {
                    Err(GameError::CannotStackOnTableau)
                }
            }
        }
    }

    fn validate_draw(&self) -> Result<(), GameError> {
        if self.hand.is_empty() && self.waste.is_empty() {
            Err(GameError::EmptyHandAndWaste)
        } else {
            Ok(())
        }
    }

    fn validate_waste_to_foundation(&self) -> Result<(), GameError> {
        let card = self.waste_top().ok_or(GameError::EmptyWaste)?;
        if self.foundations.accepts(card) {
            Ok(())
        } else {
            Err(GameError::CannotMoveToFoundation)
        }
    }

    fn validate_waste_to_tableau(&self, dst: u8) -> Result<(), GameError> {
        let card = *self.waste_top().ok_or(GameError::EmptyWaste)?;
        let dst = self.column_in_range(dst)?;
        self.validate_drop_on_column(&card, dst)
    }

    fn validate_tableau_to_foundation(&self, src: u8) -> Result<(), GameError> {
        let index = self.column_in_range(src)?;
        let card = self
            .tableau
            .column(index)
            .top_card()
            .ok_or(GameError::NoCardInColumn { column: src })?;
        if self.foundations.accepts(card) {
            Ok(())
        } else {
            Err(GameError::CannotMoveToFoundation)
        }
    }

    fn validate_tableau_to_tableau(&self, src: u8, row: u8, dst: u8) -> Result<(), GameError> {
        if src == dst {
            return Err(GameError::SameColumn { column: src });
        }
        let src_index = self.column_in_range(src)?;
        let dst_index = self.column_in_range(dst)?;
        let card = *self
            .tableau
            .column(src_index)
            .face_up()
            .get(row as usize)
            .ok_or(GameError::RowOutOfRange { column: src, row })?;
        self.validate_drop_on_column(&card, dst_index)
    }

    fn validate_foundation_to_tableau(&self, suit: u8, dst: u8) -> Result<(), GameError> {
        let parsed = Suit::try_from(suit).map_err(|_| GameError::SuitOutOfRange { suit })?;
        let top = self
            .foundations
            .top(parsed)
            .ok_or(GameError::EmptyFoundation { suit })?;
        let card = Card::new(top, parsed);
        let dst_index = self.column_in_range(dst)?;
        let dst_top = self
            .tableau
            .column(dst_index)
            .top_card()
            .ok_or(GameError::FoundationToEmptyColumn)?;
        if rules::can_stack_on_tableau(&card, dst_top) {
            Ok(())
        } else {
            Err(GameError::CannotStackOnTableau)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::foundations::Foundations;
    use crate::rules::Rules;
    use crate::tableau::{Column, Tableau};
    use rstest::rstest;

    fn card(text: &str) -> Card {
        text.parse().unwrap()
    }

    fn cards(texts: &[&str]) -> Vec<Card> {
        texts.iter().map(|t| card(t)).collect()
    }

    /// Hand [2C], waste top 7H, foundation H up to Ace, and three columns:
    /// col 0 = 8S on one face-down card, col 1 = empty, col 2 = 2H.
    fn sample_game() -> GameState {
        let mut foundations = Foundations::new();
        foundations.place(Suit::Hearts);
        let tableau = Tableau::from_columns(vec![
            Column::with_cards(cards(&["5C"]), cards(&["8S"])),
            Column::new(),
            Column::with_cards(vec![], cards(&["2H"])),
        ]);
        GameState::from_parts(
            Rules::new(3, 3),
            cards(&["2C"]),
            cards(&["KD", "7H"]),
            foundations,
            tableau,
        )
    }

    #[rstest]
    #[case(Move::Draw, Ok(()))]
    #[case(Move::WasteToFoundation, Err(GameError::CannotMoveToFoundation))]
    #[case(Move::WasteToTableau { dst: 0 }, Ok(()))] // 7H on 8S
    #[case(Move::WasteToTableau { dst: 1 }, Err(GameError::NeedsKingForEmptyColumn))]
    #[case(Move::WasteToTableau { dst: 2 }, Err(GameError::CannotStackOnTableau))]
    #[case(Move::WasteToTableau { dst: 3 }, Err(GameError::ColumnOutOfRange { column: 3 }))]
    #[case(Move::TableauToFoundation { src: 2 }, Ok(()))] // 2H follows AH
    #[case(Move::TableauToFoundation { src: 0 }, Err(GameError::CannotMoveToFoundation))]
    #[case(Move::TableauToFoundation { src: 1 }, Err(GameError::NoCardInColumn { column: 1 }))]
    #[case(Move::TableauToTableau { src: 0, row: 0, dst: 0 }, Err(GameError::SameColumn { column: 0 }))]
    #[case(Move::TableauToTableau { src: 0, row: 1, dst: 1 }, Err(GameError::RowOutOfRange { column: 0, row: 1 }))]
    #[case(Move::TableauToTableau { src: 0, row: 0, dst: 1 }, Err(GameError::NeedsKingForEmptyColumn))]
    #[case(Move::TableauToTableau { src: 2, row: 0, dst: 0 }, Err(GameError::CannotStackOnTableau))]
    #[case(Move::FoundationToTableau { suit: 1, dst: 0 }, Err(GameError::CannotStackOnTableau))]
    #[case(Move::FoundationToTableau { suit: 0, dst: 0 }, Err(GameError::EmptyFoundation { suit: 0 }))]
    #[case(Move::FoundationToTableau { suit: 1, dst: 1 }, Err(GameError::FoundationToEmptyColumn))]
    #[case(Move::FoundationToTableau { suit: 4, dst: 0 }, Err(GameError::SuitOutOfRange { suit: 4 }))]
    fn legality_table(#[case] m: Move, #[case] expected: Result<(), GameError>) {
        assert_eq!(sample_game().is_move_valid(&m), expected);
    }

    #[test]
    fn draw_needs_a_card_somewhere() {
        let game = GameState::from_parts(
            Rules::new(1, 1),
            vec![],
            vec![],
            Foundations::new(),
            Tableau::new(1),
        );
        assert_eq!(game.is_move_valid(&Move::Draw), Err(GameError::EmptyHandAndWaste));

        let game = GameState::from_parts(
            Rules::new(1, 1),
            vec![],
            cards(&["7H"]),
            Foundations::new(),
            Tableau::new(1),
        );
        assert_eq!(game.is_move_valid(&Move::Draw), Ok(()));
    }

    #[test]
    fn king_stack_may_land_on_empty_column() {
        let tableau = Tableau::from_columns(vec![
            Column::with_cards(cards(&["4D"]), cards(&["KS", "QH"])),
            Column::new(),
        ]);
        let game = GameState::from_parts(
            Rules::new(3, 2),
            vec![],
            vec![],
            Foundations::new(),
            tableau,
        );
        assert_eq!(
            game.is_move_valid(&Move::TableauToTableau { src: 0, row: 0, dst: 1 }),
            Ok(())
        );
        // The partial stack from the Queen is not King-led.
        assert_eq!(
            game.is_move_valid(&Move::TableauToTableau { src: 0, row: 1, dst: 1 }),
            Err(GameError::NeedsKingForEmptyColumn)
        );
    }

    #[test]
    fn foundation_card_may_return_onto_matching_stack() {
        let mut foundations = Foundations::new();
        foundations.place(Suit::Hearts); // AH
        foundations.place(Suit::Hearts); // 2H on top
        let tableau = Tableau::from_columns(vec![
            Column::with_cards(vec![], cards(&["3S"])),
            Column::new(),
        ]);
        let game = GameState::from_parts(
            Rules::new(3, 2),
            vec![],
            vec![],
            foundations,
            tableau,
        );
        assert_eq!(
            game.is_move_valid(&Move::FoundationToTableau { suit: 1, dst: 0 }),
            Ok(())
        );
    }

    #[test]
    fn waste_moves_need_a_waste_card() {
        let game = GameState::from_parts(
            Rules::new(3, 1),
            cards(&["2C"]),
            vec![],
            Foundations::new(),
            Tableau::new(1),
        );
        assert_eq!(
            game.is_move_valid(&Move::WasteToFoundation),
            Err(GameError::EmptyWaste)
        );
        assert_eq!(
            game.is_move_valid(&Move::WasteToTableau { dst: 0 }),
            Err(GameError::EmptyWaste)
        );
    }
}
