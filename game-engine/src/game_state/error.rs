//! Error types for GameState operations.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Draw with both the hand and the waste empty.
    EmptyHandAndWaste,
    /// A waste move with no waste card to play.
    EmptyWaste,
    /// A foundation move for a suit whose pile is empty.
    EmptyFoundation { suit: u8 },
    /// A tableau move out of an empty column.
    NoCardInColumn { column: u8 },
    ColumnOutOfRange { column: u8 },
    SuitOutOfRange { suit: u8 },
    RowOutOfRange { column: u8, row: u8 },
    /// Tableau-to-tableau with identical source and destination.
    SameColumn { column: u8 },
    /// The card is not the next in sequence for its foundation pile.
    CannotMoveToFoundation,
    /// The card does not continue the destination's face-up stack.
    CannotStackOnTableau,
    /// Only a King may land on an empty column.
    NeedsKingForEmptyColumn,
    /// Foundation cards may only return onto a non-empty column.
    FoundationToEmptyColumn,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyHandAndWaste => write!(f, "Nothing to draw: hand and waste are empty"),
            GameError::EmptyWaste => write!(f, "No card on the waste"),
            GameError::EmptyFoundation { suit } => {
                write!(f, "Foundation pile {} is empty", suit)
            }
            GameError::NoCardInColumn { column } => {
                write!(f, "No face-up card in tableau column {}", column)
            }
            GameError::ColumnOutOfRange { column } => {
                write!(f, "Tableau column {} out of range", column)
            }
            GameError::SuitOutOfRange { suit } => write!(f, "Suit index {} out of range", suit),
            GameError::RowOutOfRange { column, row } => {
                write!(f, "Row {} out of range for column {}", row, column)
            }
            GameError::SameColumn { column } => {
                write!(f, "Cannot move column {} onto itself", column)
            }
            GameError::CannotMoveToFoundation => {
                write!(f, "Card is not the next for its foundation pile")
            }
            GameError::CannotStackOnTableau => write!(f, "Cannot stack card on tableau"),
            GameError::NeedsKingForEmptyColumn => {
                write!(f, "Only a King may be placed on an empty column")
            }
            GameError::FoundationToEmptyColumn => {
                write!(f, "Foundation cards may not return to an empty column")
            }
        }
    }
}

impl std::error::Error for GameError {}
