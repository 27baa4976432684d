//! A pure, type-safe implementation of Klondike solitaire game logic.
//!
//! This crate provides the core building blocks for a Klondike solver or
//! any related application. It is designed to be:
//!
//! - **Pure**: Contains only game logic, with no I/O or solver-specific
//!   state.
//! - **Type-Safe**: Uses Rust's type system to keep invalid moves and
//!   malformed positions out of the game model.
//!
//! ## What is Klondike?
//!
//! Klondike is the classic solitaire game. A shuffled 52-card deck deals a
//! triangle of tableau columns (column k gets k face-down cards under one
//! face-up card); the rest forms the hand (stock). Cards turn from the hand
//! onto the waste in fixed-size draws, and only the waste top is playable.
//! Tableau stacks build downward in alternating colors; the four
//! foundations build upward by suit from Ace to King. The game is won when
//! every card can reach its foundation.
//!
//! ## Key Concepts
//!
//! - [`Card`], [`Rank`], [`Suit`]: immutable card values with the
//!   two-character text form used by deck input.
//! - [`Deck`]: an initial deal order of 52 distinct cards.
//! - [`Rules`]: draw size and tableau width.
//! - [`GameState`]: a full position. Validate moves with
//!   `is_move_valid`, apply them with `execute_move`, and identify
//!   search-equivalent positions with `canonical_id`.
//! - [`Move`]: the six Klondike move kinds as a small `Copy` value.

pub mod card;
pub mod deck;
pub mod foundations;
pub mod game_state;
pub mod r#move;
pub mod rules;
pub mod tableau;

// Re-export commonly used types for convenience
pub use card::{Card, Color, Rank, Suit};
pub use deck::Deck;
pub use foundations::Foundations;
pub use game_state::{GameError, GameState};
pub use r#move::Move;
pub use rules::Rules;
pub use tableau::{Column, Tableau};
