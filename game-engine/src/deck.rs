//! Deck construction and parsing.
//!
//! A deck is an ordered sequence of 52 distinct cards; element 0 is the top
//! of the stock. The text form is a single 104-character line, two
//! characters per card with no separator, as consumed by the solver driver.

use std::collections::HashSet;
use std::fmt;

use crate::card::Card;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An initial deal order for a game. Element 0 is the top of the stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The unshuffled reference deck: suits in fixed order (S, H, D, C),
    /// each running Ace through King.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in crate::card::Suit::ALL {
            for rank in crate::card::Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Parse a deck from its 104-character line.
    pub fn parse(line: &str) -> Result<Self, DeckError> {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != DECK_SIZE * 2 {
            return Err(DeckError::WrongLength(chars.len()));
        }
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for pair in chars.chunks(2) {
            let card = Card::from_chars(pair[0], pair[1]).map_err(|_| DeckError::InvalidCard {
                position: cards.len(),
                text: pair.iter().collect(),
            })?;
            cards.push(card);
        }
        Deck::from_cards(cards)
    }

    /// Build a deck from 52 cards, rejecting duplicates.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongLength(cards.len() * 2));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if !seen.insert(*card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }
        Ok(Deck { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

/// Error type for deck construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The input does not describe exactly 52 cards (length in characters).
    WrongLength(usize),
    /// A character pair is not a card.
    InvalidCard { position: usize, text: String },
    /// The same card appears twice.
    DuplicateCard(Card),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::WrongLength(n) => {
                write!(f, "Deck line must be {} characters, got {}", DECK_SIZE * 2, n)
            }
            DeckError::InvalidCard { position, text } => {
                write!(f, "Invalid card {:?} at deck position {}", text, position)
            }
            DeckError::DuplicateCard(card) => write!(f, "Duplicate card {} in deck", card),
        }
    }
}

impl std::error::Error for DeckError {}
