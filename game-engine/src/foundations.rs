//! Foundation piles tracked by their top rank per suit.
//!
//! A foundation never holds anything but a full ascending run from the Ace,
//! so the top rank is the whole state; the cards below it are implied.

use std::fmt;

use crate::card::{Card, Rank, Suit};

/// The four suit-ordered foundation piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Foundations {
    tops: [Option<Rank>; 4],
}

impl Foundations {
    pub fn new() -> Self {
        Foundations { tops: [None; 4] }
    }

    /// The top rank of a suit's pile, or None when empty.
    pub fn top(&self, suit: Suit) -> Option<Rank> {
        self.tops[suit.index()]
    }

    /// The rank the pile will accept next, or None when the pile holds a King.
    pub fn next_rank(&self, suit: Suit) -> Option<Rank> {
        match self.tops[suit.index()] {
            None => Some(Rank::Ace),
            Some(top) => Rank::try_from(top as u8 + 1).ok(),
        }
    }

    pub fn accepts(&self, card: &Card) -> bool {
        self.next_rank(card.suit()) == Some(card.rank())
    }

    /// Advance a pile by one rank. Assumes a prior validity check.
    pub fn place(&mut self, suit: Suit) {
        let slot = &mut self.tops[suit.index()];
        *slot = match *slot {
            None => Some(Rank::Ace),
            Some(top) => Rank::try_from(top as u8 + 1).ok().or(Some(top)),
        };
    }

    /// Remove and return the top card of a pile, retreating it by one rank.
    pub fn take_top(&mut self, suit: Suit) -> Option<Card> {
        let top = self.tops[suit.index()]?;
        self.tops[suit.index()] = Rank::try_from(top as u8 - 1).ok();
        Some(Card::new(top, suit))
    }

    /// Total number of cards implied by the pile heights.
    pub fn card_count(&self) -> usize {
        self.tops
            .iter()
            .map(|top| top.map_or(0, |rank| rank as usize))
            .sum()
    }

    pub fn is_complete(&self) -> bool {
        self.tops.iter().all(|top| *top == Some(Rank::King))
    }
}

impl fmt::Display for Foundations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for suit in Suit::ALL {
            match self.top(suit) {
                Some(rank) => write!(f, " {}{}", rank.to_char(), suit.to_char())?,
                None => write!(f, " -{}", suit.to_char())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_foundations_accept_only_aces() {
        let foundations = Foundations::new();
        assert_eq!(foundations.next_rank(Suit::Hearts), Some(Rank::Ace));
        assert!(foundations.accepts(&Card::new(Rank::Ace, Suit::Hearts)));
        assert!(!foundations.accepts(&Card::new(Rank::Two, Suit::Hearts)));
        assert_eq!(foundations.card_count(), 0);
    }

    #[test]
    fn place_advances_one_rank_at_a_time() {
        let mut foundations = Foundations::new();
        foundations.place(Suit::Spades);
        assert_eq!(foundations.top(Suit::Spades), Some(Rank::Ace));
        foundations.place(Suit::Spades);
        assert_eq!(foundations.top(Suit::Spades), Some(Rank::Two));
        assert!(foundations.accepts(&Card::new(Rank::Three, Suit::Spades)));
        assert!(!foundations.accepts(&Card::new(Rank::Three, Suit::Clubs)));
        assert_eq!(foundations.card_count(), 2);
    }

    #[test]
    fn take_top_retreats_the_pile() {
        let mut foundations = Foundations::new();
        foundations.place(Suit::Diamonds);
        foundations.place(Suit::Diamonds);
        let card = foundations.take_top(Suit::Diamonds);
        assert_eq!(card, Some(Card::new(Rank::Two, Suit::Diamonds)));
        assert_eq!(foundations.top(Suit::Diamonds), Some(Rank::Ace));
        assert_eq!(foundations.take_top(Suit::Diamonds), Some(Card::new(Rank::Ace, Suit::Diamonds)));
        assert_eq!(foundations.top(Suit::Diamonds), None);
        assert_eq!(foundations.take_top(Suit::Diamonds), None);
    }

    #[test]
    fn complete_when_all_piles_reach_king() {
        let mut foundations = Foundations::new();
        for suit in Suit::ALL {
            for _ in 0..13 {
                foundations.place(suit);
            }
        }
        assert!(foundations.is_complete());
        assert_eq!(foundations.card_count(), 52);
        assert_eq!(foundations.next_rank(Suit::Spades), None);
    }
}
