//! Ruleset configuration and stacking predicates for Klondike moves.

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};

/// Configurable rules of a game: how many cards turn per draw and how many
/// tableau columns the deal produces. Both must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub draw_size: usize,
    pub tableau_size: usize,
}

impl Rules {
    pub fn new(draw_size: usize, tableau_size: usize) -> Self {
        Rules { draw_size, tableau_size }
    }

    /// Cards consumed by the opening deal.
    pub fn triangle_size(&self) -> usize {
        self.tableau_size * (self.tableau_size + 1) / 2
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules { draw_size: 3, tableau_size: 7 }
    }
}

/// Returns true if `moving` can be placed on `target` in the tableau
/// (alternating color, descending rank).
pub fn can_stack_on_tableau(moving: &Card, target: &Card) -> bool {
    (moving.rank() as u8 + 1 == target.rank() as u8) && (moving.color() != target.color())
}

/// Returns true if `card` is the next card for a foundation whose top rank
/// is `foundation_top` (Ace on an empty foundation). The caller matches the
/// foundation to the card's suit.
pub fn can_move_to_foundation(card: &Card, foundation_top: Option<Rank>) -> bool {
    match foundation_top {
        None => card.rank() == Rank::Ace,
        Some(top) => top as u8 + 1 == card.rank() as u8,
    }
}

/// Returns true if `card` can start an empty tableau column (Kings only).
pub fn can_start_empty_column(card: &Card) -> bool {
    card.rank() == Rank::King
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use rstest::rstest;

    fn card(text: &str) -> Card {
        text.parse().unwrap()
    }

    #[rstest]
    #[case("7H", "8S", true)] // Red 7 on Black 8
    #[case("6C", "7D", true)] // Black 6 on Red 7
    #[case("AH", "2C", true)] // Red Ace on Black 2
    #[case("8H", "7S", false)] // Wrong rank order
    #[case("7H", "8D", false)] // Same color
    #[case("7H", "7S", false)] // Same rank
    #[case("7H", "9S", false)] // Gap in ranks
    fn can_stack_on_tableau_test(#[case] moving: &str, #[case] target: &str, #[case] expected: bool) {
        assert_eq!(can_stack_on_tableau(&card(moving), &card(target)), expected);
    }

    #[rstest]
    #[case("AH", None, true)] // Ace on empty
    #[case("2H", Some(Rank::Ace), true)]
    #[case("KS", Some(Rank::Queen), true)]
    #[case("2H", None, false)] // Non-Ace on empty
    #[case("3H", Some(Rank::Ace), false)] // Skip rank
    #[case("AH", Some(Rank::Ace), false)] // Ace on Ace
    fn can_move_to_foundation_test(
        #[case] moving: &str,
        #[case] foundation_top: Option<Rank>,
        #[case] expected: bool,
    ) {
        assert_eq!(can_move_to_foundation(&card(moving), foundation_top), expected);
    }

    #[rstest]
    #[case("KD", true)]
    #[case("QD", false)]
    #[case("AS", false)]
    fn can_start_empty_column_test(#[case] moving: &str, #[case] expected: bool) {
        assert_eq!(can_start_empty_column(&card(moving)), expected);
    }

    #[test]
    fn default_rules_are_three_card_draw_seven_columns() {
        let rules = Rules::default();
        assert_eq!(rules.draw_size, 3);
        assert_eq!(rules.tableau_size, 7);
        assert_eq!(rules.triangle_size(), 28);
    }

    #[test]
    fn card_helper_uses_suit_order() {
        assert_eq!(card("AS").suit(), Suit::Spades);
    }
}
