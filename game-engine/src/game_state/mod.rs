/*!
GameState: the core struct representing a Klondike position.

A `GameState` owns the hand (stock), the waste, the four foundations, and the
tableau, together with the `Rules` it was dealt under. It exposes move
validation (`is_move_valid`), execution (`execute_move`), grouped move
generation for the solver, and the canonical state id used for transposition
pruning. The submodules split those concerns the same way the fields do.
*/

mod canonical;
mod error;
mod execution;
mod moves;
mod validation;

pub use error::GameError;

use std::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::foundations::Foundations;
use crate::rules::Rules;
use crate::tableau::Tableau;

/// Represents the complete state of a Klondike game.
///
/// The hand and the waste are stored bottom-first: the last element of the
/// hand is the next card drawn, the last element of the waste is the only
/// playable waste card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    rules: Rules,
    hand: Vec<Card>,
    waste: Vec<Card>,
    foundations: Foundations,
    tableau: Tableau,
}

impl GameState {
    /// Deal a new game. The deck's element 0 is the top of the stock; the
    /// triangle is dealt column by column, k face-down cards and one face-up
    /// card for column k, consuming from the top. The rest stays in the hand
    /// in deck order.
    pub fn new(rules: Rules, deck: Deck) -> Self {
        let mut hand: Vec<Card> = deck.into_cards();
        hand.reverse();
        let mut tableau = Tableau::new(rules.tableau_size);
        for k in 0..rules.tableau_size {
            for _ in 0..k {
                if let Some(card) = hand.pop() {
                    tableau.column_mut(k).push_face_down(card);
                }
            }
            if let Some(card) = hand.pop() {
                tableau.column_mut(k).push_face_up(card);
            }
        }
        GameState {
            rules,
            hand,
            waste: Vec::new(),
            foundations: Foundations::new(),
            tableau,
        }
    }

    /// Assemble a position from explicit components. Callers are
    /// responsible for the game invariants; intended for replay harnesses
    /// and tests. Hand and waste are bottom-first (top last).
    pub fn from_parts(
        rules: Rules,
        hand: Vec<Card>,
        waste: Vec<Card>,
        foundations: Foundations,
        tableau: Tableau,
    ) -> Self {
        GameState { rules, hand, waste, foundations, tableau }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Check if the game is won: nothing left to draw and nothing left to
    /// uncover. Any remaining face-up play reduces trivially to foundation
    /// plays, so this is the victory condition.
    pub fn is_won(&self) -> bool {
        self.hand.is_empty()
            && self.waste.is_empty()
            && self
                .tableau
                .columns()
                .iter()
                .all(|col| col.face_down().is_empty())
    }

    /// Total cards tracked by this position, foundations included.
    pub fn card_count(&self) -> usize {
        self.hand.len()
            + self.waste.len()
            + self.tableau.card_count()
            + self.foundations.card_count()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hand: {} cards, waste:", self.hand.len())?;
        match self.waste_top() {
            Some(card) => writeln!(f, " {} ({} cards)", card, self.waste.len())?,
            None => writeln!(f, " empty")?,
        }
        writeln!(f, "foundations:{}", self.foundations)?;
        write!(f, "{}", self.tableau)
    }
}
