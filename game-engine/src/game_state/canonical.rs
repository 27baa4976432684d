//! Canonical state identity.
//!
//! Positions the search should treat as one equivalence class map to the
//! same ASCII key: draw piles that expose the same waste tops, foundations
//! at the same heights, and tableau columns up to reordering of the fully
//! face-up ones. The solver stores these keys in its transposition cache.

use super::GameState;
use crate::card::{Card, Suit};

fn push_card(key: &mut String, card: &Card) {
    key.push(card.rank().to_char());
    key.push(card.suit().to_char());
}

fn include<'a>(accessible: &mut Vec<&'a Card>, card: &'a Card) {
    if !accessible.contains(&card) {
        accessible.push(card);
    }
}

impl GameState {
    /// Build the canonical key of this position. `can_flip_deck` is part of
    /// the identity because a position with a spent deck flip reaches fewer
    /// states than the same layout with the flip available.
    pub fn canonical_id(&self, can_flip_deck: bool) -> String {
        let mut key = String::with_capacity(160);
        key.push(if can_flip_deck { '1' } else { '0' });
        key.push(';');

        if let Some(card) = self.waste.last() {
            push_card(&mut key, card);
        }
        key.push(';');

        for card in self.accessible_draw_cards() {
            push_card(&mut key, card);
        }
        key.push(';');

        for (index, suit) in Suit::ALL.iter().enumerate() {
            if index > 0 {
                key.push(',');
            }
            let height = self.foundations.top(*suit).map_or(0, |rank| rank as u8);
            key.push_str(&height.to_string());
        }
        key.push(';');

        // Fully face-up columns are interchangeable, so their strings sort;
        // columns with hidden cards keep their index because the hidden
        // contents are fixed by the deal.
        let mut columns: Vec<String> = self
            .tableau
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if column.face_down().is_empty() {
                    column.face_up_key()
                } else {
                    format!("{}:{}:{}", index, column.face_down().len(), column.face_up_key())
                }
            })
            .collect();
        columns.sort_unstable();
        key.push_str(&columns.join("|"));
        key
    }

    /// The cards that future draws can put on top of the waste, assuming
    /// no intervening waste plays. Both piles store their top last, so the
    /// flattened draw cycle is `waste ++ reverse(hand)`: the remaining hand
    /// drains first, then the flip replays the whole pile from its bottom.
    /// A draw surfaces every `draw_size`-th card of the part it walks, plus
    /// that part's last card (the short draw that empties the hand resets
    /// the batch phase, so the hand part and the flipped pile step
    /// separately). The current waste top completes the set. Insertion
    /// order, deduplicated.
    fn accessible_draw_cards(&self) -> Vec<&Card> {
        let new_deck: Vec<&Card> = self.waste.iter().chain(self.hand.iter().rev()).collect();
        let mut accessible: Vec<&Card> = Vec::new();
        if new_deck.is_empty() {
            return accessible;
        }
        let draw = self.rules.draw_size;
        let waste_len = self.waste.len();
        let last = new_deck.len() - 1;

        // Tops surfaced while the current hand lasts.
        let mut index = waste_len + draw - 1;
        while index <= last {
            include(&mut accessible, new_deck[index]);
            index += draw;
        }
        if waste_len <= last {
            include(&mut accessible, new_deck[last]);
        }

        // Tops after the flip: the whole pile redraws in the same steps and
        // repeats identically on every further flip.
        let mut index = draw - 1;
        while index <= last {
            include(&mut accessible, new_deck[index]);
            index += draw;
        }
        include(&mut accessible, new_deck[last]);

        if waste_len > 0 {
            include(&mut accessible, new_deck[waste_len - 1]);
        }
        accessible
    }
}
