//! Tableau implementation: columns with a face-down and a face-up stack.

use std::fmt;

use crate::card::Card;

/// One tableau column. Both stacks are stored bottom-first; the playable
/// card is the last element of `face_up`. The face-down stack is never
/// reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    face_down: Vec<Card>,
    face_up: Vec<Card>,
}

impl Column {
    pub fn new() -> Self {
        Column { face_down: Vec::new(), face_up: Vec::new() }
    }

    pub fn with_cards(face_down: Vec<Card>, face_up: Vec<Card>) -> Self {
        Column { face_down, face_up }
    }

    pub fn face_down(&self) -> &[Card] {
        &self.face_down
    }

    pub fn face_up(&self) -> &[Card] {
        &self.face_up
    }

    /// The playable card of this column, if any.
    pub fn top_card(&self) -> Option<&Card> {
        self.face_up.last()
    }

    pub fn is_empty(&self) -> bool {
        self.face_down.is_empty() && self.face_up.is_empty()
    }

    pub fn push_face_down(&mut self, card: Card) {
        self.face_down.push(card);
    }

    pub fn push_face_up(&mut self, card: Card) {
        self.face_up.push(card);
    }

    pub fn pop_face_up(&mut self) -> Option<Card> {
        self.face_up.pop()
    }

    /// Remove and return `face_up[row..]`, leaving the first `row` cards.
    pub fn split_face_up(&mut self, row: usize) -> Vec<Card> {
        self.face_up.split_off(row)
    }

    pub fn extend_face_up(&mut self, cards: Vec<Card>) {
        self.face_up.extend(cards);
    }

    /// Turn up the top face-down card if the face-up stack is empty.
    /// Returns true if a card was flipped.
    pub fn flip_exposed(&mut self) -> bool {
        if self.face_up.is_empty() {
            if let Some(card) = self.face_down.pop() {
                self.face_up.push(card);
                return true;
            }
        }
        false
    }

    /// The face-up stack as concatenated two-character cards. Used by the
    /// canonical state id, the stack-loop guard, and the enumerator cache.
    pub fn face_up_key(&self) -> String {
        let mut key = String::with_capacity(self.face_up.len() * 2);
        for card in &self.face_up {
            key.push(card.rank().to_char());
            key.push(card.suit().to_char());
        }
        key
    }
}

impl Default for Column {
    fn default() -> Self {
        Column::new()
    }
}

/// The main play area with a configurable number of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tableau {
    columns: Vec<Column>,
}

impl Tableau {
    /// Create a new tableau with the specified number of empty columns.
    pub fn new(column_count: usize) -> Self {
        Tableau { columns: vec![Column::new(); column_count] }
    }

    pub fn from_columns(columns: Vec<Column>) -> Self {
        Tableau { columns }
    }

    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    pub fn column_mut(&mut self, index: usize) -> &mut Column {
        &mut self.columns[index]
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn has_empty_column(&self) -> bool {
        self.columns.iter().any(|col| col.is_empty())
    }

    /// Number of cards across all columns, both stacks.
    pub fn card_count(&self) -> usize {
        self.columns
            .iter()
            .map(|col| col.face_down().len() + col.face_up().len())
            .sum()
    }

    /// Turn up newly exposed cards in every column. Called once after every
    /// applied move.
    pub fn flip_exposed_cards(&mut self) {
        for column in &mut self.columns {
            column.flip_exposed();
        }
    }

    /// All face-up stacks joined into one key. Groups of tableau-to-tableau
    /// moves depend only on this layout, so it keys the enumerator cache.
    pub fn face_up_layout_key(&self) -> String {
        let mut key = String::new();
        for (index, column) in self.columns.iter().enumerate() {
            if index > 0 {
                key.push('/');
            }
            key.push_str(&column.face_up_key());
        }
        key
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, column) in self.columns.iter().enumerate() {
            write!(f, "  col {}: {} down |", index, column.face_down().len())?;
            for card in column.face_up() {
                write!(f, " {}", card)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
