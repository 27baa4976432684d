//! Ordered candidate-move enumeration.
//!
//! Assembles the per-node move list in priority order: Ace plays, other
//! foundation plays, card-revealing tableau moves (sorted by face-down
//! depth), waste-to-tableau plays, the draw, and finally partial-stack
//! tableau moves. The two tableau-to-tableau groups depend only on the
//! face-up layout, so their legality is cached per layout for the whole
//! search.

use fxhash::FxHashMap;
use klondike_game_engine::{GameState, Move};

pub struct MoveEnumerator {
    revealing: FxHashMap<String, Vec<Move>>,
    partial: FxHashMap<String, Vec<Move>>,
    hits: u64,
    misses: u64,
}

impl MoveEnumerator {
    pub fn new() -> Self {
        MoveEnumerator {
            revealing: FxHashMap::default(),
            partial: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// The ordered candidate moves for this position. Earlier moves are
    /// tried first by the search.
    pub fn candidate_moves(&mut self, game: &GameState) -> Vec<Move> {
        let mut moves = game.ace_moves();
        moves.extend(game.foundation_moves());

        let layout = game.tableau().face_up_layout_key();

        let mut revealing = match self.revealing.get(&layout) {
            Some(cached) => {
                self.hits += 1;
                cached.clone()
            }
            None => {
                self.misses += 1;
                let generated = game.revealing_tableau_moves();
                self.revealing.insert(layout.clone(), generated.clone());
                generated
            }
        };
        // The sort depends on face-down depths, which the layout key does
        // not capture, so it runs on every node.
        sort_revealing(&mut revealing, game);
        moves.extend(revealing);

        moves.extend(game.waste_to_tableau_moves());

        if game.can_draw() {
            moves.push(Move::Draw);
        }

        match self.partial.get(&layout) {
            Some(cached) => {
                self.hits += 1;
                moves.extend(cached.iter().copied());
            }
            None => {
                self.misses += 1;
                let generated = game.partial_stack_moves();
                moves.extend(generated.iter().copied());
                self.partial.insert(layout, generated);
            }
        }

        moves
    }

    /// Fraction of layout-cache lookups answered from the cache.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

}

impl Default for MoveEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Order revealing moves by the source's face-down depth. With an empty
/// column on the board the deepest sources go first (a King move there
/// uncovers the most); with no empty column the shallowest go first (the
/// source closest to opening a column). Ties break by source index.
fn sort_revealing(moves: &mut [Move], game: &GameState) {
    let prefer_deepest = game.tableau().has_empty_column();
    moves.sort_by(|a, b| {
        let (src_a, depth_a) = source_depth(a, game);
        let (src_b, depth_b) = source_depth(b, game);
        let by_depth = if prefer_deepest {
            depth_b.cmp(&depth_a)
        } else {
            depth_a.cmp(&depth_b)
        };
        by_depth.then(src_a.cmp(&src_b))
    });
}

fn source_depth(m: &Move, game: &GameState) -> (u8, usize) {
    match m {
        Move::TableauToTableau { src, .. } => {
            (*src, game.tableau().column(*src as usize).face_down().len())
        }
        _ => (0, 0),
    }
}
