//! Navigable game history kept by the demo application.
//!
//! The board only knows the moves currently on it. The history remembers moves
//! that were taken back so they can be replayed, and forgets them when a new
//! interactive move branches off an earlier position.

use shakmaty::Move;

#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
    /// Number of moves currently on the board
    index: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move that was just played on the board
    pub fn record_played(&mut self, m: Move, interactive: bool) {
        if self.index < self.moves.len() {
            if interactive || self.moves[self.index] != m {
                self.moves.truncate(self.index);
                self.moves.push(m);
            }
        } else {
            self.moves.push(m);
        }
        self.index += 1;
    }

    /// Record that the last move was taken back
    pub fn record_undone(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.moves.len()
    }

    /// The move that "next" would replay
    pub fn next_move(&self) -> Option<&Move> {
        self.moves.get(self.index)
    }

    /// Moves after the current position
    pub fn remaining(&self) -> &[Move] {
        &self.moves[self.index..]
    }
}
