//! Move and undo animations.
//!
//! The board state changes immediately when a move is played or undone. An
//! animation only changes drawing: the destination squares are hidden from the
//! static board and the travelling pieces are drawn between square centers.

use std::time::{Duration, Instant};

use shakmaty::{Chess, Move, Position, Square};

use crate::domain::{Piece, move_paths, shakmaty_to_piece};
use crate::ui::BoardLayout;

/// Frame interval of the animation ticker (~60fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimatedPiece {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

#[derive(Clone, Debug)]
pub struct Animation {
    pieces: Vec<AnimatedPiece>,
    started: Instant,
    duration: Duration,
}

impl Animation {
    /// Animate the pieces that travel when `m` is played from `before`.
    /// Returns None when nothing visibly moves.
    pub fn for_move(before: &Chess, m: &Move, started: Instant, duration: Duration) -> Option<Self> {
        let pieces = travelling_pieces(before, m, false);
        Self::from_pieces(pieces, started, duration)
    }

    /// Animate taking back `m`, which was played from `before`. Pieces travel
    /// from their post-move squares back to their pre-move squares, drawn as
    /// they were before the move (a promoted queen goes back as a pawn).
    pub fn for_undo(before: &Chess, m: &Move, started: Instant, duration: Duration) -> Option<Self> {
        let pieces = travelling_pieces(before, m, true);
        Self::from_pieces(pieces, started, duration)
    }

    fn from_pieces(pieces: Vec<AnimatedPiece>, started: Instant, duration: Duration) -> Option<Self> {
        if pieces.is_empty() {
            return None;
        }
        Some(Self {
            pieces,
            started,
            duration,
        })
    }

    pub fn pieces(&self) -> &[AnimatedPiece] {
        &self.pieces
    }

    /// Whether the static board must skip this square while animating
    pub fn hides(&self, square: Square) -> bool {
        self.pieces.iter().any(|p| p.to == square)
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Current board-local centers of the travelling pieces
    pub fn frame(
        &self,
        layout: &BoardLayout,
        flipped: bool,
        now: Instant,
    ) -> Vec<(Piece, f32, f32)> {
        let t = self.progress(now);
        self.pieces
            .iter()
            .map(|p| {
                let (x0, y0) = layout.square_center(p.from, flipped);
                let (x1, y1) = layout.square_center(p.to, flipped);
                (p.piece, lerp(x0, x1, t), lerp(y0, y1, t))
            })
            .collect()
    }
}

fn travelling_pieces(before: &Chess, m: &Move, reverse: bool) -> Vec<AnimatedPiece> {
    move_paths(m)
        .into_iter()
        .filter_map(|(from, to)| {
            let piece = shakmaty_to_piece(before.board().piece_at(from)?);
            let (from, to) = if reverse { (to, from) } else { (from, to) };
            Some(AnimatedPiece { piece, from, to })
        })
        .collect()
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
