//! Board layout calculations - handles sizing and coordinate transformations.
//!
//! The board is the largest square that fits the measured widget bounds minus
//! padding, centered in both directions. Window positions are mapped to squares
//! through the current orientation.

use crate::domain::{square_at, visual_coords};
use crate::ui::theme::{INITIAL_BOARD_PANEL, MIN_SQUARE_SIZE, PIECE_SCALE};
use gpui::{Bounds, Pixels, Point, point, px, size};
use shakmaty::Square;

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    /// Widget bounds in window coordinates
    pub bounds: Bounds<Pixels>,
    pub padding: f32,
}

impl BoardLayout {
    pub fn new(bounds: Bounds<Pixels>, padding: f32) -> Self {
        Self { bounds, padding }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.bounds.size.width.into();
        let panel_height: f32 = self.bounds.size.height.into();
        let available_width = panel_width - self.padding * 2.0;
        let available_height = panel_height - self.padding * 2.0;
        (available_width.min(available_height) / 8.0).max(MIN_SQUARE_SIZE)
    }

    /// Calculate piece size based on square size
    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }

    /// Top-left corner of the board in window coordinates
    pub fn board_origin(&self) -> Point<Pixels> {
        let panel_width: f32 = self.bounds.size.width.into();
        let panel_height: f32 = self.bounds.size.height.into();
        let board = self.board_total_size();
        point(
            self.bounds.origin.x + px((panel_width - board) / 2.0),
            self.bounds.origin.y + px((panel_height - board) / 2.0),
        )
    }

    /// Convert a window position to board-local coordinates
    pub fn to_local(&self, pos: Point<Pixels>) -> (f32, f32) {
        let origin = self.board_origin();
        ((pos.x - origin.x).into(), (pos.y - origin.y).into())
    }

    /// Square under a window position, if the position is on the board
    pub fn pos_to_square(&self, pos: Point<Pixels>, flipped: bool) -> Option<Square> {
        let (x, y) = self.to_local(pos);
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let square_size = self.square_size();
        let col = (x / square_size) as usize;
        let row = (y / square_size) as usize;
        square_at(row, col, flipped)
    }

    /// Top-left corner of a square in board-local coordinates
    pub fn square_origin(&self, square: Square, flipped: bool) -> (f32, f32) {
        let (row, col) = visual_coords(square, flipped);
        let square_size = self.square_size();
        (col as f32 * square_size, row as f32 * square_size)
    }

    /// Center of a square in board-local coordinates
    pub fn square_center(&self, square: Square, flipped: bool) -> (f32, f32) {
        let (x, y) = self.square_origin(square, flipped);
        let half = self.square_size() / 2.0;
        (x + half, y + half)
    }

    /// Center of a square in window coordinates
    pub fn window_center(&self, square: Square, flipped: bool) -> Point<Pixels> {
        let origin = self.board_origin();
        let (x, y) = self.square_center(square, flipped);
        point(origin.x + px(x), origin.y + px(y))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(
            Bounds::new(
                point(px(0.0), px(0.0)),
                size(px(INITIAL_BOARD_PANEL), px(INITIAL_BOARD_PANEL)),
            ),
            20.0,
        )
    }
}
