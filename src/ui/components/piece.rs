//! Piece rendering component.

use crate::domain::Piece;
use gpui::{div, img, prelude::*, px};

/// Render a chess piece centered in its container
pub fn render_piece(piece: Piece, piece_size: f32) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(img(piece.svg_path()).size(px(piece_size)))
}

/// Render a piece floating above the board, centered on board-local (x, y)
pub fn render_floating_piece(piece: Piece, x: f32, y: f32, piece_size: f32) -> impl IntoElement {
    div()
        .absolute()
        .left(px(x - piece_size / 2.0))
        .top(px(y - piece_size / 2.0))
        .size(px(piece_size))
        .child(img(piece.svg_path()).size(px(piece_size)))
}
