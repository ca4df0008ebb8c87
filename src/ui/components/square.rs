//! Square rendering component.

use crate::domain::Piece;
use crate::models::Overlay;
use crate::ui::components::render_piece;
use crate::ui::theme::{
    CAPTURE_HINT, CHECK_GLOW, CHECK_GLOW_SCALE, COORD_TEXT_SCALE, GHOST_OPACITY, LAST_MOVE,
    MOVE_DOT_SCALE, MOVE_HINT, SELECTED, label_color, overlay, square_color,
};
use gpui::{Div, div, img, prelude::*, px};

/// Everything needed to draw one square
pub struct SquareProps {
    pub row: usize,
    pub col: usize,
    pub piece: Option<Piece>,
    /// Piece is being dragged away from this square
    pub ghost: bool,
    pub overlays: Vec<Overlay>,
    /// Rank label drawn in the top-right corner
    pub rank_label: Option<char>,
    /// File label drawn in the bottom-left corner
    pub file_label: Option<char>,
}

/// Render a single board square with overlays, optional piece and labels
pub fn render_square(props: SquareProps, square_size: f32, piece_size: f32) -> impl IntoElement {
    let SquareProps {
        row,
        col,
        piece,
        ghost,
        overlays,
        rank_label,
        file_label,
    } = props;
    let label_size = square_size * COORD_TEXT_SCALE;

    let mut el = div()
        .relative()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(square_color(row, col));

    // tints and the check glow sit under the piece
    for kind in &overlays {
        el = match kind {
            Overlay::LastMove => el.child(fill(LAST_MOVE)),
            Overlay::Selected | Overlay::HoverTarget => el.child(fill(SELECTED)),
            Overlay::Check => el.child(check_glow(square_size)),
            Overlay::MoveDot | Overlay::CaptureRing => el,
        };
    }

    el = el.when_some(piece, |el, p| {
        if ghost {
            // ghost piece on original square
            el.child(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .items_center()
                    .justify_center()
                    .opacity(GHOST_OPACITY)
                    .child(img(p.svg_path()).size(px(piece_size))),
            )
        } else {
            el.child(div().absolute().inset_0().child(render_piece(p, piece_size)))
        }
    });

    // move hints are drawn over pieces
    if overlays.contains(&Overlay::MoveDot) {
        el = el.child(move_dot(square_size));
    }
    if overlays.contains(&Overlay::CaptureRing) {
        el = el.child(capture_ring());
    }

    el.when_some(rank_label, |el, label| {
        el.child(
            div()
                .absolute()
                .top(px(2.0))
                .right(px(2.0))
                .text_size(px(label_size))
                .text_color(label_color(row, col))
                .child(label.to_string()),
        )
    })
    .when_some(file_label, |el, label| {
        el.child(
            div()
                .absolute()
                .bottom(px(2.0))
                .left(px(2.0))
                .text_size(px(label_size))
                .text_color(label_color(row, col))
                .child(label.to_string()),
        )
    })
}

fn fill(color: u32) -> Div {
    div().absolute().inset_0().bg(overlay(color))
}

fn move_dot(square_size: f32) -> Div {
    let diameter = square_size * MOVE_DOT_SCALE;
    let offset = (square_size - diameter) / 2.0;
    div()
        .absolute()
        .left(px(offset))
        .top(px(offset))
        .size(px(diameter))
        .rounded_full()
        .bg(overlay(MOVE_HINT))
}

fn capture_ring() -> Div {
    div()
        .absolute()
        .inset_0()
        .rounded_full()
        .border_4()
        .border_color(overlay(CAPTURE_HINT))
}

fn check_glow(square_size: f32) -> Div {
    let diameter = square_size * CHECK_GLOW_SCALE;
    let offset = (square_size - diameter) / 2.0;
    div()
        .absolute()
        .left(px(offset))
        .top(px(offset))
        .size(px(diameter))
        .rounded_full()
        .bg(overlay(CHECK_GLOW))
}
