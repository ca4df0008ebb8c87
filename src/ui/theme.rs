//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb, rgba};

// Layout constants
pub const PIECE_SCALE: f32 = 1.0; // piece size relative to square
pub const GHOST_OPACITY: f32 = 0.5;
pub const MIN_SQUARE_SIZE: f32 = 25.0; // 200px minimum widget / 8
pub const MOVE_DOT_SCALE: f32 = 0.3; // dot diameter relative to square
pub const CHECK_GLOW_SCALE: f32 = 0.9;
pub const COORD_TEXT_SCALE: f32 = 0.2;

// Initial panel size before the first measurement
pub const INITIAL_BOARD_PANEL: f32 = 480.0;
pub const CONTROL_BAR_HEIGHT: f32 = 50.0;
pub const WINDOW_MARGIN: f32 = 20.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xF0D9B5;
pub const DARK_SQUARE: u32 = 0xB58863;

// Overlay colors (RGBA)
pub const LAST_MOVE: u32 = 0x9BC70069;
pub const SELECTED: u32 = 0x14551E80;
pub const MOVE_HINT: u32 = 0x14551E32;
pub const CAPTURE_HINT: u32 = 0x1455004C;
pub const CHECK_GLOW: u32 = 0xFF000096;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;

/// Get the color for a board square based on its visual position
pub fn square_color(row: usize, col: usize) -> Rgba {
    if is_light(row, col) {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}

/// Coordinate labels use the opposite square color
pub fn label_color(row: usize, col: usize) -> Rgba {
    if is_light(row, col) {
        rgb(DARK_SQUARE)
    } else {
        rgb(LIGHT_SQUARE)
    }
}

pub fn overlay(color: u32) -> Rgba {
    rgba(color)
}

fn is_light(row: usize, col: usize) -> bool {
    (row + col) % 2 == 0
}
