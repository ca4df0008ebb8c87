//! Chess domain layer: rules-engine wrappers with no GPUI dependencies.

mod board_state;
mod chess;
mod error;

pub use board_state::BoardState;
pub use chess::{
    Piece, PieceColor, PieceKind, accepts_drop, castle_king_to, castle_rook_to, hint_square,
    landing_square, move_paths, shakmaty_to_piece, square_at, to_piece_color, visual_coords,
};
pub use error::BoardError;
