//! Errors surfaced by the board API.

use thiserror::Error;

/// Errors from the rules library, passed on to the embedding application.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// FEN text could not be parsed or describes an invalid setup.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Text is not a well-formed UCI move.
    #[error("invalid UCI move: {0}")]
    InvalidUci(String),

    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}
