//! A lichess-style chess board widget for gpui.
//!
//! Create a [`BoardModel`] entity, render it with a [`ChessBoardView`] and
//! subscribe to [`BoardEvent`]s to learn about moves made on the board.

pub mod app;
pub mod config;
pub mod domain;
pub mod models;
pub mod ui;

pub use config::BoardConfig;
pub use domain::{BoardError, BoardState};
pub use models::{BoardEvent, BoardModel, MoveInfo, MoveOptions};
pub use ui::views::ChessBoardView;
