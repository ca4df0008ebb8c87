pub mod animation;
pub mod board;
pub mod highlights;
pub mod history;

pub use animation::{AnimatedPiece, Animation};
pub use board::{BoardEvent, BoardModel, InputState, MoveInfo, MoveOptions};
pub use highlights::{Highlights, Overlay};
pub use history::MoveHistory;
