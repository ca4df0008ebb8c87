mod board_view;
mod demo_view;

pub use board_view::ChessBoardView;
pub use demo_view::DemoView;
