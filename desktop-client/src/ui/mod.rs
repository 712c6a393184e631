mod app;
mod board_painter;

pub use app::TicTacToeApp;
