mod board;
mod board_state;
mod error;
mod game_state;
mod geometry;
mod settings;
mod types;
mod win_detector;

pub use board::BoardLogic;
pub use board_state::{BoardState, WinningGroup};
pub use error::{InvalidSizeError, MAX_BOARD_SIZE, MIN_BOARD_SIZE, validate_board_size};
pub use game_state::{MoveOutcome, TicTacToeGameState};
pub use geometry::{
    BOARD_BOTTOM_MARGIN, BOARD_SURFACE_HEIGHT, BoardGeometry, BoardPadding, CellRect, MARK_MARGIN,
    MarkShape, Point, Segment,
};
pub use settings::TicTacToeSettings;
pub use types::{Cell, GameStatus, Mark, Player, Position, WinningGroupType};
pub use win_detector::{is_line_marked_as, lines_through};
