use super::board_state::BoardState;
use super::error::{InvalidSizeError, validate_board_size};
use super::types::{Cell, GameStatus, Mark, Position};
use super::win_detector::{is_line_marked_as, lines_through};

/// Square grid of cells plus the status derived from the marks on it.
///
/// `update` does not check whose turn it is or whether the game is already
/// over. Callers consult [`BoardLogic::accepts_updates`] first.
#[derive(Debug, Clone)]
pub struct BoardLogic {
    board_size: usize,
    cells: Vec<Cell>,
    state: BoardState,
}

impl BoardLogic {
    pub fn new(board_size: usize) -> Result<Self, InvalidSizeError> {
        validate_board_size(board_size)?;

        let cells = (0..board_size * board_size)
            .map(|index| Cell::empty(Position::from_index(index, board_size)))
            .collect();

        Ok(Self {
            board_size,
            cells,
            state: BoardState::new(),
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if position.row >= self.board_size || position.col >= self.board_size {
            return None;
        }
        self.cells.get(position.to_index(self.board_size))
    }

    pub fn accepts_updates(&self) -> bool {
        self.state.status() == GameStatus::InPlay
    }

    /// Marks the cell and recomputes the status.
    ///
    /// Returns `false` without touching anything if the cell is already
    /// marked or lies outside the board.
    pub fn update(&mut self, position: Position, mark: Mark) -> bool {
        if position.row >= self.board_size || position.col >= self.board_size {
            return false;
        }

        let index = position.to_index(self.board_size);
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };
        if cell.is_marked() {
            return false;
        }

        cell.mark = Some(mark);
        let marked = *cell;
        self.state.add_marked_cell(marked);
        self.update_status_after(marked.position, mark);
        true
    }

    fn update_status_after(&mut self, position: Position, mark: Mark) {
        // Later lines overwrite earlier ones when a move completes several.
        for (group_type, line) in lines_through(position, self.board_size) {
            if is_line_marked_as(&self.cells, &line, mark, self.board_size) {
                let group = line
                    .iter()
                    .map(|pos| self.cells[pos.to_index(self.board_size)])
                    .collect();
                self.state.set_win(group_type, group);
            }
        }

        if self.state.status() == GameStatus::InPlay && self.is_full() {
            self.state.set_draw();
        }
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_marked)
    }
}
