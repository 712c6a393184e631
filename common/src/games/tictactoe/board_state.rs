use super::types::{Cell, GameStatus, Mark, WinningGroupType};

/// Everything needed to detect win/draw and to draw the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    status: GameStatus,
    marked_cells: Vec<Cell>,
    winning_group: Option<WinningGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningGroup {
    pub group_type: WinningGroupType,
    /// Unordered; see `BoardGeometry::sorted_winning_group`.
    pub cells: Vec<Cell>,
}

impl WinningGroup {
    pub fn mark(&self) -> Option<Mark> {
        self.cells.first().and_then(|cell| cell.mark)
    }
}

impl BoardState {
    pub(super) fn new() -> Self {
        Self {
            status: GameStatus::InPlay,
            marked_cells: Vec::new(),
            winning_group: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Marked cells in move order.
    pub fn marked_cells(&self) -> &[Cell] {
        &self.marked_cells
    }

    pub fn winning_group(&self) -> Option<&WinningGroup> {
        self.winning_group.as_ref()
    }

    pub fn winning_group_type(&self) -> Option<WinningGroupType> {
        self.winning_group.as_ref().map(|group| group.group_type)
    }

    pub fn winning_mark(&self) -> Option<Mark> {
        self.winning_group.as_ref().and_then(WinningGroup::mark)
    }

    pub(super) fn add_marked_cell(&mut self, cell: Cell) {
        self.marked_cells.push(cell);
    }

    pub(super) fn set_win(&mut self, group_type: WinningGroupType, cells: Vec<Cell>) {
        self.status = GameStatus::Win;
        self.winning_group = Some(WinningGroup { group_type, cells });
    }

    pub(super) fn set_draw(&mut self) {
        self.status = GameStatus::Draw;
        self.winning_group = None;
    }
}
