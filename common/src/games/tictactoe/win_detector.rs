use super::types::{Cell, Mark, Position, WinningGroupType};

/// Lines passing through `position`, in the order they are checked:
/// row, column, main diagonal, secondary diagonal.
pub fn lines_through(position: Position, board_size: usize) -> Vec<(WinningGroupType, Vec<Position>)> {
    let mut lines = Vec::with_capacity(4);

    lines.push((
        WinningGroupType::Row,
        (0..board_size).map(|col| Position::new(position.row, col)).collect(),
    ));
    lines.push((
        WinningGroupType::Column,
        (0..board_size).map(|row| Position::new(row, position.col)).collect(),
    ));

    if position.row == position.col {
        lines.push((
            WinningGroupType::DiagonalMain,
            (0..board_size).map(|i| Position::new(i, i)).collect(),
        ));
    }

    if position.row + position.col == board_size - 1 {
        lines.push((
            WinningGroupType::DiagonalSecondary,
            (0..board_size)
                .map(|i| Position::new(i, board_size - 1 - i))
                .collect(),
        ));
    }

    lines
}

pub fn is_line_marked_as(cells: &[Cell], line: &[Position], mark: Mark, board_size: usize) -> bool {
    line.iter().all(|pos| {
        cells
            .get(pos.to_index(board_size))
            .is_some_and(|cell| cell.mark == Some(mark))
    })
}
