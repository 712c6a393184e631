//! Pixel-space layout of the board.
//!
//! Everything returned by [`BoardGeometry`] is in board-local coordinates:
//! the board surface's top left corner is (0, 0). Renderers add
//! [`BoardGeometry::origin`] to place primitives on screen.

use super::board_state::{BoardState, WinningGroup};
use super::error::{InvalidSizeError, validate_board_size};
use super::types::{Cell, GameStatus, Mark, Position, WinningGroupType};

pub const BOARD_SURFACE_HEIGHT: f32 = 400.0;
pub const BOARD_BOTTOM_MARGIN: f32 = 50.0;
pub const MARK_MARGIN: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPadding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for BoardPadding {
    fn default() -> Self {
        Self {
            left: 140.0,
            top: 40.0,
            right: 140.0,
            bottom: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub position: Position,
}

impl CellRect {
    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Half-open: the right and bottom edges belong to the neighbouring cell.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }

    pub fn shrink(&self, margin: f32) -> CellRect {
        CellRect {
            x: self.x + margin,
            y: self.y + margin,
            width: (self.width - 2.0 * margin).max(0.0),
            height: (self.height - 2.0 * margin).max(0.0),
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkShape {
    Cross { first: Segment, second: Segment },
    Circle { center: Point, radius: f32 },
}

#[derive(Debug, Clone)]
pub struct BoardGeometry {
    board_size: usize,
    width: f32,
    height: f32,
    origin: Point,
    padding: BoardPadding,
    cells: Vec<CellRect>,
}

impl BoardGeometry {
    pub fn new(
        board_size: usize,
        width: f32,
        height: f32,
        origin: Point,
        padding: BoardPadding,
    ) -> Result<Self, InvalidSizeError> {
        validate_board_size(board_size)?;

        let cell_width = (width - padding.left - padding.right) / board_size as f32;
        let cell_height = (height - padding.top - padding.bottom) / board_size as f32;

        let cells = (0..board_size * board_size)
            .map(|index| {
                let position = Position::from_index(index, board_size);
                CellRect {
                    x: padding.left + position.col as f32 * cell_width,
                    y: padding.top + position.row as f32 * cell_height,
                    width: cell_width,
                    height: cell_height,
                    position,
                }
            })
            .collect();

        Ok(Self {
            board_size,
            width,
            height,
            origin,
            padding,
            cells,
        })
    }

    /// Board spanning the full window width, anchored above the bottom margin.
    pub fn for_window(board_size: usize, window_width: f32, window_height: f32) -> Result<Self, InvalidSizeError> {
        let origin = Point::new(0.0, window_height - BOARD_SURFACE_HEIGHT - BOARD_BOTTOM_MARGIN);
        Self::new(
            board_size,
            window_width,
            BOARD_SURFACE_HEIGHT,
            origin,
            BoardPadding::default(),
        )
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn padding(&self) -> BoardPadding {
        self.padding
    }

    pub fn cell_rect(&self, position: Position) -> Option<&CellRect> {
        if position.row >= self.board_size || position.col >= self.board_size {
            return None;
        }
        self.cells.get(position.to_index(self.board_size))
    }

    pub fn to_board_local(&self, screen_point: Point) -> Point {
        Point::new(screen_point.x - self.origin.x, screen_point.y - self.origin.y)
    }

    pub fn coordinates_for_position(&self, screen_point: Point) -> Option<Position> {
        let local = self.to_board_local(screen_point);
        self.cells
            .iter()
            .find(|cell| cell.contains(local))
            .map(|cell| cell.position)
    }

    /// Separators between cells; the outer border is not drawn.
    pub fn grid_lines(&self) -> Vec<Segment> {
        let last = self.board_size - 1;
        let mut lines = Vec::with_capacity(2 * last);

        for row in 0..last {
            if let (Some(first), Some(end)) = (
                self.cell_rect(Position::new(row, 0)),
                self.cell_rect(Position::new(row, last)),
            ) {
                lines.push(Segment::new(first.bottom_left(), end.bottom_right()));
            }
        }

        for col in 0..last {
            if let (Some(first), Some(end)) = (
                self.cell_rect(Position::new(0, col)),
                self.cell_rect(Position::new(last, col)),
            ) {
                lines.push(Segment::new(first.top_right(), end.bottom_right()));
            }
        }

        lines
    }

    pub fn mark_shapes(&self, marked_cells: &[Cell]) -> Vec<MarkShape> {
        marked_cells
            .iter()
            .filter_map(|cell| {
                let mark = cell.mark?;
                let rect = self.cell_rect(cell.position)?.shrink(MARK_MARGIN);
                Some(match mark {
                    Mark::X => MarkShape::Cross {
                        first: Segment::new(rect.top_left(), rect.bottom_right()),
                        second: Segment::new(rect.bottom_left(), rect.top_right()),
                    },
                    Mark::O => MarkShape::Circle {
                        center: rect.center(),
                        radius: rect.width / 2.0,
                    },
                })
            })
            .collect()
    }

    pub fn sorted_winning_group(group: &WinningGroup) -> Vec<Cell> {
        let mut cells = group.cells.clone();
        match group.group_type {
            WinningGroupType::Row => cells.sort_by_key(|cell| cell.position.col),
            WinningGroupType::Column => cells.sort_by_key(|cell| cell.position.row),
            WinningGroupType::DiagonalMain => cells.sort_by_key(|cell| cell.position),
            WinningGroupType::DiagonalSecondary => {
                cells.sort_by(|a, b| b.position.cmp(&a.position))
            }
        }
        cells
    }

    pub fn winning_strikethrough(&self, state: &BoardState) -> Option<Segment> {
        if state.status() != GameStatus::Win {
            return None;
        }
        let group = state.winning_group()?;
        let sorted = Self::sorted_winning_group(group);
        let start = self.cell_rect(sorted.first()?.position)?;
        let end = self.cell_rect(sorted.last()?.position)?;

        let segment = match group.group_type {
            WinningGroupType::Row => Segment::new(
                Point::new(start.left(), start.center().y),
                Point::new(end.right(), end.center().y),
            ),
            WinningGroupType::Column => Segment::new(
                Point::new(start.center().x, start.top()),
                Point::new(end.center().x, end.bottom()),
            ),
            WinningGroupType::DiagonalMain => Segment::new(start.top_left(), end.bottom_right()),
            WinningGroupType::DiagonalSecondary => Segment::new(start.bottom_left(), end.top_right()),
        };
        Some(segment)
    }
}
