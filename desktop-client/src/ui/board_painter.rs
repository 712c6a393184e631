use common::games::tictactoe::{BoardGeometry, BoardState, MarkShape, Point, Segment};
use egui::{Painter, Pos2, Stroke, Vec2};

use crate::colors;

const GRID_LINE_WIDTH: f32 = 3.0;
const MARK_STROKE_WIDTH: f32 = 6.0;
const STRIKETHROUGH_WIDTH: f32 = 6.0;

/// Paints board-local geometry onto an egui painter.
pub struct BoardPainter<'a> {
    painter: &'a Painter,
    geometry: &'a BoardGeometry,
    offset: Vec2,
}

impl<'a> BoardPainter<'a> {
    /// `screen_min` is where the drawing area starts in egui coordinates.
    pub fn new(painter: &'a Painter, geometry: &'a BoardGeometry, screen_min: Pos2) -> Self {
        let origin = geometry.origin();
        Self {
            painter,
            geometry,
            offset: screen_min.to_vec2() + Vec2::new(origin.x, origin.y),
        }
    }

    pub fn paint(&self, state: &BoardState) {
        self.paint_grid();
        self.paint_marks(state);
        self.paint_strikethrough(state);
    }

    fn paint_grid(&self) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, colors::BOARD_LINE);
        for line in self.geometry.grid_lines() {
            self.segment(line, stroke);
        }
    }

    fn paint_marks(&self, state: &BoardState) {
        let stroke = Stroke::new(MARK_STROKE_WIDTH, colors::MARK);
        for shape in self.geometry.mark_shapes(state.marked_cells()) {
            match shape {
                MarkShape::Cross { first, second } => {
                    self.segment(first, stroke);
                    self.segment(second, stroke);
                }
                MarkShape::Circle { center, radius } => {
                    self.painter.circle_stroke(self.to_screen(center), radius, stroke);
                }
            }
        }
    }

    fn paint_strikethrough(&self, state: &BoardState) {
        if let Some(line) = self.geometry.winning_strikethrough(state) {
            self.segment(line, Stroke::new(STRIKETHROUGH_WIDTH, colors::STRIKETHROUGH));
        }
    }

    fn segment(&self, segment: Segment, stroke: Stroke) {
        self.painter.line_segment(
            [self.to_screen(segment.start), self.to_screen(segment.end)],
            stroke,
        );
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(point.x, point.y) + self.offset
    }
}
