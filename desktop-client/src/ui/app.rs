use std::time::Duration;

use common::games::tictactoe::{BoardGeometry, MoveOutcome, Point, TicTacToeGameState};
use common::log_debug;
use egui::{Align2, FontId, Pos2, Sense};

use super::board_painter::BoardPainter;
use crate::colors;

const FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / 60);
const HEADER_TOP: f32 = 40.0;
const HEADER_FONT_SIZE: f32 = 32.0;

pub struct TicTacToeApp {
    game: TicTacToeGameState,
    geometry: BoardGeometry,
}

impl TicTacToeApp {
    pub fn new(game: TicTacToeGameState, geometry: BoardGeometry) -> Self {
        Self { game, geometry }
    }

    /// `position` is relative to the top left corner of the window content.
    /// Returns `None` when the click misses every cell.
    pub fn handle_click(&mut self, position: Point) -> Option<MoveOutcome> {
        let Some(coordinates) = self.geometry.coordinates_for_position(position) else {
            log_debug!("Click at ({:.0}, {:.0}) is outside the board", position.x, position.y);
            return None;
        };
        Some(self.game.place_mark(coordinates))
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());

        if response.clicked()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            self.handle_click(Point::new(pointer.x - rect.left(), pointer.y - rect.top()));
        }

        let painter = ui.painter_at(rect);
        painter.text(
            Pos2::new(rect.center().x, rect.top() + HEADER_TOP),
            Align2::CENTER_TOP,
            self.game.header_text(),
            FontId::proportional(HEADER_FONT_SIZE),
            colors::HEADER_TEXT,
        );

        BoardPainter::new(&painter, &self.geometry, rect.min).paint(self.game.board().state());
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BACKGROUND))
            .show(ctx, |ui| self.render(ui));

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
