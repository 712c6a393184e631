use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);
pub const BOARD_LINE: Color32 = Color32::from_rgb(60, 60, 60);
pub const MARK: Color32 = Color32::BLACK;
pub const STRIKETHROUGH: Color32 = Color32::RED;
pub const HEADER_TEXT: Color32 = Color32::from_rgb(30, 30, 30);
