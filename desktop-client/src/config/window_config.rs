use common::config::{ConfigError, Validate};
use common::games::tictactoe::{BOARD_BOTTOM_MARGIN, BOARD_SURFACE_HEIGHT, BoardPadding};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl WindowConfig {
    pub fn min_width() -> f32 {
        let padding = BoardPadding::default();
        padding.left + padding.right + 20.0
    }

    pub fn min_height() -> f32 {
        BOARD_SURFACE_HEIGHT + BOARD_BOTTOM_MARGIN
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || self.width < Self::min_width() {
            return Err(ConfigError::Validation(format!(
                "Window width must be at least {}",
                Self::min_width()
            )));
        }
        if !self.height.is_finite() || self.height < Self::min_height() {
            return Err(ConfigError::Validation(format!(
                "Window height must be at least {}",
                Self::min_height()
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
        }
    }
}
