use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, Validate};
use super::error::validate_board_size;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeSettings {
    pub board_size: usize,
    pub player_x_name: String,
    pub player_o_name: String,
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        if self.player_x_name.trim().is_empty() || self.player_o_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Player names must not be empty".to_string(),
            ));
        }
        if self.player_x_name == self.player_o_name {
            return Err(ConfigError::Validation(format!(
                "Player names must differ, both are '{}'",
                self.player_x_name
            )));
        }
        Ok(())
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            board_size: 3,
            player_x_name: "Player A".to_string(),
            player_o_name: "Player B".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TicTacToeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_board_size_out_of_range_is_invalid() {
        for board_size in [2, 6] {
            let settings = TicTacToeSettings {
                board_size,
                ..TicTacToeSettings::default()
            };
            assert!(matches!(settings.validate(), Err(ConfigError::Validation(_))));
        }
    }

    #[test]
    fn test_blank_or_duplicate_names_are_invalid() {
        let blank = TicTacToeSettings {
            player_o_name: "  ".to_string(),
            ..TicTacToeSettings::default()
        };
        assert!(blank.validate().is_err());

        let duplicate = TicTacToeSettings {
            player_o_name: "Player A".to_string(),
            ..TicTacToeSettings::default()
        };
        assert!(duplicate.validate().is_err());
    }
}
