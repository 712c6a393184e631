use crate::{log, log_debug};
use super::board::BoardLogic;
use super::error::InvalidSizeError;
use super::settings::TicTacToeSettings;
use super::types::{GameStatus, Mark, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(GameStatus),
    CellOccupied,
    GameOver,
}

/// Owns the board, both players and whose turn it is.
///
/// This is the only place that refuses moves once the game is decided;
/// [`BoardLogic::update`] itself has no such guard.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: BoardLogic,
    players: [Player; 2],
    current_player_index: usize,
}

impl TicTacToeGameState {
    pub fn new(board_size: usize, player_x: Player, player_o: Player) -> Result<Self, InvalidSizeError> {
        Ok(Self {
            board: BoardLogic::new(board_size)?,
            players: [player_x, player_o],
            current_player_index: 0,
        })
    }

    pub fn from_settings(settings: &TicTacToeSettings) -> Result<Self, InvalidSizeError> {
        Self::new(
            settings.board_size,
            Player::new(settings.player_x_name.clone(), Mark::X),
            Player::new(settings.player_o_name.clone(), Mark::O),
        )
    }

    pub fn board(&self) -> &BoardLogic {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.board.state().status()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn winner(&self) -> Option<&Player> {
        let mark = self.board.state().winning_mark()?;
        self.players.iter().find(|player| player.mark() == mark)
    }

    pub fn place_mark(&mut self, position: Position) -> MoveOutcome {
        if !self.board.accepts_updates() {
            log_debug!("Ignoring move at {}: game is over", position);
            return MoveOutcome::GameOver;
        }

        let player = self.current_player().clone();
        if !self.board.update(position, player.mark()) {
            log_debug!("Ignoring move at {}: cell is already marked", position);
            return MoveOutcome::CellOccupied;
        }

        log_debug!("{} ({}) marked {}", player.name(), player.mark(), position);
        self.switch_turn();

        let status = self.status();
        match status {
            GameStatus::Win => {
                if let Some(winner) = self.winner() {
                    log!("{} has won", winner.name());
                }
            }
            GameStatus::Draw => log!("Game ended in a draw"),
            GameStatus::InPlay => {}
        }

        MoveOutcome::Accepted(status)
    }

    pub fn header_text(&self) -> String {
        match self.status() {
            GameStatus::InPlay => format!("Current player: {}", self.current_player().name()),
            GameStatus::Win => match self.winner() {
                Some(winner) => format!("{} has won", winner.name()),
                None => "Game over".to_string(),
            },
            GameStatus::Draw => "DRAW".to_string(),
        }
    }

    fn switch_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(board_size: usize) -> TicTacToeGameState {
        TicTacToeGameState::from_settings(&TicTacToeSettings {
            board_size,
            ..TicTacToeSettings::default()
        })
        .unwrap()
    }

    fn play(game: &mut TicTacToeGameState, moves: &[(usize, usize)]) -> MoveOutcome {
        let mut outcome = MoveOutcome::GameOver;
        for &(row, col) in moves {
            outcome = game.place_mark(Position::new(row, col));
        }
        outcome
    }

    #[test]
    fn test_x_moves_first() {
        let game = new_game(3);
        assert_eq!(game.current_player().mark(), Mark::X);
        assert_eq!(game.current_player().name(), "Player A");
        assert_eq!(game.header_text(), "Current player: Player A");
    }

    #[test]
    fn test_invalid_board_size_fails() {
        let settings = TicTacToeSettings {
            board_size: 7,
            ..TicTacToeSettings::default()
        };
        assert_eq!(
            TicTacToeGameState::from_settings(&settings).unwrap_err(),
            InvalidSizeError { size: 7 }
        );
    }

    #[test]
    fn test_turn_toggles_only_on_accepted_moves() {
        let mut game = new_game(3);

        assert_eq!(
            game.place_mark(Position::new(1, 1)),
            MoveOutcome::Accepted(GameStatus::InPlay)
        );
        assert_eq!(game.current_player().mark(), Mark::O);

        assert_eq!(game.place_mark(Position::new(1, 1)), MoveOutcome::CellOccupied);
        assert_eq!(game.current_player().mark(), Mark::O);
        assert_eq!(game.header_text(), "Current player: Player B");

        game.place_mark(Position::new(0, 0));
        assert_eq!(
            game.board().cell(Position::new(0, 0)).unwrap().mark,
            Some(Mark::O)
        );
        assert_eq!(game.current_player().mark(), Mark::X);
    }

    #[test]
    fn test_win_reports_winner_and_blocks_further_moves() {
        let mut game = new_game(3);
        // X: top row, O: middle row
        let outcome = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(outcome, MoveOutcome::Accepted(GameStatus::Win));
        assert_eq!(game.winner().map(Player::name), Some("Player A"));
        assert_eq!(game.header_text(), "Player A has won");

        let marked = game.board().state().marked_cells().len();
        assert_eq!(game.place_mark(Position::new(2, 2)), MoveOutcome::GameOver);
        assert_eq!(game.board().state().marked_cells().len(), marked);
        assert!(game.board().cell(Position::new(2, 2)).unwrap().mark.is_none());
    }

    #[test]
    fn test_second_player_can_win() {
        let mut game = new_game(3);
        let outcome = play(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 0)]);

        assert_eq!(outcome, MoveOutcome::Accepted(GameStatus::Win));
        assert_eq!(game.winner().map(Player::mark), Some(Mark::O));
        assert_eq!(game.header_text(), "Player B has won");
    }

    #[test]
    fn test_draw() {
        let mut game = new_game(3);
        // X O X
        // O X X
        // O X O
        let outcome = play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 2), (1, 2), (2, 0), (2, 1)],
        );

        assert_eq!(outcome, MoveOutcome::Accepted(GameStatus::Draw));
        assert!(game.winner().is_none());
        assert_eq!(game.header_text(), "DRAW");
        assert_eq!(game.place_mark(Position::new(0, 0)), MoveOutcome::GameOver);
    }
}
