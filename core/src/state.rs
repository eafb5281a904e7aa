use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ongoing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// End-of-game message, `None` while the game is still running.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Ongoing => None,
            Self::Won => Some("You won!"),
            Self::Lost => Some("You lost :("),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Ongoing
    }
}

/// Move counter and budget for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    moves: u32,
    max_moves: u32,
    status: Status,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            moves: 0,
            max_moves: Self::move_budget(config.size, config.colors),
            status: Status::Ongoing,
        }
    }

    /// `floor(size * colors * 0.45)`, computed without floating point.
    pub const fn move_budget(size: Coord, colors: u8) -> u32 {
        (size as u32) * (colors as u32) * 45 / 100
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn moves_left(&self) -> u32 {
        self.max_moves.saturating_sub(self.moves)
    }

    /// Status as of the last [`GameState::evaluate`].
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    /// Running over the budget loses even if the same move flooded the whole board.
    pub fn evaluate(&mut self, board: &Board) -> Status {
        self.status = if self.moves > self.max_moves {
            Status::Lost
        } else if board.is_fully_flooded() {
            Status::Won
        } else {
            Status::Ongoing
        };
        self.status
    }

    pub fn reset(&mut self, config: GameConfig) {
        *self = Self::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use ndarray::array;
    use Color::*;

    fn state_with_moves(config: GameConfig, moves: u32) -> GameState {
        let mut state = GameState::new(config);
        for _ in 0..moves {
            state.record_move();
        }
        state
    }

    #[test]
    fn move_budget_floors() {
        assert_eq!(GameState::move_budget(2, 4), 3);
        assert_eq!(GameState::move_budget(14, 6), 37);
        assert_eq!(GameState::move_budget(20, 5), 45);
        assert_eq!(GameState::move_budget(1, 1), 0);
    }

    #[test]
    fn loss_starts_after_budget_is_exceeded() {
        let config = GameConfig::new(2, 4).unwrap();
        let board = Board::from_colors(array![[Blue, Green], [Pink, Red]]).unwrap();

        let mut state = state_with_moves(config, 3);
        assert_eq!(state.evaluate(&board), Status::Ongoing);

        state.record_move();
        assert_eq!(state.evaluate(&board), Status::Lost);
        assert_eq!(state.status(), Status::Lost);
    }

    #[test]
    fn full_board_wins_within_budget() {
        let config = GameConfig::new(2, 4).unwrap();
        let mut board = Board::from_colors(array![[Blue, Blue], [Blue, Blue]]).unwrap();
        flood(&mut board, Board::ORIGIN, Blue, Red).unwrap();

        let mut state = state_with_moves(config, 3);
        assert_eq!(state.evaluate(&board), Status::Won);

        state.record_move();
        assert_eq!(state.evaluate(&board), Status::Lost);
    }

    #[test]
    fn reset_clears_moves_and_recomputes_budget() {
        let mut state = state_with_moves(GameConfig::new(2, 4).unwrap(), 5);
        state.reset(GameConfig::new(10, 3).unwrap());

        assert_eq!(state.moves(), 0);
        assert_eq!(state.max_moves(), 13);
        assert_eq!(state.moves_left(), 13);
        assert_eq!(state.status(), Status::Ongoing);
    }

    #[test]
    fn finished_states_carry_messages() {
        assert_eq!(Status::Won.message(), Some("You won!"));
        assert_eq!(Status::Lost.message(), Some("You lost :("));
        assert_eq!(Status::Ongoing.message(), None);
    }
}
