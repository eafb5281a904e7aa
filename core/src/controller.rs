use crate::*;

/// Generator for controllers built around a fixed board; every reset restores that board.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoard(pub Board);

impl BoardGenerator for FixedBoard {
    fn generate(&mut self, _config: GameConfig) -> Result<Board> {
        Ok(self.0.clone())
    }
}

/// Turns raw input (clicks, key presses, timer ticks) into moves on a board.
///
/// Once the game is won or lost every further input is rejected with [`GameError::AlreadyEnded`].
#[derive(Clone, Debug)]
pub struct GameController<G: BoardGenerator = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    state: GameState,
}

impl GameController<RandomBoardGenerator> {
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomBoardGenerator::with_default_palette(seed))
    }
}

impl GameController<FixedBoard> {
    pub fn with_board(board: Board) -> Self {
        let config = GameConfig::new_unchecked(board.size(), board.num_colors());
        Self {
            config,
            generator: FixedBoard(board.clone()),
            state: GameState::new(config),
            board,
        }
    }
}

impl<G: BoardGenerator> GameController<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = generator.generate(config)?;
        Ok(Self {
            config,
            generator,
            board,
            state: GameState::new(config),
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_finished(&self) -> bool {
        self.state.status().is_finished()
    }

    /// Handles a pointer click at pixel coordinates relative to the board's top-left corner.
    ///
    /// A click that does not land strictly inside a cell selects the origin, which never floods.
    pub fn click(&mut self, x: Pixel, y: Pixel) -> Result<Outcome> {
        self.check_not_finished()?;
        let coords = self
            .board
            .locate_clicked_cell(x, y, CELL_PIXELS)
            .unwrap_or_else(|| {
                log::trace!("click at ({}, {}) hit no cell", x, y);
                Board::ORIGIN
            });
        self.select(coords)
    }

    /// Plays the color of the cell at `coords`.
    pub fn select(&mut self, coords: Coord2) -> Result<Outcome> {
        self.check_not_finished()?;
        let clicked = self.board.cell_at(coords)?;
        let old_color = self.board.flood_color();

        if clicked.flooded || clicked.color == old_color {
            log::trace!("ignored selection of {:?}", coords);
            return Ok(Outcome::NoChange);
        }

        flood(&mut self.board, Board::ORIGIN, old_color, clicked.color)?;
        self.state.record_move();
        Ok(match self.evaluate() {
            Status::Ongoing => Outcome::Flooded,
            status => status.into(),
        })
    }

    /// Only `"r"` is meaningful: it starts a new board with the same parameters.
    pub fn key_pressed(&mut self, key: &str) -> Result<Outcome> {
        self.check_not_finished()?;
        if key != "r" {
            return Ok(Outcome::NoChange);
        }
        self.reset()?;
        Ok(Outcome::Reset)
    }

    /// Timer tick; re-checks whether the game has ended.
    pub fn tick(&mut self) -> Result<Outcome> {
        self.check_not_finished()?;
        Ok(self.evaluate().into())
    }

    pub fn scene(&self) -> Scene {
        Scene::render(&self.board, &self.state, CELL_PIXELS)
    }

    fn reset(&mut self) -> Result<()> {
        self.board = self.generator.generate(self.config)?;
        self.state.reset(self.config);
        log::debug!("game reset");
        Ok(())
    }

    fn evaluate(&mut self) -> Status {
        let status = self.state.evaluate(&self.board);
        if let Some(message) = status.message() {
            log::info!("{} ({} moves)", message, self.state.moves());
        }
        status
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use ndarray::array;
    use Color::*;

    fn scenario() -> GameController<FixedBoard> {
        GameController::with_board(Board::from_colors(array![[Blue, Green], [Pink, Red]]).unwrap())
    }

    #[test]
    fn click_on_neighbor_floods_origin() {
        let mut game = scenario();

        assert_eq!(game.click(30, 1).unwrap(), Outcome::Flooded);

        let board = game.board();
        assert_eq!(board[(0, 0)], Cell { color: Green, flooded: true });
        assert_eq!(board[(1, 0)], Cell { color: Pink, flooded: false });
        assert_eq!(board[(1, 1)], Cell { color: Red, flooded: false });
        assert_eq!(game.state().moves(), 1);
    }

    #[test]
    fn click_on_origin_or_grid_line_is_noop() {
        let mut game = scenario();

        assert_eq!(game.click(10, 1).unwrap(), Outcome::NoChange);
        assert_eq!(game.click(20, 10).unwrap(), Outcome::NoChange);
        assert_eq!(game.click(500, 500).unwrap(), Outcome::NoChange);
        assert_eq!(game.state().moves(), 0);
        assert_eq!(game.board()[(0, 0)].color, Blue);
    }

    #[test]
    fn selecting_flood_color_is_noop() {
        let mut game = GameController::with_board(
            Board::from_colors(array![[Blue, Red], [Blue, Red]]).unwrap(),
        );

        assert_eq!(game.select((1, 0)).unwrap(), Outcome::NoChange);
        assert_eq!(game.state().moves(), 0);
    }

    #[test]
    fn select_out_of_range_is_an_error() {
        let mut game = scenario();
        assert_eq!(game.select((2, 2)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn cells_of_the_new_color_join_on_a_later_move() {
        let mut game = GameController::with_board(
            Board::from_colors(array![[Blue, Red, Green], [Red, Red, Red], [Red, Red, Red]]).unwrap(),
        );

        assert_eq!(game.select((0, 1)).unwrap(), Outcome::Flooded);
        assert_eq!(game.board().flooded_count(), 1);
        // red is now the flood color, so red cells are no longer playable
        assert_eq!(game.select((1, 1)).unwrap(), Outcome::NoChange);

        assert_eq!(game.select((0, 2)).unwrap(), Outcome::Flooded);
        assert_eq!(game.board().flooded_count(), 8);
        assert!(!game.board()[(0, 2)].flooded);
        assert_eq!(game.state().moves(), 2);
    }

    #[test]
    fn fully_flooded_board_wins_on_tick() {
        let mut game = GameController::with_board(Board::from_colors(array![[Cyan]]).unwrap());
        assert_eq!(game.state().max_moves(), 0);

        assert_eq!(game.tick().unwrap(), Outcome::Won);
        assert!(game.is_finished());
        assert_eq!(game.scene().message, Some("You won!"));
        assert_eq!(game.select((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn exceeding_budget_loses_and_locks_input() {
        // the played cells are walled off from the origin, so every move floods only the origin
        let board = Board::from_colors(array![
            [Blue, Pink, Pink],
            [Pink, Pink, Pink],
            [Pink, Green, Red],
        ])
        .unwrap();
        let mut game = GameController::with_board(board);
        // 3 * 4 * 0.45
        assert_eq!(game.state().max_moves(), 5);

        for coords in [(2, 1), (2, 2), (2, 1), (2, 2), (2, 1)] {
            assert_eq!(game.select(coords).unwrap(), Outcome::Flooded);
        }
        assert_eq!(game.select((2, 2)).unwrap(), Outcome::Lost);

        assert_eq!(game.state().moves(), 6);
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.scene().message, Some("You lost :("));
        assert_eq!(game.click(30, 1), Err(GameError::AlreadyEnded));
        assert_eq!(game.key_pressed("r"), Err(GameError::AlreadyEnded));
        assert_eq!(game.tick(), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn reset_key_restores_board_and_counter() {
        let mut game = scenario();
        game.click(30, 1).unwrap();

        assert_eq!(game.key_pressed("x").unwrap(), Outcome::NoChange);
        assert_eq!(game.state().moves(), 1);

        assert_eq!(game.key_pressed("r").unwrap(), Outcome::Reset);
        assert_eq!(game.state().moves(), 0);
        assert_eq!(game.board()[(0, 0)].color, Blue);
        assert_eq!(game.scene().counter, "0/3");
    }

    #[test]
    fn reset_draws_a_new_random_board() {
        let config = GameConfig::new(10, 6).unwrap();
        let mut game = GameController::from_seed(config, 2024).unwrap();
        let before = game.board().clone();

        game.key_pressed("r").unwrap();

        assert_ne!(game.board(), &before);
        assert_eq!(game.board().flooded_count(), 1);
    }

    #[test]
    fn tick_reports_ongoing_game_as_unchanged() {
        let mut game = scenario();
        assert_eq!(game.tick().unwrap(), Outcome::NoChange);
        assert!(!game.is_finished());
    }

    #[test]
    fn seeded_games_play_identically() {
        let config = GameConfig::default();
        let mut a = GameController::from_seed(config, 7).unwrap();
        let mut b = GameController::from_seed(config, 7).unwrap();

        for step in 1..20 {
            let x = (step * 37 % 280) as Pixel;
            let y = (step * 53 % 280) as Pixel;
            assert_eq!(a.click(x, y), b.click(x, y));
        }
        assert_eq!(a.scene(), b.scene());
    }
}
