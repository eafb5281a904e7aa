use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that colors every cell independently and uniformly.
///
/// The random stream continues across calls, so consecutive boards differ while the whole sequence is
/// reproducible from the seed.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
    palette: Vec<Color>,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, palette: &[Color]) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            palette: palette.to_vec(),
        }
    }

    pub fn with_default_palette(seed: u64) -> Self {
        Self::new(seed, &Color::PALETTE)
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        let board = Board::construct(config, &self.palette, &mut self.rng)?;
        log::debug!(
            "generated {}x{} board with {} colors",
            config.size,
            config.size,
            config.colors
        );
        Ok(board)
    }
}
