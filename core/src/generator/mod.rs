use crate::*;
pub use random::*;

mod random;

/// Source of fresh boards for new games and resets.
pub trait BoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board>;
}
