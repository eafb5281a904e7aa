#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use controller::*;
pub use error::*;
pub use flood::*;
pub use generator::*;
pub use scene::*;
pub use state::*;
pub use types::*;

mod board;
mod cell;
mod controller;
mod error;
mod flood;
mod generator;
mod scene;
mod state;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub colors: u8,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, colors: u8) -> Self {
        Self { size, colors }
    }

    /// Validates the parameters that do not depend on a palette.
    pub fn new(size: Coord, colors: u8) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if colors == 0 {
            return Err(GameError::NoColors);
        }
        Ok(Self::new_unchecked(size, colors))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn validate_palette(&self, palette: &[Color]) -> Result<()> {
        if usize::from(self.colors) > palette.len() {
            return Err(GameError::TooManyColors {
                requested: self.colors,
                available: palette.len(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(14, 6)
    }
}

/// Result of feeding one input into a [`GameController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoChange,
    Flooded,
    Reset,
    Won,
    Lost,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        use Outcome::*;
        match self {
            NoChange => false,
            Flooded => true,
            Reset => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl From<Status> for Outcome {
    fn from(status: Status) -> Self {
        match status {
            Status::Ongoing => Self::NoChange,
            Status::Won => Self::Won,
            Status::Lost => Self::Lost,
        }
    }
}
