use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size must be at least 1")]
    InvalidSize,
    #[error("At least one color is required")]
    NoColors,
    #[error("Requested {requested} colors but the palette only has {available}")]
    TooManyColors { requested: u8, available: usize },
    #[error("Board shape is not square")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether this error comes from bad game parameters rather than from play.
    pub const fn is_configuration(self) -> bool {
        matches!(
            self,
            Self::InvalidSize | Self::NoColors | Self::TooManyColors { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
