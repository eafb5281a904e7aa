use serde::{Deserialize, Serialize};

/// Colors a cell can take, in the order boards draw them from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Pink,
    Yellow,
    Magenta,
    Cyan,
}

impl Color {
    /// The full palette; a game with `n` colors uses the first `n` entries.
    pub const PALETTE: [Color; 7] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Pink,
        Self::Yellow,
        Self::Magenta,
        Self::Cyan,
    ];

    pub const fn css_name(self) -> &'static str {
        use Color::*;
        match self {
            Red => "red",
            Blue => "blue",
            Green => "green",
            Pink => "pink",
            Yellow => "yellow",
            Magenta => "magenta",
            Cyan => "cyan",
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Red
    }
}

/// A single grid unit. Its position is the index it is stored under in the [`Board`](crate::Board).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub color: Color,
    pub flooded: bool,
}

impl Cell {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            flooded: false,
        }
    }

    pub(crate) fn flood_with(&mut self, color: Color) {
        self.color = color;
        self.flooded = true;
    }
}
