use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

pub const TITLE: &str = "Flood-It";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: Pixel,
    pub y: Pixel,
    pub width: Pixel,
    pub height: Pixel,
}

impl PixelRect {
    /// Square occupied by the cell at `coords`; columns run along x, rows along y.
    pub const fn of_cell((row, col): Coord2, cell_pixels: Pixel) -> Self {
        Self {
            x: col as Pixel * cell_pixels,
            y: row as Pixel * cell_pixels,
            width: cell_pixels,
            height: cell_pixels,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SceneTile {
    pub coords: Coord2,
    pub rect: PixelRect,
    pub color: Color,
    pub flooded: bool,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    pub tiles: Vec<SceneTile>,
    /// `moves/max_moves`
    pub counter: String,
    pub title: &'static str,
    /// Set once the game has ended; replaces the board when shown.
    pub message: Option<&'static str>,
}

impl Scene {
    pub fn render(board: &Board, state: &GameState, cell_pixels: Pixel) -> Self {
        let tiles = board
            .iter()
            .map(|(coords, cell)| SceneTile {
                coords,
                rect: PixelRect::of_cell(coords, cell_pixels),
                color: cell.color,
                flooded: cell.flooded,
            })
            .collect();

        Self {
            tiles,
            counter: format!("{}/{}", state.moves(), state.max_moves()),
            title: TITLE,
            message: state.status().message(),
        }
    }

    pub fn is_final(&self) -> bool {
        self.message.is_some()
    }
}
