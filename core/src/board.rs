use core::ops::Index;
use ndarray::Array2;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

use crate::types::step;
use crate::*;

/// Square grid of cells. The shape is fixed at construction, only cell contents change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cells: Array2<Cell>,
    num_colors: u8,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    cells: Array2<Cell>,
    num_colors: u8,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(BoardRepr { cells, num_colors }: BoardRepr) -> Result<Self> {
        check_shape(cells.dim())?;
        if !cells[Self::ORIGIN.to_nd_index()].flooded {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells, num_colors })
    }
}

/// Boards are square, non-empty and no wider than a `Coord` can address.
fn check_shape((rows, cols): (usize, usize)) -> Result<()> {
    if rows != cols {
        return Err(GameError::InvalidBoardShape);
    }
    if rows == 0 {
        return Err(GameError::InvalidSize);
    }
    if Coord::try_from(rows).is_err() {
        return Err(GameError::InvalidBoardShape);
    }
    Ok(())
}

impl Board {
    pub const ORIGIN: Coord2 = (0, 0);

    /// Builds a randomly colored board drawing from the first `config.colors` entries of `palette`.
    ///
    /// Cells are drawn in row-major order, one draw each, so a seeded `rng` always yields the same board.
    pub fn construct<R: Rng + ?Sized>(
        config: GameConfig,
        palette: &[Color],
        rng: &mut R,
    ) -> Result<Self> {
        let config = GameConfig::new(config.size, config.colors)?;
        config.validate_palette(palette)?;

        let palette = &palette[..usize::from(config.colors)];
        let side = usize::from(config.size);
        let cells = Array2::from_shape_fn((side, side), |_| {
            Cell::new(palette[rng.random_range(0..palette.len())])
        });

        Ok(Self::with_origin_flooded(cells, config.colors))
    }

    /// Builds a board from explicit colors, for fixed layouts.
    pub fn from_colors(colors: Array2<Color>) -> Result<Self> {
        check_shape(colors.dim())?;

        let num_colors = Color::PALETTE
            .iter()
            .filter(|&&color| colors.iter().any(|&cell| cell == color))
            .count() as u8;

        Ok(Self::with_origin_flooded(colors.map(|&color| Cell::new(color)), num_colors))
    }

    fn with_origin_flooded(mut cells: Array2<Cell>, num_colors: u8) -> Self {
        cells[Self::ORIGIN.to_nd_index()].flooded = true;
        Self { cells, num_colors }
    }

    /// Cells per side.
    pub fn size(&self) -> Coord {
        // every constructor, deserialization included, goes through `check_shape`
        self.cells.nrows() as Coord
    }

    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn origin(&self) -> Cell {
        self[Self::ORIGIN]
    }

    /// Color of the flooded region, which is always the origin cell's color.
    pub fn flood_color(&self) -> Color {
        self.origin().color
    }

    pub fn is_fully_flooded(&self) -> bool {
        self.cells.iter().all(|cell| cell.flooded)
    }

    pub fn flooded_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.flooded).count() as CellCount
    }

    /// Neighbour of `coords` in `direction`, `None` on the board edge.
    pub fn neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        step(coords, direction, (self.size(), self.size()))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Iterates all cells with their coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Maps a pointer position to the cell whose square strictly contains it.
    ///
    /// Points on a grid line belong to no cell.
    pub fn locate_clicked_cell(&self, x: Pixel, y: Pixel, cell_pixels: Pixel) -> Option<Coord2> {
        let col = axis_index(x, cell_pixels, self.size())?;
        let row = axis_index(y, cell_pixels, self.size())?;
        Some((row, col))
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

fn axis_index(position: Pixel, cell_pixels: Pixel, len: Coord) -> Option<Coord> {
    if cell_pixels <= 0 || position <= 0 || position % cell_pixels == 0 {
        return None;
    }
    Coord::try_from(position / cell_pixels)
        .ok()
        .filter(|&index| index < len)
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
