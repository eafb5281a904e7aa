use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for total-cell and flooded-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, origin at the top-left corner.
pub type Coord2 = (Coord, Coord);

/// Pointer coordinates as delivered by the input layer.
pub type Pixel = i32;

/// Side length of one rendered cell, in pixels.
pub const CELL_PIXELS: Pixel = 20;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(row, col)` displacement of one step in this direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Steps from `coords` towards `direction`, returning a value only when it remains in bounds.
pub(crate) fn step(coords: Coord2, direction: Direction, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = direction.delta();
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

/// Iterates the orthogonal neighbours of a cell in `Direction::ALL` order, skipping the board edge.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = step(self.center, direction, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_two_neighbors() {
        let grid: Array2<u8> = Array2::zeros([3, 3]);
        let neighbors: Vec<_> = grid.iter_neighbors((0, 0)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1)]);
    }

    #[test]
    fn center_has_four_neighbors_in_direction_order() {
        let grid: Array2<u8> = Array2::zeros([3, 3]);
        let neighbors: Vec<_> = grid.iter_neighbors((1, 1)).collect();
        assert_eq!(neighbors, [(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let grid: Array2<u8> = Array2::zeros([1, 1]);
        assert_eq!(grid.iter_neighbors((0, 0)).count(), 0);
    }

    #[test]
    fn step_and_opposite_return_home() {
        for direction in Direction::ALL {
            let there = step((1, 1), direction, (3, 3)).unwrap();
            assert_eq!(step(there, direction.opposite(), (3, 3)), Some((1, 1)));
        }
    }
}
