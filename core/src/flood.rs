use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Recolors the region around `start` that is connected through cells holding `old_color`.
///
/// Every visited cell holding `old_color` becomes `new_color` and is marked flooded. Propagation only
/// passes through neighbours that still hold `old_color`: cells flooded on an earlier move under some
/// other color are not revisited. The neighbours of `start` are examined even when `start` itself does
/// not hold `old_color`.
///
/// Returns the number of recolored cells.
pub fn flood(
    board: &mut Board,
    start: Coord2,
    old_color: Color,
    new_color: Color,
) -> Result<CellCount> {
    let start = board.validate_coords(start)?;

    if old_color == new_color {
        log::warn!("flood from {:?} with unchanged color {:?}", start, old_color);
        return Ok(0);
    }

    let size = usize::from(board.size());
    let mut queued: Array2<bool> = Array2::default((size, size));
    queued[start.to_nd_index()] = true;

    let mut recolored: CellCount = 0;
    if board[start].color == old_color {
        board.cell_mut(start).flood_with(new_color);
        recolored += 1;
    }

    let mut to_visit: Vec<Coord2> = Vec::new();
    enqueue_matching_neighbors(board, start, old_color, &mut queued, &mut to_visit);

    while let Some(visit_coords) = to_visit.pop() {
        if board[visit_coords].color != old_color {
            continue;
        }

        board.cell_mut(visit_coords).flood_with(new_color);
        recolored += 1;

        enqueue_matching_neighbors(board, visit_coords, old_color, &mut queued, &mut to_visit);
    }

    log::debug!(
        "flooded {} cells from {:?}: {:?} -> {:?}",
        recolored,
        start,
        old_color,
        new_color
    );
    Ok(recolored)
}

fn enqueue_matching_neighbors(
    board: &Board,
    coords: Coord2,
    old_color: Color,
    queued: &mut Array2<bool>,
    to_visit: &mut Vec<Coord2>,
) {
    for pos in board.iter_neighbors(coords) {
        if board[pos].color == old_color && !queued[pos.to_nd_index()] {
            queued[pos.to_nd_index()] = true;
            to_visit.push(pos);
        }
    }
}
