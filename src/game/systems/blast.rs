//! Blast geometry.
//!
//! Computes which cells a detonation reaches. The order of the returned cells
//! matters: elimination resolution scans them front to back.

use crate::game::grid::Grid;
use crate::game::types::Cell;

/// Arm enumeration order: +x, -x, +y, -y.
const ARMS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Cells hit by a bomb detonating at `origin`.
///
/// Returns the origin first, then each arm in `+x, -x, +y, -y` order, every arm
/// walking outward up to `range` steps and stopping before the first cell that
/// is off the grid or an obstacle. Bombs and combatants never block a blast.
pub fn compute_blast_tiles(grid: &Grid, origin: Cell, range: i32) -> Vec<Cell> {
    let mut tiles = vec![origin];

    for (dx, dy) in ARMS {
        for step in 1..=range {
            let candidate = origin.offset(dx * step, dy * step);
            if !grid.is_traversable(candidate) {
                break;
            }
            tiles.push(candidate);
        }
    }

    tiles
}
