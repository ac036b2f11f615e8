//! Opponent decision policy.
//!
//! The opponent chases the player one greedy step at a time and bombs the cell
//! it stands on. Its only notion of danger is the blast footprint of its own
//! most recent bomb.

use crate::game::grid::Grid;
use crate::game::systems::compute_blast_tiles;
use crate::game::types::{Cell, Direction};

/// Decision function for the autonomous combatant.
pub trait OpponentPolicy {
    /// Next cell for the opponent standing on `current`, chasing `target`.
    /// `hazard` is the remembered position of the opponent's own latest bomb.
    fn decide_move(&self, grid: &Grid, current: Cell, target: Cell, hazard: Option<Cell>) -> Cell;

    /// Cell on which the opponent arms its next bomb.
    fn decide_bomb(&self, current: Cell) -> Cell;
}

/// Single-step greedy chaser: minimises Manhattan distance to the target.
#[derive(Debug, Clone, Copy)]
pub struct GreedyChaser {
    blast_range: i32,
}

impl GreedyChaser {
    pub fn new(blast_range: i32) -> Self {
        Self { blast_range }
    }
}

impl OpponentPolicy for GreedyChaser {
    fn decide_move(&self, grid: &Grid, current: Cell, target: Cell, hazard: Option<Cell>) -> Cell {
        let danger = hazard
            .map(|bomb| compute_blast_tiles(grid, bomb, self.blast_range))
            .unwrap_or_default();

        let walkable: Vec<Cell> = Direction::ALL
            .iter()
            .map(|&direction| current.step(direction))
            .filter(|&cell| grid.is_traversable(cell))
            .collect();
        let safe: Vec<Cell> = walkable.iter().copied().filter(|cell| !danger.contains(cell)).collect();

        let candidates = if safe.is_empty() { walkable } else { safe };

        // Strict comparison keeps the first candidate in Up, Down, Left, Right order on ties.
        let mut best = current;
        let mut best_distance = i32::MAX;
        for cell in candidates {
            let distance = cell.manhattan(target);
            if distance < best_distance {
                best_distance = distance;
                best = cell;
            }
        }
        best
    }

    fn decide_bomb(&self, current: Cell) -> Cell {
        current
    }
}
