//! Combatant movement system.
//!
//! This module handles moving a combatant one cell on the grid.

use crate::game::entities::Combatant;
use crate::game::grid::Grid;
use crate::game::types::Direction;

/// Move the combatant one cell in the given direction.
/// The move is applied only when the destination is traversable; returns whether it was.
pub fn move_combatant(grid: &Grid, combatant: &mut Combatant, direction: Direction) -> bool {
    let target = combatant.position.step(direction);
    if !grid.is_traversable(target) {
        return false;
    }
    combatant.position = target;
    true
}
