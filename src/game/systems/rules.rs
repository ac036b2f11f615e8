//! Elimination rules.
//!
//! A blast eliminates whichever combatant sits on the earliest of its tiles.

use crate::game::types::{Cell, Outcome};

/// Resolve one blast against the combatants' positions.
///
/// Tiles are scanned in blast order. On each tile the player is checked before
/// the opponent; the first hit decides the outcome and ends the scan.
pub fn resolve_blast(tiles: &[Cell], player: Cell, opponent: Cell) -> Option<Outcome> {
    for &tile in tiles {
        if tile == player {
            return Some(Outcome::Lost);
        }
        if tile == opponent {
            return Some(Outcome::Won);
        }
    }
    None
}
