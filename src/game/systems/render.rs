//! Game rendering system (terminal).
//!
//! Turns a snapshot into a text grid for the terminal front end.

use std::collections::HashSet;
use std::fmt::Write;

use crate::game::snapshot::Snapshot;
use crate::game::types::{Cell, GameStatus};

/// Draw the arena, one cell per column, followed by a status line.
///
/// Combatants are drawn over blasts, blasts over bombs, bombs over the floor.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let walls: HashSet<Cell> = snapshot.obstacles.iter().copied().collect();
    let bombs: HashSet<Cell> = snapshot.active_bombs.iter().map(|b| b.position).collect();
    let blasts: HashSet<Cell> = snapshot.blast_tiles().collect();

    let mut out = String::new();
    for y in 0..snapshot.grid_size {
        for x in 0..snapshot.grid_size {
            let cell = Cell::new(x, y);
            let symbol = if cell == snapshot.player {
                "P"
            } else if cell == snapshot.opponent {
                "E"
            } else if blasts.contains(&cell) {
                "*"
            } else if bombs.contains(&cell) {
                "B"
            } else if walls.contains(&cell) {
                "##"
            } else {
                "."
            };
            let _ = write!(out, "{:<3}", symbol);
        }
        out.push('\n');
    }

    let status = match snapshot.status {
        GameStatus::Running => "running",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    };
    let _ = writeln!(
        out,
        "level {} | {} | bombs {} | player ({}, {}) | opponent ({}, {})",
        snapshot.level,
        status,
        snapshot.active_bombs.len(),
        snapshot.player.x,
        snapshot.player.y,
        snapshot.opponent.x,
        snapshot.opponent.y,
    );
    out
}
