//! Read-only view of an engine, handed to the presentation layer.

use std::time::Instant;

use serde::{Serialize, Deserialize};

use crate::game::types::{Cell, GameStatus, Owner};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombView {
    pub owner: Owner,
    pub position: Cell,
    pub fuse_ms: u64,
    /// Milliseconds since the bomb was armed.
    pub armed_ms_ago: u64,
    /// Milliseconds left before detonation, as of the snapshot.
    pub remaining_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlastView {
    pub origin: Cell,
    pub tiles: Vec<Cell>,
    /// Milliseconds left in the hazard window, as of the snapshot.
    pub hazard_remaining_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub level: u8,
    pub grid_size: i32,
    /// Sorted row-major so that snapshots compare and render deterministically.
    pub obstacles: Vec<Cell>,
    pub player: Cell,
    pub opponent: Cell,
    pub status: GameStatus,
    pub active_bombs: Vec<BombView>,
    pub active_blasts: Vec<BlastView>,
}

pub(crate) fn millis_until(deadline: Instant, now: Instant) -> u64 {
    deadline.saturating_duration_since(now).as_millis() as u64
}

impl Snapshot {
    /// Cells currently inside a live blast.
    pub fn blast_tiles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.active_blasts.iter().flat_map(|blast| blast.tiles.iter().copied())
    }
}
