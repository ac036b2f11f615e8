//! Bomb entity logic.
//!
//! This module handles arming bombs, tracking their fuses and turning expired
//! bombs into blast events.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::game::grid::Grid;
use crate::game::systems::compute_blast_tiles;
use crate::game::types::{Cell, Owner};

/// Errors raised by the bomb registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BombError {
    #[error("cannot arm a bomb on non-traversable cell ({}, {})", .cell.x, .cell.y)]
    InvalidPlacement { cell: Cell },
}

/// Handle identifying an armed bomb, unique within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BombId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BombState {
    Armed,
    Detonated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bomb {
    pub id: BombId,
    pub owner: Owner,
    pub position: Cell,
    pub armed_at: Instant,
    pub fuse: Duration,
    pub state: BombState,
}

impl Bomb {
    pub fn deadline(&self) -> Instant {
        self.armed_at + self.fuse
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.state == BombState::Armed && self.deadline() <= now
    }
}

/// A single detonation: the cells it reached, in scan order, and how long they stay hot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlastEvent {
    pub bomb: BombId,
    pub owner: Owner,
    pub origin: Cell,
    pub tiles: Vec<Cell>,
    pub hazard_until: Instant,
}

/// Armed bombs in arming order.
#[derive(Debug)]
pub struct BombRegistry {
    bombs: VecDeque<Bomb>,
    next_id: u64,
    fuse: Duration,
    blast_range: i32,
    hazard_window: Duration,
}

impl BombRegistry {
    pub fn new(fuse: Duration, blast_range: i32, hazard_window: Duration) -> Self {
        Self {
            bombs: VecDeque::new(),
            next_id: 1,
            fuse,
            blast_range,
            hazard_window,
        }
    }

    /// Arm a bomb at `position`. The cell must be traversable.
    pub fn arm(&mut self, grid: &Grid, owner: Owner, position: Cell, now: Instant) -> Result<BombId, BombError> {
        if !grid.is_traversable(position) {
            return Err(BombError::InvalidPlacement { cell: position });
        }

        let id = BombId(self.next_id);
        self.next_id += 1;
        self.bombs.push_back(Bomb {
            id,
            owner,
            position,
            armed_at: now,
            fuse: self.fuse,
            state: BombState::Armed,
        });
        Ok(id)
    }

    /// Detonate the earliest-armed bomb whose fuse has run out, if any.
    ///
    /// Bombs that are due but not yet popped stay in the registry, so a caller
    /// may stop draining part-way through a batch.
    pub fn detonate_next(&mut self, grid: &Grid, now: Instant) -> Option<BlastEvent> {
        let index = self.bombs.iter().position(|bomb| bomb.is_due(now))?;
        let mut bomb = self.bombs.remove(index)?;
        bomb.state = BombState::Detonated;

        Some(BlastEvent {
            bomb: bomb.id,
            owner: bomb.owner,
            origin: bomb.position,
            tiles: compute_blast_tiles(grid, bomb.position, self.blast_range),
            hazard_until: now + self.hazard_window,
        })
    }

    /// Detonate every bomb whose fuse has run out, in arming order.
    pub fn advance(&mut self, grid: &Grid, now: Instant) -> Vec<BlastEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.detonate_next(grid, now) {
            events.push(event);
        }
        events
    }

    pub fn active(&self) -> impl Iterator<Item = &Bomb> {
        self.bombs.iter()
    }

    pub fn len(&self) -> usize {
        self.bombs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }
}
