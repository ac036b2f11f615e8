use std::time::{Duration, Instant};

use crate::game::types::Cell;

/// Mutable state of one combatant (the player or the opponent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub position: Cell,
    /// Time of the last successful bomb placement; `None` until the first one.
    pub last_bomb_placed_at: Option<Instant>,
}

impl Combatant {
    pub fn new(position: Cell) -> Self {
        Self {
            position,
            last_bomb_placed_at: None,
        }
    }

    /// True when at least `cooldown` has elapsed since the previous placement.
    pub fn bomb_ready(&self, now: Instant, cooldown: Duration) -> bool {
        match self.last_bomb_placed_at {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= cooldown,
        }
    }

    pub fn record_bomb(&mut self, now: Instant) {
        self.last_bomb_placed_at = Some(now);
    }
}
