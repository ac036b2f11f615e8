//! Game rule constants.
//! 
//! This module defines the level-invariant gameplay parameters: fuse timing,
//! blast range, hazard display window and the player's bombing cooldown.
use std::time::Duration;

/// Delay between arming a bomb and its detonation (in milliseconds).
pub const FUSE_DURATION_MS: u64 = 2000;

/// Number of cells a blast travels in each cardinal direction.
pub const BLAST_RANGE: i32 = 4;

/// How long a detonation's tiles stay visible after the blast (in milliseconds).
pub const HAZARD_WINDOW_MS: u64 = 500;

/// Minimum delay between two successful player bomb placements (in milliseconds).
pub const PLAYER_BOMB_COOLDOWN_MS: u64 = 2000;

/// Period of the fuse check driven by the session (in milliseconds).
/// Bounds how late a bomb may detonate after its deadline.
pub const FUSE_POLL_INTERVAL_MS: u64 = 50;

/// Rule set used by one engine instance.
///
/// `Default` yields the compiled-in constants above; tests and demos may
/// shorten the timings without touching the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub fuse_duration: Duration,
    pub blast_range: i32,
    pub hazard_window: Duration,
    pub player_bomb_cooldown: Duration,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            fuse_duration: Duration::from_millis(FUSE_DURATION_MS),
            blast_range: BLAST_RANGE,
            hazard_window: Duration::from_millis(HAZARD_WINDOW_MS),
            player_bomb_cooldown: Duration::from_millis(PLAYER_BOMB_COOLDOWN_MS),
        }
    }
}
