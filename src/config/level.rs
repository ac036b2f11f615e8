//! Per-level arena layouts and opponent timings.
//!
//! Each playable level is one declarative `LevelConfig` record; the engine and
//! the session look the record up instead of branching on the level number.
use std::time::Duration;

use crate::game::types::Cell;

/// Identifier of one of the built-in levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// Map a 1-based level number to a level. Returns `None` outside `1..=3`.
    pub fn from_id(id: u8) -> Option<Level> {
        match id {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self.config().level
    }

    pub fn config(self) -> &'static LevelConfig {
        match self {
            Level::One => &LEVELS[0],
            Level::Two => &LEVELS[1],
            Level::Three => &LEVELS[2],
        }
    }
}

/// Static description of one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    pub level: u8,
    /// Side length of the square grid.
    pub size: i32,
    pub obstacles: &'static [Cell],
    pub opponent_move_period: Duration,
    pub opponent_bomb_period: Duration,
}

#[rustfmt::skip]
const LEVEL_1_OBSTACLES: [Cell; 9] = [
    Cell::new(1, 1), Cell::new(1, 3), Cell::new(1, 5),
    Cell::new(3, 1), Cell::new(3, 3), Cell::new(3, 5),
    Cell::new(5, 1), Cell::new(5, 3), Cell::new(5, 5),
];

#[rustfmt::skip]
const LEVEL_2_OBSTACLES: [Cell; 16] = [
    Cell::new(1, 1), Cell::new(1, 3), Cell::new(1, 5), Cell::new(1, 7),
    Cell::new(3, 1), Cell::new(3, 3), Cell::new(3, 5), Cell::new(3, 7),
    Cell::new(5, 1), Cell::new(5, 3), Cell::new(5, 5), Cell::new(5, 7),
    Cell::new(7, 1), Cell::new(7, 3), Cell::new(7, 5), Cell::new(7, 7),
];

#[rustfmt::skip]
const LEVEL_3_OBSTACLES: [Cell; 25] = [
    Cell::new(1, 1), Cell::new(1, 3), Cell::new(1, 5), Cell::new(1, 7), Cell::new(1, 9),
    Cell::new(3, 1), Cell::new(3, 3), Cell::new(3, 5), Cell::new(3, 7), Cell::new(3, 9),
    Cell::new(5, 1), Cell::new(5, 3), Cell::new(5, 5), Cell::new(5, 7), Cell::new(5, 9),
    Cell::new(7, 1), Cell::new(7, 3), Cell::new(7, 5), Cell::new(7, 7), Cell::new(7, 9),
    Cell::new(9, 1), Cell::new(9, 3), Cell::new(9, 5), Cell::new(9, 7), Cell::new(9, 9),
];

/// Built-in levels, ordered by difficulty.
pub static LEVELS: [LevelConfig; 3] = [
    LevelConfig {
        level: 1,
        size: 7,
        obstacles: &LEVEL_1_OBSTACLES,
        opponent_move_period: Duration::from_millis(600),
        opponent_bomb_period: Duration::from_millis(7000),
    },
    LevelConfig {
        level: 2,
        size: 9,
        obstacles: &LEVEL_2_OBSTACLES,
        opponent_move_period: Duration::from_millis(450),
        opponent_bomb_period: Duration::from_millis(5000),
    },
    LevelConfig {
        level: 3,
        size: 11,
        obstacles: &LEVEL_3_OBSTACLES,
        opponent_move_period: Duration::from_millis(300),
        opponent_bomb_period: Duration::from_millis(3000),
    },
];

impl LevelConfig {
    /// Starting cell of the human player (top-left corner).
    pub fn player_spawn(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Starting cell of the opponent (bottom-right corner).
    pub fn opponent_spawn(&self) -> Cell {
        Cell::new(self.size - 1, self.size - 1)
    }
}
