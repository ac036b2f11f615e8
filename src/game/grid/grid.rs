use std::collections::HashSet;

use crate::config::level::LevelConfig;
use crate::game::types::Cell;

/// Static arena geometry: a square of `size` cells with fixed obstacles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    obstacles: HashSet<Cell>,
}

impl Grid {
    pub fn new(size: i32, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            size,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Build the grid for one of the built-in level layouts.
    pub fn from_level(config: &LevelConfig) -> Self {
        Self::new(config.size, config.obstacles.iter().copied())
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.size && cell.y >= 0 && cell.y < self.size
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    /// A cell can be walked on (and reached by a blast) when it is on the grid and not a wall.
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_obstacle(cell)
    }
}
