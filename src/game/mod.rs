//! Simulation core: grid, bombs, blasts, combatants, opponent policy and the engine
//! that ties them together. Nothing in here knows about actors or wall-clock time.

pub mod types;
pub mod snapshot;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;

#[cfg(test)]
mod tests;
