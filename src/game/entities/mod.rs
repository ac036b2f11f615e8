//! Game entities module.
//!
//! This module organizes combatant, bomb and opponent-policy logic.

pub mod bomb;
pub mod combatant;
pub mod opponent;

pub use bomb::*;
pub use combatant::*;
pub use opponent::*;
