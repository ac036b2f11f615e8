/// Main configuration module.
/// 
/// Re-exports submodules for rule constants and the per-level layout table.
pub mod game;
pub mod level;
