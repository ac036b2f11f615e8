//! Arena geometry module.

pub mod grid;

pub use grid::*;
