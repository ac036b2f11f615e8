//! Session layer root module.
//!
//! This module drives a `GameEngine` in real time, including:
//! - The `GameSession` actor (single writer, owns the engine and its timers)
//! - Messages exchanged with the presentation layer
//! - A terminal view and a stdin input reader for local play

pub mod input;
pub mod messages;
pub mod server;
pub mod view;
