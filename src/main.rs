//! Main entry point for the bomb arena.
//!
//! Initializes logging, selects the level from the command line, starts the
//! game session actor and the terminal view, and waits for the game to end.
//!
//! Usage: `bomb-arena [LEVEL] [--json]` where LEVEL is 1, 2 or 3 (default 1).

use actix::Actor;
use std::io;
use tokio::sync::oneshot;

use config::game::Rules;
use config::level::Level;
use game::types::Outcome;
use session::messages::Subscribe;
use session::server::GameSession;
use session::input::read_intents;
use session::view::TerminalView;

pub mod config;
mod game;
mod session;

fn parse_level(arg: Option<&String>) -> io::Result<Level> {
    let Some(raw) = arg else {
        return Ok(Level::One);
    };
    raw.parse::<u8>()
        .ok()
        .and_then(Level::from_id)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("unknown level '{}', expected 1, 2 or 3", raw)))
}

#[actix::main]
async fn main() -> io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let level = parse_level(args.iter().find(|a| !a.starts_with("--")))?;

    let (done_tx, done_rx) = oneshot::channel();
    let view = TerminalView::new(json, done_tx).start();
    let session = GameSession::new(level.config(), Rules::default()).start();
    session.do_send(Subscribe {
        snapshots: view.clone().recipient(),
        outcomes: view.clone().recipient(),
    });

    if !json {
        println!("Level {}: move with w/a/s/d (or arrows), bomb with b (or space), quit with q. Press Enter after each key.", level.id());
    }

    // Blocking stdin lives on its own thread so it never holds up shutdown.
    let input_session = session.clone();
    std::thread::spawn(move || read_intents(input_session, view));

    match done_rx.await {
        Ok(Some(Outcome::Won)) => println!("You Won!"),
        Ok(Some(Outcome::Lost)) => println!("Game Over!"),
        Ok(None) | Err(_) => println!("Bye."),
    }
    Ok(())
}
