//! Stdin input reader.
//!
//! Translates typed lines into player intents and forwards them to the session.

use actix::Addr;
use log::{debug, warn};
use std::io::{self, BufRead};

use crate::game::types::Direction;
use crate::session::messages::PlayerIntent;
use crate::session::server::GameSession;
use crate::session::view::{Quit, TerminalView};

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(PlayerIntent),
    Quit,
}

/// Map a line to a command: `w/a/s/d` or arrow keys move, `b` or a space bombs, `q` quits.
pub fn parse_command(line: &str) -> Option<Command> {
    let command = match line.trim_end_matches(['\r', '\n']) {
        "w" | "\x1b[A" => Command::Intent(PlayerIntent::Move(Direction::Up)),
        "s" | "\x1b[B" => Command::Intent(PlayerIntent::Move(Direction::Down)),
        "a" | "\x1b[D" => Command::Intent(PlayerIntent::Move(Direction::Left)),
        "d" | "\x1b[C" => Command::Intent(PlayerIntent::Move(Direction::Right)),
        "b" | " " => Command::Intent(PlayerIntent::PlaceBomb),
        "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Read stdin until it closes or the player quits. Blocking: run on its own thread.
pub fn read_intents(session: Addr<GameSession>, view: Addr<TerminalView>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("[Input] stdin error: {}", err);
                break;
            }
        };
        match parse_command(&line) {
            Some(Command::Intent(intent)) => session.do_send(intent),
            Some(Command::Quit) => break,
            None => debug!("[Input] Ignored input {:?}", line),
        }
    }
    view.do_send(Quit);
}
