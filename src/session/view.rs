//! Terminal presentation actor.
//!
//! Draws every snapshot the session publishes and hands the final outcome back
//! to `main` so the process can tear down.

use actix::prelude::*;
use log::warn;
use tokio::sync::oneshot;

use crate::game::systems::render_snapshot;
use crate::game::types::Outcome;
use crate::session::messages::{GameEnded, SnapshotUpdate};

/// Ask the view to close without an outcome (player quit).
#[derive(Message)]
#[rtype(result = "()")]
pub struct Quit;

pub struct TerminalView {
    json: bool,
    done: Option<oneshot::Sender<Option<Outcome>>>,
}

impl TerminalView {
    /// `json` switches the output from a drawn grid to one JSON snapshot per line.
    pub fn new(json: bool, done: oneshot::Sender<Option<Outcome>>) -> Self {
        Self { json, done: Some(done) }
    }

    fn finish(&mut self, outcome: Option<Outcome>) {
        if let Some(done) = self.done.take() {
            let _ = done.send(outcome);
        }
    }
}

impl Actor for TerminalView {
    type Context = Context<Self>;
}

impl Handler<SnapshotUpdate> for TerminalView {
    type Result = ();

    fn handle(&mut self, msg: SnapshotUpdate, _: &mut Context<Self>) -> Self::Result {
        if self.json {
            match serde_json::to_string(&msg) {
                Ok(text) => println!("{}", text),
                Err(err) => warn!("[TerminalView] Failed to serialize snapshot: {}", err),
            }
        } else {
            println!("{}", render_snapshot(&msg.snapshot));
        }
    }
}

impl Handler<GameEnded> for TerminalView {
    type Result = ();

    fn handle(&mut self, msg: GameEnded, ctx: &mut Context<Self>) -> Self::Result {
        self.finish(Some(msg.outcome));
        ctx.stop();
    }
}

impl Handler<Quit> for TerminalView {
    type Result = ();

    fn handle(&mut self, _: Quit, ctx: &mut Context<Self>) -> Self::Result {
        self.finish(None);
        ctx.stop();
    }
}
