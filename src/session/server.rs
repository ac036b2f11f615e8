//! Game session actor.
//!
//! Owns one `GameEngine` and is its only writer: player intents arrive through
//! the mailbox and the opponent/fuse timers run on the actor's own context, so
//! no two mutations ever interleave.

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::config::game::{Rules, FUSE_POLL_INTERVAL_MS};
use crate::config::level::LevelConfig;
use crate::game::state::GameEngine;
use crate::game::types::{GameStatus, Outcome};
use crate::session::messages::{GameEnded, GetSnapshot, PlayerIntent, SnapshotUpdate, Subscribe};

pub struct GameSession {
    pub session_id: Uuid,
    engine: GameEngine,
    opponent_move_period: Duration,
    opponent_bomb_period: Duration,
    fuse_poll_period: Duration,

    snapshot_subscribers: Vec<Recipient<SnapshotUpdate>>,
    outcome_subscribers: Vec<Recipient<GameEnded>>,
    timers: Vec<SpawnHandle>,
    ended: bool,
}

impl GameSession {
    /// Create a session for a built-in level.
    pub fn new(config: &LevelConfig, rules: Rules) -> Self {
        Self::from_engine(
            GameEngine::new(config, rules),
            config.opponent_move_period,
            config.opponent_bomb_period,
        )
    }

    /// Wrap an existing engine with the given opponent timer periods.
    pub fn from_engine(engine: GameEngine, opponent_move_period: Duration, opponent_bomb_period: Duration) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            engine,
            opponent_move_period,
            opponent_bomb_period,
            fuse_poll_period: Duration::from_millis(FUSE_POLL_INTERVAL_MS),
            snapshot_subscribers: Vec::new(),
            outcome_subscribers: Vec::new(),
            timers: Vec::new(),
            ended: false,
        }
    }

    fn start_timers(&mut self, ctx: &mut Context<Self>) {
        let move_timer = ctx.run_interval(self.opponent_move_period, |act, ctx| {
            let moved = act.engine.tick_opponent_move(Instant::now());
            act.after_mutation(ctx, moved);
        });
        let bomb_timer = ctx.run_interval(self.opponent_bomb_period, |act, ctx| {
            let armed = act.engine.tick_opponent_bomb(Instant::now());
            act.after_mutation(ctx, armed);
        });
        let fuse_timer = ctx.run_interval(self.fuse_poll_period, |act, ctx| {
            let now = Instant::now();
            let expired = act.engine.expire_blasts(now);
            let detonated = !act.engine.tick_fuses(now).is_empty();
            act.after_mutation(ctx, expired || detonated);
        });
        self.timers = vec![move_timer, bomb_timer, fuse_timer];
    }

    fn cancel_timers(&mut self, ctx: &mut Context<Self>) {
        if self.timers.is_empty() {
            return;
        }
        for handle in self.timers.drain(..) {
            ctx.cancel_future(handle);
        }
        debug!("[GameSession] session_id={} timers cancelled", self.session_id);
    }

    /// Broadcast the current snapshot to every subscriber.
    pub fn send_state(&self) {
        let snapshot = self.engine.snapshot(Instant::now());
        debug!(
            "[GameSession] Broadcast snapshot: session_id={} player={:?} opponent={:?} bombs={}",
            self.session_id,
            snapshot.player,
            snapshot.opponent,
            snapshot.active_bombs.len()
        );
        for addr in &self.snapshot_subscribers {
            addr.do_send(SnapshotUpdate {
                session_id: self.session_id,
                snapshot: snapshot.clone(),
            });
        }
    }

    /// Publish a change and, on the first terminal transition, stop the timers and notify once.
    fn after_mutation(&mut self, ctx: &mut Context<Self>, changed: bool) {
        if self.ended {
            return;
        }
        if changed {
            self.send_state();
        }

        let outcome = match self.engine.status() {
            GameStatus::Running => return,
            GameStatus::Won => Outcome::Won,
            GameStatus::Lost => Outcome::Lost,
        };

        self.ended = true;
        self.cancel_timers(ctx);
        info!("[GameSession] session_id={} ended: {:?}", self.session_id, outcome);
        for addr in &self.outcome_subscribers {
            addr.do_send(GameEnded {
                session_id: self.session_id,
                outcome,
            });
        }
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let grid_size = self.engine.grid().size();
        info!(
            "[GameSession] session_id={} started: level {}, grid {}x{}, opponent move every {:?}, bomb every {:?}",
            self.session_id,
            self.engine.level(),
            grid_size,
            grid_size,
            self.opponent_move_period,
            self.opponent_bomb_period
        );
        self.start_timers(ctx);
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        self.cancel_timers(ctx);
        info!("[GameSession] session_id={} stopped", self.session_id);
    }
}

impl Handler<PlayerIntent> for GameSession {
    type Result = bool;

    fn handle(&mut self, msg: PlayerIntent, ctx: &mut Context<Self>) -> Self::Result {
        let applied = match msg {
            PlayerIntent::Move(direction) => self.engine.move_player(direction),
            PlayerIntent::PlaceBomb => self.engine.request_player_bomb(Instant::now()),
        };
        if !applied {
            debug!("[GameSession] Intent {:?} ignored", msg);
        }
        self.after_mutation(ctx, applied);
        applied
    }
}

impl Handler<Subscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        msg.snapshots.do_send(SnapshotUpdate {
            session_id: self.session_id,
            snapshot: self.engine.snapshot(Instant::now()),
        });
        self.snapshot_subscribers.push(msg.snapshots);
        self.outcome_subscribers.push(msg.outcomes);
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.engine.snapshot(Instant::now()))
    }
}
