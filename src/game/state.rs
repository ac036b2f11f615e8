use std::time::Instant;

use log::{debug, info, warn};

use crate::config::game::Rules;
use crate::config::level::LevelConfig;
use crate::game::entities::{BlastEvent, BombRegistry, Combatant, GreedyChaser, OpponentPolicy};
use crate::game::grid::Grid;
use crate::game::snapshot::{millis_until, BlastView, BombView, Snapshot};
use crate::game::systems::{move_combatant, resolve_blast};
use crate::game::types::{Cell, Direction, GameStatus, Outcome, Owner};

/// Result of resolving one detonation during a fuse tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detonation {
    pub owner: Owner,
    pub origin: Cell,
    /// Set when this blast ended the game.
    pub outcome: Option<Outcome>,
}

/// Authoritative state of one arena session.
///
/// Every mutating operation is a no-op once the game has left `Running`.
/// The engine never reads the clock itself: callers pass `now`.
pub struct GameEngine {
    level: u8,
    rules: Rules,
    grid: Grid,
    bombs: BombRegistry,
    player: Combatant,
    opponent: Combatant,
    policy: Box<dyn OpponentPolicy>,
    /// Position of the opponent's latest armed bomb, cleared when a bomb at that cell detonates.
    hazard: Option<Cell>,
    /// Detonations still inside their hazard window.
    blasts: Vec<BlastEvent>,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine for a built-in level, combatants on their spawn corners.
    pub fn new(config: &LevelConfig, rules: Rules) -> Self {
        let mut engine = Self::with_layout(
            Grid::from_level(config),
            config.player_spawn(),
            config.opponent_spawn(),
            rules,
        );
        engine.level = config.level;
        engine
    }

    /// Create an engine on an arbitrary grid with explicit start cells.
    pub fn with_layout(grid: Grid, player: Cell, opponent: Cell, rules: Rules) -> Self {
        Self {
            level: 0,
            rules,
            grid,
            bombs: BombRegistry::new(rules.fuse_duration, rules.blast_range, rules.hazard_window),
            player: Combatant::new(player),
            opponent: Combatant::new(opponent),
            policy: Box::new(GreedyChaser::new(rules.blast_range)),
            hazard: None,
            blasts: Vec::new(),
            status: GameStatus::Running,
        }
    }

    /// Replace the opponent's decision policy.
    pub fn with_policy(mut self, policy: Box<dyn OpponentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Built-in level number, `0` for a custom layout.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn player_position(&self) -> Cell {
        self.player.position
    }

    pub fn opponent_position(&self) -> Cell {
        self.opponent.position
    }

    pub fn hazard(&self) -> Option<Cell> {
        self.hazard
    }

    pub fn bombs(&self) -> &BombRegistry {
        &self.bombs
    }

    /// Move the player one cell. Returns whether the move was applied.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        let applied = move_combatant(&self.grid, &mut self.player, direction);
        debug!("[Engine] Player move {:?} applied={} pos={:?}", direction, applied, self.player.position);
        applied
    }

    /// Arm a bomb under the player if the cooldown has elapsed. Returns whether one was placed.
    pub fn request_player_bomb(&mut self, now: Instant) -> bool {
        if !self.is_running() || !self.player.bomb_ready(now, self.rules.player_bomb_cooldown) {
            return false;
        }
        match self.bombs.arm(&self.grid, Owner::Player, self.player.position, now) {
            Ok(id) => {
                self.player.record_bomb(now);
                info!("[Engine] Player armed bomb {:?} at {:?}", id, self.player.position);
                true
            }
            Err(err) => {
                warn!("[Engine] Player bomb rejected: {}", err);
                false
            }
        }
    }

    /// Let the opponent policy pick the next cell.
    ///
    /// Returns whether anything visible changed: the opponent moved or a stale blast was dropped.
    pub fn tick_opponent_move(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        let expired = self.expire_blasts(now);
        let next = self.policy.decide_move(&self.grid, self.opponent.position, self.player.position, self.hazard);
        let moved = next != self.opponent.position;
        self.opponent.position = next;
        moved || expired
    }

    /// Arm a bomb where the policy says and remember it as the opponent's hazard.
    pub fn tick_opponent_bomb(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        let target = self.policy.decide_bomb(self.opponent.position);
        match self.bombs.arm(&self.grid, Owner::Opponent, target, now) {
            Ok(id) => {
                self.opponent.record_bomb(now);
                self.hazard = Some(target);
                info!("[Engine] Opponent armed bomb {:?} at {:?}", id, target);
                true
            }
            Err(err) => {
                warn!("[Engine] Opponent bomb rejected: {}", err);
                false
            }
        }
    }

    /// Detonate every bomb whose fuse has run out and resolve eliminations.
    ///
    /// Detonations are handled in arming order. The first one that eliminates a
    /// combatant ends the game; bombs still due after it stay armed and are never
    /// processed.
    pub fn tick_fuses(&mut self, now: Instant) -> Vec<Detonation> {
        if !self.is_running() {
            return Vec::new();
        }
        self.expire_blasts(now);

        let mut detonations = Vec::new();
        while let Some(event) = self.bombs.detonate_next(&self.grid, now) {
            if self.hazard == Some(event.origin) {
                self.hazard = None;
            }

            let outcome = resolve_blast(&event.tiles, self.player.position, self.opponent.position);
            info!(
                "[Engine] {:?} bomb {:?} detonated at {:?} ({} tiles)",
                event.owner, event.bomb, event.origin, event.tiles.len()
            );
            detonations.push(Detonation {
                owner: event.owner,
                origin: event.origin,
                outcome,
            });
            self.blasts.push(event);

            if let Some(outcome) = outcome {
                self.status = outcome.into();
                info!("[Engine] Game over: {:?}", outcome);
                break;
            }
        }
        detonations
    }

    /// Drop blasts whose hazard window has closed. Returns whether any were dropped.
    pub fn expire_blasts(&mut self, now: Instant) -> bool {
        let before = self.blasts.len();
        self.blasts.retain(|blast| blast.hazard_until > now);
        self.blasts.len() != before
    }

    /// Copy of everything the presentation layer draws, timed against `now`.
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let mut obstacles: Vec<Cell> = self.grid.obstacles().collect();
        obstacles.sort_by_key(|cell| (cell.y, cell.x));

        Snapshot {
            level: self.level,
            grid_size: self.grid.size(),
            obstacles,
            player: self.player.position,
            opponent: self.opponent.position,
            status: self.status,
            active_bombs: self
                .bombs
                .active()
                .map(|bomb| BombView {
                    owner: bomb.owner,
                    position: bomb.position,
                    fuse_ms: bomb.fuse.as_millis() as u64,
                    armed_ms_ago: now.saturating_duration_since(bomb.armed_at).as_millis() as u64,
                    remaining_ms: millis_until(bomb.deadline(), now),
                })
                .collect(),
            active_blasts: self
                .blasts
                .iter()
                .filter(|blast| blast.hazard_until > now)
                .map(|blast| BlastView {
                    origin: blast.origin,
                    tiles: blast.tiles.clone(),
                    hazard_remaining_ms: millis_until(blast.hazard_until, now),
                })
                .collect(),
        }
    }
}
