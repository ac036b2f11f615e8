use std::collections::HashSet;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use crate::config::game::Rules;
use crate::config::level::Level;
use crate::game::entities::{GreedyChaser, OpponentPolicy};
use crate::game::grid::Grid;
use crate::game::state::GameEngine;
use crate::game::systems::compute_blast_tiles;
use crate::game::types::{Cell, Direction, GameStatus, Outcome, Owner};

/// Opponent that never moves and bombs a fixed cell.
struct Scripted {
    bomb_at: Cell,
}

impl OpponentPolicy for Scripted {
    fn decide_move(&self, _grid: &Grid, current: Cell, _target: Cell, _hazard: Option<Cell>) -> Cell {
        current
    }

    fn decide_bomb(&self, _current: Cell) -> Cell {
        self.bomb_at
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn open_engine(player: Cell, opponent: Cell) -> GameEngine {
    GameEngine::with_layout(Grid::new(9, []), player, opponent, Rules::default())
}

#[test]
fn test_engine_starts_on_level_corners() {
    let engine = GameEngine::new(Level::Three.config(), Rules::default());
    assert_eq!(engine.player_position(), Cell::new(0, 0));
    assert_eq!(engine.opponent_position(), Cell::new(10, 10));
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.grid().size(), 11);
    assert_eq!(engine.level(), 3);
}

#[test]
fn test_move_into_wall_is_rejected() {
    let mut engine = GameEngine::new(Level::One.config(), Rules::default());
    assert!(engine.move_player(Direction::Right));
    assert!(!engine.move_player(Direction::Down));
    assert_eq!(engine.player_position(), Cell::new(1, 0));
}

#[test]
fn test_player_bomb_cooldown() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(8, 8));
    let t0 = Instant::now();

    assert!(engine.request_player_bomb(t0));
    engine.move_player(Direction::Right);
    assert!(!engine.request_player_bomb(t0 + ms(1999)));
    assert!(engine.request_player_bomb(t0 + ms(2000)));
    assert_eq!(engine.bombs().len(), 2);
}

#[test]
fn test_bomb_detonates_only_after_full_fuse() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(8, 8));
    let t0 = Instant::now();
    engine.request_player_bomb(t0);
    for _ in 0..4 {
        engine.move_player(Direction::Right);
    }
    engine.move_player(Direction::Down);

    assert!(engine.tick_fuses(t0 + ms(1999)).is_empty());
    assert_eq!(engine.bombs().len(), 1);

    let detonations = engine.tick_fuses(t0 + ms(2000));
    assert_eq!(detonations.len(), 1);
    assert_eq!(detonations[0].outcome, None);
    assert!(engine.bombs().is_empty());
    assert!(engine.is_running());
}

#[test]
fn test_standing_on_own_bomb_loses() {
    let mut engine = GameEngine::new(Level::One.config(), Rules::default());
    let t0 = Instant::now();
    engine.request_player_bomb(t0);

    let detonations = engine.tick_fuses(t0 + ms(2000));
    assert_eq!(detonations[0].outcome, Some(Outcome::Lost));
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn test_opponent_bomb_on_plus_x_arm_is_scanned_before_player_on_minus_x_arm() {
    let t0 = Instant::now();

    // Player two cells west of the blast, opponent two cells east.
    let mut engine = open_engine(Cell::new(2, 4), Cell::new(6, 4))
        .with_policy(Box::new(Scripted { bomb_at: Cell::new(4, 4) }));
    assert!(engine.tick_opponent_bomb(t0));
    engine.tick_fuses(t0 + ms(2000));
    assert_eq!(engine.status(), GameStatus::Won);

    // Mirror the positions and the player is the one caught first.
    let mut engine = open_engine(Cell::new(6, 4), Cell::new(2, 4))
        .with_policy(Box::new(Scripted { bomb_at: Cell::new(4, 4) }));
    engine.tick_opponent_bomb(t0);
    engine.tick_fuses(t0 + ms(2000));
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn test_batch_stops_at_first_terminal_detonation() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(8, 8));
    let t0 = Instant::now();
    engine.request_player_bomb(t0);
    engine.tick_opponent_bomb(t0 + ms(10));

    let detonations = engine.tick_fuses(t0 + ms(5000));
    assert_eq!(detonations.len(), 1);
    assert_eq!(detonations[0].owner, Owner::Player);
    assert_eq!(engine.status(), GameStatus::Lost);
    // The opponent's bomb was due too but is left armed and unprocessed.
    assert_eq!(engine.bombs().len(), 1);
    assert_eq!(engine.hazard(), Some(Cell::new(8, 8)));
}

#[test]
fn test_terminal_state_freezes_everything() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(8, 8));
    let t0 = Instant::now();
    engine.request_player_bomb(t0);
    engine.tick_fuses(t0 + ms(2000));
    assert_eq!(engine.status(), GameStatus::Lost);

    let later = t0 + ms(10_000);
    let before = engine.snapshot(later);

    assert!(!engine.move_player(Direction::Down));
    assert!(!engine.request_player_bomb(later));
    assert!(!engine.tick_opponent_move(later));
    assert!(!engine.tick_opponent_bomb(later));
    assert!(engine.tick_fuses(later).is_empty());

    assert_eq!(engine.snapshot(later), before);
    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.hazard(), None);
}

#[test]
fn test_hazard_memory_set_and_cleared() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(8, 8));
    let t0 = Instant::now();

    assert!(engine.tick_opponent_bomb(t0));
    assert_eq!(engine.hazard(), Some(Cell::new(8, 8)));

    // Step out of the blast cross before the fuse runs out.
    assert!(engine.tick_opponent_move(t0 + ms(600)));
    assert!(engine.tick_opponent_move(t0 + ms(1200)));
    engine.tick_fuses(t0 + ms(2000));

    assert_eq!(engine.hazard(), None);
    assert!(engine.is_running());
}

#[test]
fn test_hazard_tracks_only_latest_opponent_bomb() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(8, 8));
    let t0 = Instant::now();
    engine.tick_opponent_bomb(t0);
    engine.tick_opponent_move(t0 + ms(100));
    engine.tick_opponent_move(t0 + ms(200));
    engine.tick_opponent_bomb(t0 + ms(300));

    let latest = engine.opponent_position();
    assert_eq!(latest, Cell::new(7, 7));
    assert_eq!(engine.hazard(), Some(latest));

    // The first bomb going off does not clear memory of the second.
    engine.tick_fuses(t0 + ms(2000));
    assert!(engine.is_running());
    assert_eq!(engine.hazard(), Some(latest));
}

#[test]
fn test_opponent_flees_its_own_bomb_and_survives() {
    let mut engine = GameEngine::new(Level::One.config(), Rules::default());
    let t0 = Instant::now();
    engine.tick_opponent_bomb(t0);
    let bomb = engine.hazard().expect("hazard remembered");

    let mut now = t0;
    for _ in 0..3 {
        now += ms(600);
        engine.tick_opponent_move(now);
    }
    let danger = compute_blast_tiles(engine.grid(), bomb, engine.rules().blast_range);
    assert!(!danger.contains(&engine.opponent_position()));

    engine.tick_fuses(t0 + ms(2000));
    assert!(engine.is_running());
}

#[test]
fn test_opponent_caught_in_player_blast() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(3, 0))
        .with_policy(Box::new(Scripted { bomb_at: Cell::new(8, 8) }));
    let t0 = Instant::now();
    engine.move_player(Direction::Right);
    engine.request_player_bomb(t0);
    engine.move_player(Direction::Down);
    engine.move_player(Direction::Right);

    let detonations = engine.tick_fuses(t0 + ms(2000));
    assert_eq!(detonations[0].outcome, Some(Outcome::Won));
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn test_snapshot_keeps_blast_for_hazard_window() {
    let mut engine = open_engine(Cell::new(0, 0), Cell::new(8, 8));
    let t0 = Instant::now();
    engine.request_player_bomb(t0);
    for _ in 0..5 {
        engine.move_player(Direction::Down);
    }
    engine.move_player(Direction::Right);

    let snap = engine.snapshot(t0 + ms(500));
    assert_eq!(snap.active_bombs.len(), 1);
    assert_eq!(snap.active_bombs[0].remaining_ms, 1500);
    assert_eq!(snap.active_bombs[0].armed_ms_ago, 500);

    engine.tick_fuses(t0 + ms(2000));
    let snap = engine.snapshot(t0 + ms(2100));
    assert!(snap.active_bombs.is_empty());
    assert_eq!(snap.active_blasts.len(), 1);
    assert_eq!(snap.active_blasts[0].hazard_remaining_ms, 400);

    assert!(engine.expire_blasts(t0 + ms(2500)));
    assert!(engine.snapshot(t0 + ms(2500)).active_blasts.is_empty());
}

#[test]
fn test_boxed_in_opponent_tick_reports_expired_blast() {
    let grid = Grid::new(5, [Cell::new(3, 4), Cell::new(4, 3)]);
    let mut engine = GameEngine::with_layout(grid, Cell::new(0, 0), Cell::new(4, 4), Rules::default());
    let t0 = Instant::now();
    engine.request_player_bomb(t0);
    engine.move_player(Direction::Right);
    engine.move_player(Direction::Down);

    engine.tick_fuses(t0 + ms(2000));
    assert_eq!(engine.snapshot(t0 + ms(2100)).active_blasts.len(), 1);

    // The opponent cannot step anywhere, yet the blast leaving the board is a change.
    assert!(engine.tick_opponent_move(t0 + ms(2600)));
    assert_eq!(engine.opponent_position(), Cell::new(4, 4));
    assert!(engine.snapshot(t0 + ms(2600)).active_blasts.is_empty());
    assert!(!engine.tick_opponent_move(t0 + ms(3200)));
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let engine = GameEngine::new(Level::Two.config(), Rules::default());
    let snap = engine.snapshot(Instant::now());
    let json = serde_json::to_string(&snap).unwrap();
    let back: crate::game::snapshot::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.obstacles.len(), 16);
}

fn arena() -> impl Strategy<Value = (Grid, Cell)> {
    (3i32..12).prop_flat_map(|size| {
        (
            Just(size),
            prop::collection::vec((0..size, 0..size), 0..(size as usize * 2)),
            (0..size, 0..size),
        )
            .prop_map(|(size, walls, (x, y))| {
                let origin = Cell::new(x, y);
                let walls = walls.into_iter().map(|(x, y)| Cell::new(x, y)).filter(|c| *c != origin);
                (Grid::new(size, walls), origin)
            })
    })
}

proptest! {
    #[test]
    fn prop_blast_tiles_are_a_clipped_cross((grid, origin) in arena(), range in 0i32..6) {
        let tiles = compute_blast_tiles(&grid, origin, range);
        prop_assert_eq!(tiles[0], origin);

        let unique: HashSet<Cell> = tiles.iter().copied().collect();
        prop_assert_eq!(unique.len(), tiles.len());

        for tile in &tiles[1..] {
            prop_assert!(grid.is_traversable(*tile));
            prop_assert!(tile.x == origin.x || tile.y == origin.y);
            prop_assert!(tile.manhattan(origin) <= range);
            // Every cell between the origin and the tile is open too.
            let (dx, dy) = ((tile.x - origin.x).signum(), (tile.y - origin.y).signum());
            for step in 1..tile.manhattan(origin) {
                prop_assert!(grid.is_traversable(origin.offset(dx * step, dy * step)));
            }
        }
    }

    #[test]
    fn prop_opponent_steps_to_an_open_neighbour_or_stays(
        (grid, current) in arena(),
        target in (0i32..12, 0i32..12),
        hazard in prop::option::of((0i32..12, 0i32..12)),
    ) {
        let policy = GreedyChaser::new(4);
        let hazard = hazard.map(|(x, y)| Cell::new(x, y)).filter(|c| grid.is_traversable(*c));
        let next = policy.decide_move(&grid, current, Cell::new(target.0, target.1), hazard);

        let neighbours: Vec<Cell> = Direction::ALL.iter().map(|&d| current.step(d)).collect();
        let open: Vec<Cell> = neighbours.iter().copied().filter(|c| grid.is_traversable(*c)).collect();
        if open.is_empty() {
            prop_assert_eq!(next, current);
        } else {
            prop_assert!(open.contains(&next));
        }

        if let Some(bomb) = hazard {
            let danger = compute_blast_tiles(&grid, bomb, 4);
            let any_safe = open.iter().any(|c| !danger.contains(c));
            if any_safe {
                prop_assert!(!danger.contains(&next));
            }
        }
    }
}
