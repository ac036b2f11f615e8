use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::snapshot::Snapshot;
use crate::game::types::{Direction, Outcome};

/// Input intent from the human player. Replies whether it was applied.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[rtype(result = "bool")]
pub enum PlayerIntent {
    Move(Direction),
    PlaceBomb,
}

/// Fresh snapshot, pushed to subscribers after every state change.
#[derive(Message, Debug, Clone, Serialize)]
#[rtype(result = "()")]
pub struct SnapshotUpdate {
    pub session_id: Uuid,
    pub snapshot: Snapshot,
}

/// Sent exactly once, when the session reaches a terminal state.
#[derive(Message, Debug, Clone, Copy, Serialize)]
#[rtype(result = "()")]
pub struct GameEnded {
    pub session_id: Uuid,
    pub outcome: Outcome,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe {
    pub snapshots: Recipient<SnapshotUpdate>,
    pub outcomes: Recipient<GameEnded>,
}

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;
