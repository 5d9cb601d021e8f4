//! Team snapshot model

use serde::Serialize;
use uuid::Uuid;

use crate::models::score::ScoreEvent;

/// Consistent point-in-time view of a team: identity plus the full score
/// history and derived final score, captured atomically from the store.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSnapshot {
    pub id: Uuid,
    pub name: String,
    pub events: Vec<ScoreEvent>,
    pub final_score: i64,
}
