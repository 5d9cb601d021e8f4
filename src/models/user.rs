//! User snapshot model

use serde::Serialize;
use uuid::Uuid;

use crate::models::score::ScoreEvent;

/// Consistent point-in-time view of a user, captured atomically from the
/// store. `team_id` is `None` until the user joins a team.
#[derive(Debug, Clone, Serialize)]
pub struct UserSnapshot {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub team_id: Option<Uuid>,
    pub events: Vec<ScoreEvent>,
    pub final_score: i64,
}

impl UserSnapshot {
    /// Check if the user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == crate::constants::roles::ADMIN
    }
}
