//! Score events and submission records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable entry in an entity's score history.
///
/// Events are append-only and never edited or removed once committed; their
/// order within a history equals their chronological order. `points` is
/// signed so that penalty or retraction events stay representable even though
/// no endpoint currently emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub time: DateTime<Utc>,
    pub points: i64,
    pub challenge_id: Uuid,
}

/// Immutable record of an accepted submission.
///
/// The existence of a record for a (challenge, team) pair is the sole source
/// of truth for duplicate detection; the same holds per (challenge, user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub challenge_id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub time: DateTime<Utc>,
}
