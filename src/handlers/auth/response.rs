//! Authentication response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::UserSnapshot;

/// User profile with score history
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub team_id: Option<Uuid>,
    pub scores: Vec<ScorePoint>,
    pub final_score: i64,
}

/// One `{time, points}` entry of a score timeline
#[derive(Debug, Serialize)]
pub struct ScorePoint {
    pub time: chrono::DateTime<chrono::Utc>,
    pub points: i64,
}

impl From<UserSnapshot> for UserResponse {
    fn from(snapshot: UserSnapshot) -> Self {
        Self {
            id: snapshot.id,
            username: snapshot.username,
            role: snapshot.role,
            team_id: snapshot.team_id,
            scores: snapshot
                .events
                .iter()
                .map(|e| ScorePoint {
                    time: e.time,
                    points: e.points,
                })
                .collect(),
            final_score: snapshot.final_score,
        }
    }
}

/// Registration success response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Authentication token response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}
