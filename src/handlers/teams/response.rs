//! Team response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::TeamSnapshot;

/// One `{time, points}` entry of a score timeline
#[derive(Debug, Serialize)]
pub struct ScorePoint {
    pub time: DateTime<Utc>,
    pub points: i64,
}

/// Team with its full score timeline (for charts and the scoreboard)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub scores: Vec<ScorePoint>,
    pub final_score: i64,
}

impl From<TeamSnapshot> for TeamResponse {
    fn from(snapshot: TeamSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
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

/// Team creation response: includes the join code to hand out
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamResponse {
    pub team: TeamResponse,
    pub join_code: String,
}

/// Join confirmation
#[derive(Debug, Serialize)]
pub struct JoinTeamResponse {
    pub message: String,
    pub team: TeamResponse,
}

/// Leave confirmation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTeamResponse {
    pub message: String,
    pub team_deleted: bool,
}

/// All teams with their timelines
#[derive(Debug, Serialize)]
pub struct TeamsListResponse {
    pub teams: Vec<TeamResponse>,
}
