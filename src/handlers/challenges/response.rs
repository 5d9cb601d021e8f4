//! Challenge response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ScoreEvent, TeamSnapshot, UserSnapshot};
use crate::scoring::SubmissionOutcome;

/// A challenge as shown to participants. Flag material never appears here.
#[derive(Debug, Serialize)]
pub struct ChallengeSummary {
    pub id: Uuid,
    pub name: String,
    pub points: i64,
    pub category: String,
}

/// All challenges
#[derive(Debug, Serialize)]
pub struct ChallengesListResponse {
    pub challenges: Vec<ChallengeSummary>,
}

/// One `{time, points}` entry of a score timeline
#[derive(Debug, Serialize)]
pub struct ScorePoint {
    pub time: DateTime<Utc>,
    pub points: i64,
}

fn score_points(events: &[ScoreEvent]) -> Vec<ScorePoint> {
    events
        .iter()
        .map(|e| ScorePoint {
            time: e.time,
            points: e.points,
        })
        .collect()
}

/// The submitting user's team after a successful submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamView {
    pub id: Uuid,
    pub name: String,
    pub scores: Vec<ScorePoint>,
    pub final_score: i64,
}

impl From<TeamSnapshot> for TeamView {
    fn from(snapshot: TeamSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            scores: score_points(&snapshot.events),
            final_score: snapshot.final_score,
        }
    }
}

/// The submitting user after a successful submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub scores: Vec<ScorePoint>,
    pub final_score: i64,
}

impl From<UserSnapshot> for UserView {
    fn from(snapshot: UserSnapshot) -> Self {
        Self {
            id: snapshot.id,
            username: snapshot.username,
            scores: score_points(&snapshot.events),
            final_score: snapshot.final_score,
        }
    }
}

/// Flag submission result.
///
/// Rejections use this same shape with `success: false` and a 200 status;
/// only unknown challenges and auth failures surface as HTTP errors.
#[derive(Debug, Serialize)]
pub struct SubmitFlagResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserView>,
}

impl From<SubmissionOutcome> for SubmitFlagResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted { team, user } => Self {
                success: true,
                message: "Correct flag!".to_string(),
                team: Some(team.into()),
                user: Some(user.into()),
            },
            SubmissionOutcome::Rejected(reason) => Self {
                success: false,
                message: reason.as_code().to_string(),
                team: None,
                user: None,
            },
        }
    }
}
