//! Competition response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{CompetitionPhase, CompetitionStatus};
use crate::scoring::RankedTeam;

/// Competition status as seen by clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub active: bool,
    /// Always present: `null` while unset, so clients can rely on the key
    pub ends_at: Option<DateTime<Utc>>,
}

impl From<CompetitionStatus> for StatusResponse {
    fn from(status: CompetitionStatus) -> Self {
        Self {
            active: status.phase == CompetitionPhase::Active,
            ends_at: status.ends_at,
        }
    }
}

/// One scoreboard row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub rank: u32,
    pub team_id: Uuid,
    pub team_name: String,
    pub final_score: i64,
    #[serde(
        rename = "tieBreakerTimestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub tie_breaker: Option<DateTime<Utc>>,
}

impl From<RankedTeam> for RankingRow {
    fn from(ranked: RankedTeam) -> Self {
        Self {
            rank: ranked.rank,
            team_id: ranked.team_id,
            team_name: ranked.team_name,
            final_score: ranked.final_score,
            tie_breaker: ranked.tie_breaker,
        }
    }
}

/// Full scoreboard
#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub rankings: Vec<RankingRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::now_utc;

    #[test]
    fn test_status_serializes_null_end_time() {
        let response: StatusResponse = CompetitionStatus {
            phase: CompetitionPhase::Inactive,
            ends_at: None,
        }
        .into();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["active"], false);
        // The key must be present, carrying an explicit null
        assert!(json.as_object().unwrap().contains_key("endsAt"));
        assert!(json["endsAt"].is_null());
    }

    #[test]
    fn test_status_serializes_end_time_when_set() {
        let ends_at = now_utc();
        let response: StatusResponse = CompetitionStatus {
            phase: CompetitionPhase::Active,
            ends_at: Some(ends_at),
        }
        .into();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["active"], true);
        assert!(!json["endsAt"].is_null());
    }
}
