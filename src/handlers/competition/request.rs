//! Competition request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Competition start request. Omitting `endsAt` starts an open-ended round.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCompetitionRequest {
    pub ends_at: Option<DateTime<Utc>>,
}
