//! Competition lifecycle state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Competition lifecycle phases: `inactive -> active -> ended`, with
/// `ended -> active` allowed for a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionPhase {
    Inactive,
    Active,
    Ended,
}

/// Snapshot of the competition state at a point in time.
///
/// `ends_at == None` means open-ended while active. Once `now >= ends_at`
/// has been observed the competition reads as ended even if no explicit stop
/// was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionStatus {
    pub phase: CompetitionPhase,
    pub ends_at: Option<DateTime<Utc>>,
}

impl CompetitionStatus {
    /// Whether submissions are accepted at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.phase == CompetitionPhase::Active
            && self.ends_at.is_none_or(|ends_at| now < ends_at)
    }
}

impl Default for CompetitionStatus {
    fn default() -> Self {
        Self {
            phase: CompetitionPhase::Inactive,
            ends_at: None,
        }
    }
}
