//! Competition clock
//!
//! Tracks whether the competition is active and when it ends, and gates all
//! scoring operations. The end time is evaluated lazily: there is no timer
//! task, the clock simply reads as ended once `now >= ends_at` has been
//! observed.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{CompetitionPhase, CompetitionStatus};
use crate::utils::time::now_utc;

/// Process-wide competition lifecycle state.
///
/// Readers take a snapshot; `start`/`stop` are serialized against each other
/// by the write lock, and never block ongoing submissions beyond the activity
/// check itself.
#[derive(Debug, Default)]
pub struct CompetitionClock {
    state: RwLock<CompetitionStatus>,
}

impl CompetitionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current status, with the lazy end-time rule applied:
    /// an active competition whose end time has passed reports as ended.
    pub fn status(&self) -> CompetitionStatus {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Self::normalize(*state, now_utc())
    }

    /// Whether submissions are accepted at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.is_active_at(now)
    }

    /// Transition `inactive|ended -> active` and set the end time.
    ///
    /// Starting while already active updates the end time in place (an admin
    /// correction), still under the same serialized transition.
    pub fn start(&self, ends_at: Option<DateTime<Utc>>) -> CompetitionStatus {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.phase = CompetitionPhase::Active;
        state.ends_at = ends_at;
        info!(?ends_at, "Competition started");
        *state
    }

    /// Transition `active -> ended` immediately, independent of the end time.
    /// Idempotent when the competition is not active.
    pub fn stop(&self) -> CompetitionStatus {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.phase == CompetitionPhase::Active {
            state.phase = CompetitionPhase::Ended;
            info!("Competition stopped");
        }
        Self::normalize(*state, now_utc())
    }

    fn normalize(mut status: CompetitionStatus, now: DateTime<Utc>) -> CompetitionStatus {
        if status.phase == CompetitionPhase::Active
            && status.ends_at.is_some_and(|ends_at| now >= ends_at)
        {
            status.phase = CompetitionPhase::Ended;
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_starts_inactive() {
        let clock = CompetitionClock::new();
        assert_eq!(clock.status().phase, CompetitionPhase::Inactive);
        assert!(!clock.is_active_at(now_utc()));
    }

    #[test]
    fn test_start_and_stop() {
        let clock = CompetitionClock::new();
        let ends_at = now_utc() + Duration::hours(2);

        let started = clock.start(Some(ends_at));
        assert_eq!(started.phase, CompetitionPhase::Active);
        assert_eq!(started.ends_at, Some(ends_at));
        assert!(clock.is_active_at(now_utc()));

        let stopped = clock.stop();
        assert_eq!(stopped.phase, CompetitionPhase::Ended);
        assert!(!clock.is_active_at(now_utc()));
    }

    #[test]
    fn test_stop_is_idempotent_when_not_active() {
        let clock = CompetitionClock::new();
        assert_eq!(clock.stop().phase, CompetitionPhase::Inactive);
    }

    #[test]
    fn test_open_ended_when_no_end_time() {
        let clock = CompetitionClock::new();
        clock.start(None);
        assert!(clock.is_active_at(now_utc() + Duration::days(365)));
    }

    #[test]
    fn test_lazy_end_without_explicit_stop() {
        let clock = CompetitionClock::new();
        clock.start(Some(now_utc() - Duration::seconds(1)));

        // No stop() was called, yet the clock reads as ended
        assert_eq!(clock.status().phase, CompetitionPhase::Ended);
        assert!(!clock.is_active_at(now_utc()));
    }

    #[test]
    fn test_restart_after_end() {
        let clock = CompetitionClock::new();
        clock.start(Some(now_utc() - Duration::seconds(1)));
        assert_eq!(clock.status().phase, CompetitionPhase::Ended);

        clock.start(Some(now_utc() + Duration::hours(1)));
        assert_eq!(clock.status().phase, CompetitionPhase::Active);
    }
}
