//! Competition lifecycle and scoreboard service

use chrono::{DateTime, Utc};

use crate::{
    models::CompetitionStatus,
    scoring::{rank_teams, CompetitionClock, RankedTeam},
    store::MemoryStore,
};

/// Competition service for business logic
pub struct CompetitionService;

impl CompetitionService {
    /// Current competition status (lazy end-time rule applied)
    pub fn status(clock: &CompetitionClock) -> CompetitionStatus {
        clock.status()
    }

    /// Start (or restart) the competition
    pub fn start(clock: &CompetitionClock, ends_at: Option<DateTime<Utc>>) -> CompetitionStatus {
        clock.start(ends_at)
    }

    /// Stop the competition immediately
    pub fn stop(clock: &CompetitionClock) -> CompetitionStatus {
        clock.stop()
    }

    /// Compute the scoreboard from current committed state.
    ///
    /// Recomputed in full on each call; ranking reads are infrequent
    /// relative to submissions at CTF scale.
    pub fn rankings(store: &MemoryStore) -> Vec<RankedTeam> {
        rank_teams(store.teams().iter().map(|t| t.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompetitionPhase;
    use crate::models::ScoreEvent;
    use crate::utils::time::now_utc;
    use uuid::Uuid;

    #[test]
    fn test_lifecycle_via_service() {
        let clock = CompetitionClock::new();
        assert_eq!(
            CompetitionService::status(&clock).phase,
            CompetitionPhase::Inactive
        );

        let ends_at = now_utc() + chrono::Duration::hours(1);
        assert_eq!(
            CompetitionService::start(&clock, Some(ends_at)).phase,
            CompetitionPhase::Active
        );
        assert_eq!(
            CompetitionService::stop(&clock).phase,
            CompetitionPhase::Ended
        );
    }

    #[test]
    fn test_rankings_read_committed_state() {
        let store = MemoryStore::new();
        let alice = store.create_user("alice", "alice@example.com", "h").unwrap();
        let bob = store.create_user("bob", "bob@example.com", "h").unwrap();
        let alpha = store.create_team(&alice, "Alpha").unwrap();
        let beta = store.create_team(&bob, "Beta").unwrap();

        let challenge_id = Uuid::new_v4();
        let early = now_utc() - chrono::Duration::minutes(30);
        let late = now_utc();

        beta.score_book().append(ScoreEvent {
            time: early,
            points: 100,
            challenge_id,
        });
        alpha.score_book().append(ScoreEvent {
            time: late,
            points: 100,
            challenge_id,
        });

        // Equal scores: Beta reached 100 first and ranks higher
        let rankings = CompetitionService::rankings(&store);
        assert_eq!(rankings[0].team_name, "Beta");
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].team_name, "Alpha");
        assert_eq!(rankings[1].rank, 2);
    }
}
