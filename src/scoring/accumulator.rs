//! Score accumulator
//!
//! Commits an accepted solve: one ledger insert, one team score event, one
//! user score event, and both running totals, as a single atomic unit. The
//! team's score book lock is the serialization point, so all commits for one
//! team (and, since a user submits through exactly one team, for each of its
//! members) are mutually exclusive. Commits for different teams run in
//! parallel.

use chrono::{DateTime, Utc};

use crate::models::{Challenge, ScoreEvent, TeamSnapshot, UserSnapshot};
use crate::scoring::ledger::{LedgerDecision, SubmissionLedger};
use crate::store::{TeamEntry, UserEntry};

/// Why a commit did not go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitError {
    /// The ledger already holds a record for this team or user
    Duplicate,
    /// The user left the team between resolution and commit; the caller may
    /// re-resolve the membership and retry
    MembershipChanged,
}

/// Applies point deltas and appends score history for accepted solves
pub struct ScoreAccumulator;

impl ScoreAccumulator {
    /// Commit a correct submission.
    ///
    /// Both score events carry the same timestamp and challenge id. The
    /// timestamp is clamped to never precede the newest event of either
    /// history, keeping each history monotonic even when commits for
    /// different challenges race on wall-clock edges.
    ///
    /// Returns fresh team and user snapshots taken before the locks are
    /// released, so the response reflects exactly the committed state.
    pub fn commit(
        ledger: &SubmissionLedger,
        team: &TeamEntry,
        user: &UserEntry,
        challenge: &Challenge,
        now: DateTime<Utc>,
    ) -> Result<(TeamSnapshot, UserSnapshot), CommitError> {
        let mut team_book = team.score_book();

        // Membership can change while we were resolving the team; re-check
        // under the commit lock so no event lands on a team the user left
        if !team.has_member(user.id) {
            return Err(CommitError::MembershipChanged);
        }

        let mut user_book = user.score_book();

        let mut time = now;
        if let Some(last) = team_book.last_time() {
            time = time.max(last);
        }
        if let Some(last) = user_book.last_time() {
            time = time.max(last);
        }

        match ledger.try_record(challenge.id, team.id, user.id, time) {
            LedgerDecision::Accepted => {}
            LedgerDecision::DuplicateTeam | LedgerDecision::DuplicateUser => {
                return Err(CommitError::Duplicate);
            }
        }

        let event = ScoreEvent {
            time,
            points: challenge.points,
            challenge_id: challenge.id,
        };
        team_book.append(event);
        user_book.append(event);

        let team_snapshot = TeamSnapshot {
            id: team.id,
            name: team.name.clone(),
            events: team_book.events().to_vec(),
            final_score: team_book.final_score(),
        };
        let user_snapshot = UserSnapshot {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            team_id: Some(team.id),
            events: user_book.events().to_vec(),
            final_score: user_book.final_score(),
        };

        Ok((team_snapshot, user_snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::utils::time::now_utc;
    use uuid::Uuid;

    fn fixture() -> (MemoryStore, SubmissionLedger, Challenge) {
        let store = MemoryStore::new();
        let ledger = SubmissionLedger::new();
        let challenge = Challenge::new(Uuid::new_v4(), "web100", 100, "web", &["CTF{x}"]);
        (store, ledger, challenge)
    }

    #[test]
    fn test_commit_appends_paired_events() {
        let (store, ledger, challenge) = fixture();
        let user = store.create_user("alice", "alice@example.com", "h").unwrap();
        let team = store.create_team(&user, "Alpha").unwrap();

        let (team_snap, user_snap) =
            ScoreAccumulator::commit(&ledger, &team, &user, &challenge, now_utc()).unwrap();

        assert_eq!(team_snap.final_score, 100);
        assert_eq!(user_snap.final_score, 100);
        assert_eq!(team_snap.events.len(), 1);
        assert_eq!(user_snap.events.len(), 1);

        // Exactly one event pair, sharing timestamp and challenge id
        assert_eq!(team_snap.events[0], user_snap.events[0]);
        assert_eq!(team_snap.events[0].challenge_id, challenge.id);
    }

    #[test]
    fn test_second_commit_is_duplicate() {
        let (store, ledger, challenge) = fixture();
        let user = store.create_user("alice", "alice@example.com", "h").unwrap();
        let team = store.create_team(&user, "Alpha").unwrap();

        ScoreAccumulator::commit(&ledger, &team, &user, &challenge, now_utc()).unwrap();
        let second = ScoreAccumulator::commit(&ledger, &team, &user, &challenge, now_utc());

        assert_eq!(second.unwrap_err(), CommitError::Duplicate);
        assert_eq!(team.snapshot().final_score, 100);
        assert_eq!(team.snapshot().events.len(), 1);
    }

    #[test]
    fn test_commit_rejected_after_member_left() {
        let (store, ledger, challenge) = fixture();
        let user = store.create_user("alice", "alice@example.com", "h").unwrap();
        let bob = store.create_user("bob", "bob@example.com", "h").unwrap();
        let team = store.create_team(&user, "Alpha").unwrap();
        store.join_team(&bob, &team).unwrap();
        store.leave_team(&bob).unwrap();

        let result = ScoreAccumulator::commit(&ledger, &team, &bob, &challenge, now_utc());
        assert_eq!(result.unwrap_err(), CommitError::MembershipChanged);
        assert_eq!(team.snapshot().final_score, 0);
        assert!(!ledger.team_has_solved(challenge.id, team.id));
    }

    #[test]
    fn test_history_stays_monotonic_with_skewed_clock() {
        let (store, ledger, _) = fixture();
        let user = store.create_user("alice", "alice@example.com", "h").unwrap();
        let team = store.create_team(&user, "Alpha").unwrap();

        let c1 = Challenge::new(Uuid::new_v4(), "a", 10, "misc", &["x"]);
        let c2 = Challenge::new(Uuid::new_v4(), "b", 20, "misc", &["y"]);

        let later = now_utc();
        let earlier = later - chrono::Duration::seconds(30);

        ScoreAccumulator::commit(&ledger, &team, &user, &c1, later).unwrap();
        // A commit arriving with an older wall-clock reading is clamped
        let (snap, _) = ScoreAccumulator::commit(&ledger, &team, &user, &c2, earlier).unwrap();

        assert!(snap.events[1].time >= snap.events[0].time);
    }
}
