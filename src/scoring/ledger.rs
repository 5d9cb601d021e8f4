//! Submission ledger
//!
//! Enforces at-most-one accepted submission per (challenge, team) and per
//! (challenge, user). The ledger is the duplicate-prevention record store:
//! the existence of a [`SubmissionRecord`] for a key is the sole source of
//! truth for duplicate detection.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::SubmissionRecord;

/// Composite key for an accepted solve: (challenge, team-or-user)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SolveKey {
    challenge_id: Uuid,
    entity_id: Uuid,
}

/// Decision of the ledger's atomic insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerDecision {
    Accepted,
    DuplicateTeam,
    DuplicateUser,
}

/// Record store for accepted submissions, with compare-and-insert semantics
/// on the (challenge, team) composite key.
#[derive(Debug, Default)]
pub struct SubmissionLedger {
    team_solves: DashMap<SolveKey, SubmissionRecord>,
    user_solves: DashMap<SolveKey, SubmissionRecord>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically record an accepted submission, or report the duplicate.
    ///
    /// The vacant entry on the (challenge, team) key holds that key's shard
    /// write-locked for the whole check-and-insert, so two racing submissions
    /// for the same pair resolve to exactly one `Accepted` and one
    /// `DuplicateTeam`, never two of either. The user-level check happens
    /// while that lock is held; a user submits through exactly one team, so
    /// the user key cannot be inserted from anywhere else concurrently.
    pub fn try_record(
        &self,
        challenge_id: Uuid,
        team_id: Uuid,
        user_id: Uuid,
        time: DateTime<Utc>,
    ) -> LedgerDecision {
        let team_key = SolveKey {
            challenge_id,
            entity_id: team_id,
        };
        let user_key = SolveKey {
            challenge_id,
            entity_id: user_id,
        };

        match self.team_solves.entry(team_key) {
            Entry::Occupied(_) => LedgerDecision::DuplicateTeam,
            Entry::Vacant(slot) => {
                if self.user_solves.contains_key(&user_key) {
                    return LedgerDecision::DuplicateUser;
                }

                let record = SubmissionRecord {
                    challenge_id,
                    team_id,
                    user_id,
                    time,
                };
                self.user_solves.insert(user_key, record);
                slot.insert(record);
                LedgerDecision::Accepted
            }
        }
    }

    /// Whether a team already has an accepted submission for a challenge
    pub fn team_has_solved(&self, challenge_id: Uuid, team_id: Uuid) -> bool {
        self.team_solves.contains_key(&SolveKey {
            challenge_id,
            entity_id: team_id,
        })
    }

    /// Whether a user already has an accepted submission for a challenge
    pub fn user_has_solved(&self, challenge_id: Uuid, user_id: Uuid) -> bool {
        self.user_solves.contains_key(&SolveKey {
            challenge_id,
            entity_id: user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::now_utc;

    #[test]
    fn test_first_submission_accepted_second_duplicate() {
        let ledger = SubmissionLedger::new();
        let (c, t, u) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(
            ledger.try_record(c, t, u, now_utc()),
            LedgerDecision::Accepted
        );
        assert_eq!(
            ledger.try_record(c, t, u, now_utc()),
            LedgerDecision::DuplicateTeam
        );
        assert!(ledger.team_has_solved(c, t));
        assert!(ledger.user_has_solved(c, u));
    }

    #[test]
    fn test_same_team_different_user_is_team_duplicate() {
        let ledger = SubmissionLedger::new();
        let (c, t) = (Uuid::new_v4(), Uuid::new_v4());
        let (u1, u2) = (Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(
            ledger.try_record(c, t, u1, now_utc()),
            LedgerDecision::Accepted
        );
        assert_eq!(
            ledger.try_record(c, t, u2, now_utc()),
            LedgerDecision::DuplicateTeam
        );
        assert!(!ledger.user_has_solved(c, u2));
    }

    #[test]
    fn test_same_user_different_team_is_user_duplicate() {
        let ledger = SubmissionLedger::new();
        let (c, u) = (Uuid::new_v4(), Uuid::new_v4());
        let (t1, t2) = (Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(
            ledger.try_record(c, t1, u, now_utc()),
            LedgerDecision::Accepted
        );
        assert_eq!(
            ledger.try_record(c, t2, u, now_utc()),
            LedgerDecision::DuplicateUser
        );
        assert!(!ledger.team_has_solved(c, t2));
    }

    #[test]
    fn test_different_challenges_are_independent() {
        let ledger = SubmissionLedger::new();
        let (c1, c2) = (Uuid::new_v4(), Uuid::new_v4());
        let (t, u) = (Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(
            ledger.try_record(c1, t, u, now_utc()),
            LedgerDecision::Accepted
        );
        assert_eq!(
            ledger.try_record(c2, t, u, now_utc()),
            LedgerDecision::Accepted
        );
    }

    #[test]
    fn test_racing_submissions_accept_exactly_one() {
        use std::sync::Arc;

        let ledger = Arc::new(SubmissionLedger::new());
        let (c, t, u) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || ledger.try_record(c, t, u, now_utc()))
            })
            .collect();

        let decisions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let accepted = decisions
            .iter()
            .filter(|d| **d == LedgerDecision::Accepted)
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(decisions.len() - accepted, 15);
    }
}
