//! Flag submission service
//!
//! Orchestrates the submission flow: competition clock -> flag validator ->
//! ledger/accumulator commit. Every rejection an attacker could probe with
//! (wrong flag, duplicate, inactive, teamless) is an expected outcome, not
//! an error.

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    constants::SUBMIT_RETRY_LIMIT,
    error::{AppError, AppResult},
    models::ChallengeSet,
    scoring::{
        check_flag, CommitError, CompetitionClock, FlagCheck, RejectReason, ScoreAccumulator,
        SubmissionLedger, SubmissionOutcome,
    },
    store::MemoryStore,
    utils::time::now_utc,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Handle one flag submission for `challenge_id` by `user_id`.
    ///
    /// Returns `Err` only for unknown challenges, unknown users, or genuine
    /// server faults; every competition-level refusal is a
    /// [`SubmissionOutcome::Rejected`].
    pub fn submit_flag(
        store: &MemoryStore,
        ledger: &SubmissionLedger,
        clock: &CompetitionClock,
        challenges: &ChallengeSet,
        user_id: Uuid,
        challenge_id: Uuid,
        flag: &str,
    ) -> AppResult<SubmissionOutcome> {
        let challenge = challenges
            .get(&challenge_id)
            .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;

        if !clock.is_active_at(now_utc()) {
            debug!(%challenge_id, %user_id, "Submission rejected: competition inactive");
            return Ok(SubmissionOutcome::Rejected(RejectReason::CompetitionInactive));
        }

        let user = store
            .user(user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if check_flag(challenge, flag) == FlagCheck::Incorrect {
            debug!(%challenge_id, %user_id, "Submission rejected: incorrect flag");
            return Ok(SubmissionOutcome::Rejected(RejectReason::IncorrectFlag));
        }

        // The user can leave or switch teams while we commit; re-resolve and
        // retry a bounded number of times before giving up
        for _ in 0..SUBMIT_RETRY_LIMIT {
            let Some(team_id) = user.team_id() else {
                debug!(%challenge_id, %user_id, "Submission rejected: user not on a team");
                return Ok(SubmissionOutcome::Rejected(RejectReason::NotOnTeam));
            };
            let Some(team) = store.team(team_id) else {
                continue;
            };

            match ScoreAccumulator::commit(ledger, &team, &user, challenge, now_utc()) {
                Ok((team_snapshot, user_snapshot)) => {
                    info!(
                        %challenge_id,
                        challenge_name = %challenge.name,
                        team_id = %team.id,
                        team_name = %team.name,
                        %user_id,
                        points = challenge.points,
                        team_score = team_snapshot.final_score,
                        "Flag accepted"
                    );
                    return Ok(SubmissionOutcome::Accepted {
                        team: team_snapshot,
                        user: user_snapshot,
                    });
                }
                Err(CommitError::Duplicate) => {
                    debug!(%challenge_id, %user_id, "Submission rejected: already solved");
                    return Ok(SubmissionOutcome::Rejected(RejectReason::AlreadySolved));
                }
                Err(CommitError::MembershipChanged) => continue,
            }
        }

        Err(AppError::ConcurrencyConflict)
    }
}
