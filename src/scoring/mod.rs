//! The scoring and ranking engine
//!
//! Control flow for a submission: [`clock`] (reject if inactive) ->
//! [`validator`] (reject if wrong) -> [`ledger`] (reject if duplicate) ->
//! [`accumulator`] (commit). [`ranking`] reads committed state independently.

pub mod accumulator;
pub mod clock;
pub mod ledger;
pub mod ranking;
pub mod validator;

pub use accumulator::{CommitError, ScoreAccumulator};
pub use clock::CompetitionClock;
pub use ledger::{LedgerDecision, SubmissionLedger};
pub use ranking::{rank_teams, RankedTeam};
pub use validator::{check_flag, FlagCheck};

use crate::constants::reasons;
use crate::models::{TeamSnapshot, UserSnapshot};

/// Outcome of a flag submission.
///
/// Rejections are expected results of the submission flow, not errors; they
/// serialize as `{success: false, message}` with a 200 status.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Accepted {
        team: TeamSnapshot,
        user: UserSnapshot,
    },
    Rejected(RejectReason),
}

/// Stable, machine-readable reasons for rejecting a submission.
///
/// Duplicate detection collapses team- and user-level duplicates into
/// `AlreadySolved`: the response must not reveal which member of a team
/// solved a challenge, only that the solve is already banked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    CompetitionInactive,
    IncorrectFlag,
    AlreadySolved,
    NotOnTeam,
}

impl RejectReason {
    /// The reason code surfaced in the response `message` field
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::CompetitionInactive => reasons::COMPETITION_INACTIVE,
            Self::IncorrectFlag => reasons::INCORRECT_FLAG,
            Self::AlreadySolved => reasons::ALREADY_SOLVED,
            Self::NotOnTeam => reasons::NOT_ON_TEAM,
        }
    }
}
