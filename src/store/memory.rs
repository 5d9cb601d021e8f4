//! In-memory store for users, teams, and score histories
//!
//! Lock ordering, to be respected by every code path that takes more than
//! one lock: `UserEntry::team` (write) before `TeamEntry::scoring` before
//! `TeamEntry::members` / `UserEntry::scoring`. The accumulator never takes
//! `UserEntry::team`; membership changes never take `UserEntry::scoring`.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::constants::roles;
use crate::models::{ScoreEvent, TeamSnapshot, UserSnapshot};
use crate::utils::crypto::generate_join_code;

/// Append-only score history plus its derived running total.
///
/// `final_score` can only drift from the event sum if a mutation bypasses
/// [`ScoreBook::append`]; nothing else mutates the fields.
#[derive(Debug, Default)]
pub struct ScoreBook {
    events: Vec<ScoreEvent>,
    final_score: i64,
}

impl ScoreBook {
    /// Append one event and fold it into the running total
    pub fn append(&mut self, event: ScoreEvent) {
        self.final_score += event.points;
        self.events.push(event);
    }

    pub fn events(&self) -> &[ScoreEvent] {
        &self.events
    }

    pub fn final_score(&self) -> i64 {
        self.final_score
    }

    /// Timestamp of the newest event, if any
    pub fn last_time(&self) -> Option<DateTime<Utc>> {
        self.events.last().map(|e| e.time)
    }
}

/// A team and its mutable scoring state
#[derive(Debug)]
pub struct TeamEntry {
    pub id: Uuid,
    pub name: String,
    pub join_code: String,
    pub(crate) members: Mutex<HashSet<Uuid>>,
    pub(crate) scoring: Mutex<ScoreBook>,
}

impl TeamEntry {
    /// Lock and return the team's score book. This lock is the per-team
    /// serialization point for the accumulator's atomicity unit.
    pub fn score_book(&self) -> MutexGuard<'_, ScoreBook> {
        self.scoring.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Check membership. Caller must already hold the score book lock when
    /// the answer has to stay valid across a commit.
    pub fn has_member(&self, user_id: Uuid) -> bool {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&user_id)
    }

    /// Number of current members
    pub fn member_count(&self) -> usize {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Consistent point-in-time snapshot of identity, history and total
    pub fn snapshot(&self) -> TeamSnapshot {
        let book = self.score_book();
        TeamSnapshot {
            id: self.id,
            name: self.name.clone(),
            events: book.events().to_vec(),
            final_score: book.final_score(),
        }
    }
}

/// A user account and its mutable scoring state
#[derive(Debug)]
pub struct UserEntry {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    password_hash: String,
    pub(crate) team: RwLock<Option<Uuid>>,
    pub(crate) scoring: Mutex<ScoreBook>,
}

impl UserEntry {
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// The team the user currently belongs to, if any
    pub fn team_id(&self) -> Option<Uuid> {
        *self.team.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock and return the user's score book
    pub fn score_book(&self) -> MutexGuard<'_, ScoreBook> {
        self.scoring.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Consistent point-in-time snapshot
    pub fn snapshot(&self) -> UserSnapshot {
        let team_id = self.team_id();
        let book = self.score_book();
        UserSnapshot {
            id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
            team_id,
            events: book.events().to_vec(),
            final_score: book.final_score(),
        }
    }
}

/// Store-level errors, mapped to API errors by the service layer
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Team name already taken")]
    TeamNameTaken,

    #[error("Team not found")]
    TeamNotFound,

    #[error("User is already on a team")]
    AlreadyOnTeam,

    #[error("User is not on a team")]
    NotOnTeam,
}

/// Outcome of leaving a team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveOutcome {
    /// True when the emptied team owned no score history and was deleted
    pub team_deleted: bool,
}

/// Concurrent in-memory store for all users and teams.
///
/// Uniqueness of usernames, emails, team names, and join codes is enforced
/// with compare-and-insert on the secondary index maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, Arc<UserEntry>>,
    usernames: DashMap<String, Uuid>,
    emails: DashMap<String, Uuid>,
    teams: DashMap<Uuid, Arc<TeamEntry>>,
    team_names: DashMap<String, Uuid>,
    join_codes: DashMap<String, Uuid>,
    admin_seeded: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Create a user. The first user ever created becomes the admin.
    pub fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Arc<UserEntry>, StoreError> {
        let id = Uuid::new_v4();

        match self.usernames.entry(username.to_lowercase()) {
            Entry::Occupied(_) => return Err(StoreError::UsernameTaken),
            Entry::Vacant(slot) => {
                match self.emails.entry(email.to_lowercase()) {
                    Entry::Occupied(_) => return Err(StoreError::EmailTaken),
                    Entry::Vacant(email_slot) => {
                        email_slot.insert(id);
                    }
                }
                slot.insert(id);
            }
        }

        let role = if self.admin_seeded.swap(true, Ordering::SeqCst) {
            roles::PARTICIPANT
        } else {
            roles::ADMIN
        };

        let user = Arc::new(UserEntry {
            id,
            username: username.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            password_hash: password_hash.to_string(),
            team: RwLock::new(None),
            scoring: Mutex::new(ScoreBook::default()),
        });
        self.users.insert(id, Arc::clone(&user));

        info!(user_id = %id, username, role, "User created");
        Ok(user)
    }

    pub fn user(&self, id: Uuid) -> Option<Arc<UserEntry>> {
        self.users.get(&id).map(|e| Arc::clone(&e))
    }

    /// Look up a user by username or email (login identifier)
    pub fn user_by_identifier(&self, identifier: &str) -> Option<Arc<UserEntry>> {
        let key = identifier.to_lowercase();
        let id = self
            .usernames
            .get(&key)
            .map(|e| *e)
            .or_else(|| self.emails.get(&key).map(|e| *e))?;
        self.user(id)
    }

    // -------------------------------------------------------------------------
    // Teams and membership
    // -------------------------------------------------------------------------

    /// Create a team with `founder` as its first member.
    ///
    /// The join code is regenerated until unique, mirroring the usual
    /// insert-until-fresh loop for short random codes.
    pub fn create_team(
        &self,
        founder: &UserEntry,
        name: &str,
    ) -> Result<Arc<TeamEntry>, StoreError> {
        let mut slot = founder.team.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(StoreError::AlreadyOnTeam);
        }

        let id = Uuid::new_v4();
        match self.team_names.entry(name.to_lowercase()) {
            Entry::Occupied(_) => return Err(StoreError::TeamNameTaken),
            Entry::Vacant(name_slot) => {
                name_slot.insert(id);
            }
        }

        let join_code = loop {
            let code = generate_join_code();
            match self.join_codes.entry(code.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(code_slot) => {
                    code_slot.insert(id);
                    break code;
                }
            }
        };

        let team = Arc::new(TeamEntry {
            id,
            name: name.to_string(),
            join_code,
            members: Mutex::new(HashSet::from([founder.id])),
            scoring: Mutex::new(ScoreBook::default()),
        });
        self.teams.insert(id, Arc::clone(&team));
        *slot = Some(id);

        info!(team_id = %id, team_name = name, founder = %founder.id, "Team created");
        Ok(team)
    }

    pub fn team(&self, id: Uuid) -> Option<Arc<TeamEntry>> {
        self.teams.get(&id).map(|e| Arc::clone(&e))
    }

    pub fn team_by_join_code(&self, code: &str) -> Option<Arc<TeamEntry>> {
        let id = self.join_codes.get(code).map(|e| *e)?;
        self.team(id)
    }

    /// All current teams (unspecified order)
    pub fn teams(&self) -> Vec<Arc<TeamEntry>> {
        self.teams.iter().map(|e| Arc::clone(&e)).collect()
    }

    /// Add `user` to `team`
    pub fn join_team(&self, user: &UserEntry, team: &TeamEntry) -> Result<(), StoreError> {
        let mut slot = user.team.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(StoreError::AlreadyOnTeam);
        }

        let mut members = team
            .members
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // The team may have been emptied and deleted before we got here
        if !self.teams.contains_key(&team.id) {
            return Err(StoreError::TeamNotFound);
        }
        members.insert(user.id);
        *slot = Some(team.id);

        info!(team_id = %team.id, user_id = %user.id, "User joined team");
        Ok(())
    }

    /// Remove `user` from their current team. An emptied team is deleted
    /// only if it owns no score history; a team with history is kept.
    pub fn leave_team(&self, user: &UserEntry) -> Result<LeaveOutcome, StoreError> {
        let mut slot = user.team.write().unwrap_or_else(PoisonError::into_inner);
        let team_id = slot.ok_or(StoreError::NotOnTeam)?;
        let team = self.team(team_id).ok_or(StoreError::TeamNotFound)?;

        let book = team.scoring.lock().unwrap_or_else(PoisonError::into_inner);
        let mut members = team
            .members
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        members.remove(&user.id);
        *slot = None;

        let team_deleted = members.is_empty() && book.events().is_empty();
        if team_deleted {
            // Removed from the indexes before the member lock is released so
            // a concurrent join observes the deletion
            self.teams.remove(&team_id);
            self.team_names.remove(&team.name.to_lowercase());
            self.join_codes.remove(&team.join_code);
            info!(team_id = %team_id, "Empty team deleted");
        }

        info!(team_id = %team_id, user_id = %user.id, "User left team");
        Ok(LeaveOutcome { team_deleted })
    }
}
