//! Team management service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::TeamSnapshot,
    store::{MemoryStore, StoreError, TeamEntry, UserEntry},
};

/// Team service for business logic
pub struct TeamService;

impl TeamService {
    /// Create a team with the requesting user as founder
    pub fn create_team(
        store: &MemoryStore,
        user: &UserEntry,
        name: &str,
    ) -> AppResult<Arc<TeamEntry>> {
        store.create_team(user, name).map_err(|e| match e {
            StoreError::AlreadyOnTeam => {
                AppError::Validation("You are already on a team".to_string())
            }
            StoreError::TeamNameTaken => {
                AppError::AlreadyExists("Team name already taken".to_string())
            }
            other => AppError::Persistence(other.to_string()),
        })
    }

    /// Join a team by its join code
    pub fn join_team(
        store: &MemoryStore,
        user: &UserEntry,
        join_code: &str,
    ) -> AppResult<Arc<TeamEntry>> {
        let team = store
            .team_by_join_code(join_code)
            .ok_or_else(|| AppError::NotFound("No team with that join code".to_string()))?;

        store.join_team(user, &team).map_err(|e| match e {
            StoreError::AlreadyOnTeam => {
                AppError::Validation("You are already on a team".to_string())
            }
            StoreError::TeamNotFound => {
                AppError::NotFound("No team with that join code".to_string())
            }
            other => AppError::Persistence(other.to_string()),
        })?;

        Ok(team)
    }

    /// Leave the current team. Returns true if the emptied team was deleted.
    pub fn leave_team(store: &MemoryStore, user: &UserEntry) -> AppResult<bool> {
        let outcome = store.leave_team(user).map_err(|e| match e {
            StoreError::NotOnTeam => AppError::Validation("You are not on a team".to_string()),
            other => AppError::Persistence(other.to_string()),
        })?;
        Ok(outcome.team_deleted)
    }

    /// All teams with their full score timelines, in stable name order
    pub fn list_teams(store: &MemoryStore) -> Vec<TeamSnapshot> {
        let mut snapshots: Vec<TeamSnapshot> =
            store.teams().iter().map(|t| t.snapshot()).collect();
        snapshots.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        snapshots
    }

    /// One team's full score timeline
    pub fn get_team(store: &MemoryStore, id: Uuid) -> AppResult<TeamSnapshot> {
        store
            .team(id)
            .map(|t| t.snapshot())
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_by_code_and_list() {
        let store = MemoryStore::new();
        let alice = store.create_user("alice", "alice@example.com", "h").unwrap();
        let bob = store.create_user("bob", "bob@example.com", "h").unwrap();

        let team = TeamService::create_team(&store, &alice, "Alpha").unwrap();
        TeamService::join_team(&store, &bob, &team.join_code).unwrap();

        assert_eq!(bob.team_id(), Some(team.id));
        assert!(matches!(
            TeamService::join_team(&store, &bob, &team.join_code),
            Err(AppError::Validation(_))
        ));

        let teams = TeamService::list_teams(&store);
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Alpha");
    }

    #[test]
    fn test_bad_join_code_is_not_found() {
        let store = MemoryStore::new();
        let alice = store.create_user("alice", "alice@example.com", "h").unwrap();

        assert!(matches!(
            TeamService::join_team(&store, &alice, "NOPE1234"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_leave_deletes_empty_team() {
        let store = MemoryStore::new();
        let alice = store.create_user("alice", "alice@example.com", "h").unwrap();
        let team = TeamService::create_team(&store, &alice, "Alpha").unwrap();

        assert!(TeamService::leave_team(&store, &alice).unwrap());
        assert!(matches!(
            TeamService::get_team(&store, team.id),
            Err(AppError::NotFound(_))
        ));
    }
}
