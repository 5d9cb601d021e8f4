//! Team handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::TeamService,
    state::AppState,
};

use super::{
    request::{CreateTeamRequest, JoinTeamRequest},
    response::{
        CreateTeamResponse, JoinTeamResponse, LeaveTeamResponse, TeamResponse, TeamsListResponse,
    },
};

/// Create a new team with the caller as founder
pub async fn create_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<CreateTeamResponse>)> {
    payload.validate()?;

    let user = state
        .store()
        .user(auth_user.id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let team = TeamService::create_team(state.store(), &user, payload.name.trim())?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            join_code: team.join_code.clone(),
            team: team.snapshot().into(),
        }),
    ))
}

/// Join an existing team by join code
pub async fn join_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<JoinTeamRequest>,
) -> AppResult<Json<JoinTeamResponse>> {
    payload.validate()?;

    let user = state
        .store()
        .user(auth_user.id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let team = TeamService::join_team(state.store(), &user, &payload.join_code)?;

    Ok(Json(JoinTeamResponse {
        message: format!("Joined team {}", team.name),
        team: team.snapshot().into(),
    }))
}

/// Leave the current team
pub async fn leave_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<LeaveTeamResponse>> {
    let user = state
        .store()
        .user(auth_user.id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let team_deleted = TeamService::leave_team(state.store(), &user)?;

    Ok(Json(LeaveTeamResponse {
        message: "Left team".to_string(),
        team_deleted,
    }))
}

/// List all teams with historical scores
pub async fn list_teams(State(state): State<AppState>) -> Json<TeamsListResponse> {
    let teams = TeamService::list_teams(state.store())
        .into_iter()
        .map(TeamResponse::from)
        .collect();

    Json(TeamsListResponse { teams })
}

/// Get one team's full score timeline
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TeamResponse>> {
    let snapshot = TeamService::get_team(state.store(), id)?;
    Ok(Json(snapshot.into()))
}
