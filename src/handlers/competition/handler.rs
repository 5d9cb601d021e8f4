//! Competition handler implementations

use axum::{extract::State, Json};
use tracing::info;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::CompetitionService,
    state::AppState,
};

use super::{
    request::StartCompetitionRequest,
    response::{RankingsResponse, StatusResponse},
};

/// Get the current scoreboard
pub async fn get_rankings(State(state): State<AppState>) -> Json<RankingsResponse> {
    let rankings = CompetitionService::rankings(state.store())
        .into_iter()
        .map(Into::into)
        .collect();

    Json(RankingsResponse { rankings })
}

/// Get the current competition status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(CompetitionService::status(state.clock()).into())
}

/// Start (or restart) the competition. Admin only; the body is optional
/// and defaults to an open-ended round.
pub async fn start_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    payload: Option<Json<StartCompetitionRequest>>,
) -> AppResult<Json<StatusResponse>> {
    auth_user.require_admin()?;

    let ends_at = payload.map(|Json(p)| p.ends_at).unwrap_or_default();
    let status = CompetitionService::start(state.clock(), ends_at);
    info!(admin = %auth_user.username, ends_at = ?status.ends_at, "Competition started");

    Ok(Json(status.into()))
}

/// Stop the competition immediately. Admin only, idempotent.
pub async fn stop_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<StatusResponse>> {
    auth_user.require_admin()?;

    let status = CompetitionService::stop(state.clock());
    info!(admin = %auth_user.username, "Competition stopped");

    Ok(Json(status.into()))
}
