//! Challenge handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{ChallengeService, SubmissionService},
    state::AppState,
};

use super::{
    request::SubmitFlagRequest,
    response::{ChallengesListResponse, SubmitFlagResponse},
};

/// List all challenges (public, no flag material)
pub async fn list_challenges(State(state): State<AppState>) -> Json<ChallengesListResponse> {
    Json(ChallengesListResponse {
        challenges: ChallengeService::list_challenges(state.challenges()),
    })
}

/// Submit a flag for a challenge
pub async fn submit_flag(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitFlagRequest>,
) -> AppResult<Json<SubmitFlagResponse>> {
    payload.validate()?;

    let outcome = SubmissionService::submit_flag(
        state.store(),
        state.ledger(),
        state.clock(),
        state.challenges(),
        auth_user.id,
        id,
        &payload.flag,
    )?;

    Ok(Json(outcome.into()))
}
