//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod challenges;
pub mod competition;
pub mod health;
pub mod teams;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(competition::routes())
        .nest("/auth", auth::routes())
        .nest("/teams", teams::routes())
        .nest("/challenges", challenges::routes())
}
