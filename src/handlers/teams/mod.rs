//! Team management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Team routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_teams))
        .route("/", post(handler::create_team))
        .route("/join", post(handler::join_team))
        .route("/leave", put(handler::leave_team))
        .route("/{id}", get(handler::get_team))
}
