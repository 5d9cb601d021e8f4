//! Competition lifecycle and scoreboard handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Competition routes (mounted at the API root, not nested)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rankings", get(handler::get_rankings))
        .route("/ctf-status", get(handler::get_status))
        .route("/ctf-start", post(handler::start_competition))
        .route("/ctf-stop", post(handler::stop_competition))
}
