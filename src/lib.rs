//! Flagstack - Capture-The-Flag Competition Backend
//!
//! This library provides the core functionality for the Flagstack platform,
//! a timed CTF competition backend where teams and users submit flags for
//! challenges and a scoreboard ranks teams.
//!
//! # Features
//!
//! - Flag submission with at-most-once-per-team/user acceptance
//! - Dual score ledgers (team and user) with timestamped history
//! - Deterministic, tie-broken team rankings
//! - Competition lifecycle with a lazily evaluated end time
//! - JWT-authenticated users organized into joinable teams
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Scoring**: The scoring and ranking engine (clock, validator, ledger,
//!   accumulator, ranking)
//! - **Store**: Concurrent in-process state
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod scoring;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
