//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod challenge;
pub mod competition;
pub mod score;
pub mod team;
pub mod user;

pub use challenge::*;
pub use competition::*;
pub use score::*;
pub use team::*;
pub use user::*;
