//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// TEAMS
// =============================================================================

/// Minimum team name length
pub const MIN_TEAM_NAME_LENGTH: u64 = 3;

/// Maximum team name length
pub const MAX_TEAM_NAME_LENGTH: u64 = 64;

/// Length of generated team join codes
pub const JOIN_CODE_LENGTH: usize = 8;

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// Maximum accepted flag length in characters
pub const MAX_FLAG_LENGTH: u64 = 256;

/// Bounded number of internal retries when a submission races a
/// team-membership change
pub const SUBMIT_RETRY_LIMIT: u32 = 3;

/// Submission rejection reason codes surfaced to clients
pub mod reasons {
    pub const INCORRECT_FLAG: &str = "incorrect_flag";
    pub const ALREADY_SOLVED: &str = "already_solved";
    pub const COMPETITION_INACTIVE: &str = "competition_inactive";
    pub const NOT_ON_TEAM: &str = "not_on_team";
}

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const PARTICIPANT: &str = "participant";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
