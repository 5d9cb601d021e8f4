//! Business logic services

pub mod auth_service;
pub mod challenge_service;
pub mod competition_service;
pub mod submission_service;
pub mod team_service;

pub use auth_service::AuthService;
pub use challenge_service::ChallengeService;
pub use competition_service::CompetitionService;
pub use submission_service::SubmissionService;
pub use team_service::TeamService;
