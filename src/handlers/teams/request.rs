//! Team request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_TEAM_NAME_LENGTH, MIN_TEAM_NAME_LENGTH};

/// Team creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = MIN_TEAM_NAME_LENGTH, max = MAX_TEAM_NAME_LENGTH))]
    pub name: String,
}

/// Join-by-code request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamRequest {
    #[validate(length(min = 1))]
    pub join_code: String,
}
