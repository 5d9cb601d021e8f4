//! Challenge request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_FLAG_LENGTH;

/// Flag submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFlagRequest {
    #[validate(length(min = 1, max = MAX_FLAG_LENGTH))]
    pub flag: String,
}
