//! Authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    services::AuthService,
    state::AppState,
};

/// Authenticated user extracted from a `Bearer` JWT.
///
/// Handlers that take this extractor reject unauthenticated requests with
/// 401 before any business logic runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Reject non-admin callers on admin-gated routes
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Administrator access required".to_string(),
            ))
        }
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Auth failed: Authorization header is not a Bearer token");
            AppError::Unauthorized
        })?;

        let claims = AuthService::verify_token(token, &state.config().jwt.secret)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            debug!(sub = %claims.sub, "Auth failed: invalid user id in token");
            AppError::InvalidToken
        })?;

        Ok(AuthenticatedUser {
            id: user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_admin() {
        let admin = AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "root".to_string(),
            role: roles::ADMIN.to_string(),
        };
        let player = AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            role: roles::PARTICIPANT.to_string(),
        };

        assert!(admin.require_admin().is_ok());
        assert!(matches!(
            player.require_admin(),
            Err(AppError::Forbidden(_))
        ));
    }
}
