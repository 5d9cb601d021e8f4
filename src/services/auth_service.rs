//! Authentication service

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    store::{MemoryStore, StoreError, UserEntry},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub fn register(
        store: &MemoryStore,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<Arc<UserEntry>> {
        let password_hash = Self::hash_password(password)?;

        store
            .create_user(username, email, &password_hash)
            .map_err(|e| match e {
                StoreError::UsernameTaken => {
                    AppError::AlreadyExists("Username already taken".to_string())
                }
                StoreError::EmailTaken => {
                    AppError::AlreadyExists("Email already registered".to_string())
                }
                other => AppError::Persistence(other.to_string()),
            })
    }

    /// Login with username/email and password, yielding an access token
    pub fn login(
        store: &MemoryStore,
        config: &Config,
        identifier: &str,
        password: &str,
    ) -> AppResult<(Arc<UserEntry>, String, i64)> {
        let user = store
            .user_by_identifier(identifier)
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, user.password_hash())? {
            return Err(AppError::InvalidCredentials);
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        Ok((user, access_token, expires_in))
    }

    /// Generate a JWT access token for a user
    pub fn generate_access_token(user: &UserEntry, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_in = Duration::hours(config.jwt.expiry_hours).num_seconds();

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: (now + Duration::hours(config.jwt.expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )?;

        Ok((token, expires_in))
    }

    /// Verify and decode a JWT access token
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    /// Hash a password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))
    }

    /// Verify a password against its Argon2 hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChallengesConfig, JwtConfig, ServerConfig};

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                expiry_hours: 1,
            },
            challenges: ChallengesConfig {
                path: "challenges.json".into(),
            },
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = AuthService::hash_password("hunter2hunter2").unwrap();
        assert!(AuthService::verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_register_and_login() {
        let store = MemoryStore::new();
        let config = test_config();

        AuthService::register(&store, "alice", "alice@example.com", "Sup3rSecret!").unwrap();

        let (user, token, expires_in) =
            AuthService::login(&store, &config, "alice", "Sup3rSecret!").unwrap();
        assert_eq!(user.username, "alice");
        assert!(expires_in > 0);

        let claims = AuthService::verify_token(&token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_login_with_wrong_password_fails() {
        let store = MemoryStore::new();
        let config = test_config();

        AuthService::register(&store, "alice", "alice@example.com", "Sup3rSecret!").unwrap();

        assert!(matches!(
            AuthService::login(&store, &config, "alice", "nope"),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_token_rejects_wrong_secret() {
        let store = MemoryStore::new();
        let config = test_config();

        let user =
            AuthService::register(&store, "alice", "alice@example.com", "Sup3rSecret!").unwrap();
        let (token, _) = AuthService::generate_access_token(&user, &config).unwrap();

        assert!(AuthService::verify_token(&token, "other-secret").is_err());
    }
}
