//! User entities and the user persistence contract.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::validation::{required_string, ValidationError};
use crate::error::ApiError;

/// Maximum number of characters in a username.
pub const USERNAME_LIMIT: usize = 50;

/// A user row as stored, including the bcrypt password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub fullname: String,
}

/// A validated registration payload.
///
/// The password here is still the plain text from the request; handlers
/// hash it before it reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    /// Validate a raw JSON payload into a `RegisterUser`.
    ///
    /// Usernames are limited to [`USERNAME_LIMIT`] characters and may only
    /// contain ASCII alphanumerics and underscores.
    pub fn parse(payload: &Value) -> Result<Self, ValidationError> {
        let username = required_string(payload, "user", "username", Some(USERNAME_LIMIT))?;
        let password = required_string(payload, "user", "password", None)?;
        let fullname = required_string(payload, "user", "fullname", None)?;

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ValidationError::RestrictedCharacter {
                entity: "user",
                field: "username",
            });
        }

        Ok(Self {
            username,
            password,
            fullname,
        })
    }
}

/// The slice of a user returned right after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a registration with its already-hashed password.
    async fn add_user(
        &self,
        register: &RegisterUser,
        password_hash: &str,
    ) -> Result<RegisteredUser, ApiError>;

    /// Look a user up by username, e.g. for login or availability checks.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;

    /// Look a user up by id, e.g. when verifying an access token.
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError>;
}
