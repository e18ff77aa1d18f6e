//! Registration handler for `POST /users`.
//!
//! Validates the payload, checks username availability, hashes the
//! password with bcrypt, and persists the account. The password hash
//! never appears in a response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bcrypt::{hash, DEFAULT_COST};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::server::state::AppState;

use super::super::users::RegisterUser;

/// Register a new user.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let register = RegisterUser::parse(&payload)?;

    if state
        .users
        .get_user_by_username(&register.username)
        .await?
        .is_some()
    {
        return Err(ApiError::bad_request("username is not available"));
    }

    let password_hash = hash(&register.password, DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("failed to hash password: {e}")))?;

    let added_user = state.users.add_user(&register, &password_hash).await?;

    tracing::info!(username = %added_user.username, "registered new user");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedUser": added_user },
        })),
    ))
}
