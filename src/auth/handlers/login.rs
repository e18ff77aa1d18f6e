//! Login handler for `POST /authentications`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bcrypt::verify;
use serde_json::{json, Value};

use crate::domain::validation::required_string;
use crate::error::ApiError;
use crate::server::state::AppState;

use super::super::sessions::create_token;

/// Authenticate a user and issue an access token.
///
/// An unknown username and a wrong password report the same 401 so the
/// response does not reveal which part was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let username = required_string(&payload, "authentication", "username", None)?;
    let password = required_string(&payload, "authentication", "password", None)?;

    let user = state
        .users
        .get_user_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("the credentials you provided are incorrect"))?;

    let password_matches = verify(&password, &user.password)
        .map_err(|e| ApiError::internal(format!("failed to verify password: {e}")))?;

    if !password_matches {
        return Err(ApiError::unauthenticated(
            "the credentials you provided are incorrect",
        ));
    }

    let access_token = create_token(&user.id, &user.username)
        .map_err(|e| ApiError::internal(format!("failed to create access token: {e}")))?;

    tracing::info!(username = %user.username, "user logged in");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "accessToken": access_token },
        })),
    ))
}
