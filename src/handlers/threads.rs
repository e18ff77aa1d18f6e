//! Thread HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// `POST /threads`: create a thread owned by the authenticated user.
pub async fn post_thread(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let added_thread = state.add_thread.execute(&payload, &user.user_id).await?;

    tracing::info!(thread_id = %added_thread.id, owner = %added_thread.owner, "thread created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedThread": added_thread },
        })),
    ))
}

/// `GET /threads/{thread_id}`: a thread with its comments attached.
pub async fn get_thread(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(thread_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let thread = state.thread_detail.execute(&thread_id).await?;

    Ok(Json(json!({
        "status": "success",
        "data": { "thread": thread },
    })))
}
