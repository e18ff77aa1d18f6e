//! Comment HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// `POST /threads/{thread_id}/comments`: comment on an existing thread.
pub async fn post_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(thread_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let added_comment = state
        .add_comment
        .execute(&payload, &thread_id, &user.user_id)
        .await?;

    tracing::info!(comment_id = %added_comment.id, thread_id = %thread_id, "comment created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedComment": added_comment },
        })),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}`: soft-delete an
/// owned comment. The thread id only scopes the route; ownership is
/// checked against the comment itself.
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((_thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    state
        .delete_comment
        .execute(&comment_id, &user.user_id)
        .await?;

    tracing::info!(comment_id = %comment_id, owner = %user.user_id, "comment deleted");

    Ok(Json(json!({ "status": "success" })))
}
