//! Error-to-response conversion.
//!
//! Every [`ApiError`] renders as a JSON envelope: `{"status":"fail",
//! "message":…}` for client errors and `{"status":"error","message":…}`
//! for server errors, matching the success envelope produced by the
//! handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed with a server error");
        }

        let status_label = if status.is_server_error() {
            "error"
        } else {
            "fail"
        };

        let body = Json(json!({
            "status": status_label,
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}
