//! Router assembly.

use axum::http::StatusCode;
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the axum router with all routes and middleware configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    configure_api_routes(app_state.clone())
        .layer(TraceLayer::new_for_http())
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "status": "fail", "message": "route not found" })),
            )
        })
        .with_state(app_state)
}
