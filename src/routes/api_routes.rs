//! API route configuration.
//!
//! # Routes
//!
//! ## Accounts (public)
//! - `POST /users` - register
//! - `POST /authentications` - login, returns an access token
//!
//! ## Forum (bearer token required)
//! - `POST /threads` - create a thread
//! - `GET /threads/{thread_id}` - thread detail with comments
//! - `POST /threads/{thread_id}/comments` - comment on a thread
//! - `DELETE /threads/{thread_id}/comments/{comment_id}` - soft-delete a comment

use axum::routing::{delete, get, post};
use axum::{middleware, Router};

use crate::auth::handlers::{login, register};
use crate::handlers::{delete_comment, get_thread, post_comment, post_thread};
use crate::middleware::auth_middleware;
use crate::server::state::AppState;

/// Build the API routes against the given state.
///
/// The forum routes carry the auth middleware as a route layer, so an
/// unauthenticated request is rejected before any handler runs. The
/// account routes stay public.
pub fn configure_api_routes(app_state: AppState) -> Router<AppState> {
    let forum_routes = Router::new()
        .route("/threads", post(post_thread))
        .route("/threads/{thread_id}", get(get_thread))
        .route("/threads/{thread_id}/comments", post(post_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    let account_routes = Router::new()
        .route("/users", post(register))
        .route("/authentications", post(login));

    forum_routes.merge(account_routes)
}
