//! Server initialization.
//!
//! Wiring order mirrors the layering: the connection pool feeds the
//! repositories, the repositories feed the use cases (inside
//! [`AppState::new`]), and the state feeds the router.

use std::sync::Arc;

use axum::Router;

use crate::auth::users::UserRepository;
use crate::domain::comments::CommentRepository;
use crate::domain::threads::ThreadRepository;
use crate::postgres::{PgCommentRepository, PgThreadRepository, PgUserRepository};
use crate::routes::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create the axum application backed by PostgreSQL.
pub async fn create_app() -> Result<Router<()>, Box<dyn std::error::Error>> {
    let pool = load_database().await?;

    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let threads: Arc<dyn ThreadRepository> = Arc::new(PgThreadRepository::new(pool.clone()));
    let comments: Arc<dyn CommentRepository> = Arc::new(PgCommentRepository::new(pool));

    let app_state = AppState::new(users, threads, comments);

    tracing::info!("repositories wired, router configured");

    Ok(create_router(app_state))
}
