//! Shared fixtures for the endpoint tests.
//!
//! The tests drive the real router (routes, middleware, handlers, use
//! cases) against the in-memory repositories in [`memory`].

#![allow(dead_code)]

pub mod memory;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum_test::TestServer;

use forumd::auth::sessions::create_token;
use forumd::auth::users::{RegisterUser, UserRepository};
use forumd::domain::comments::{CommentRepository, NewComment};
use forumd::domain::threads::{NewThread, ThreadRepository};
use forumd::routes::create_router;
use forumd::server::AppState;

use memory::InMemoryForum;

/// A seeded user with a valid access token.
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub token: String,
}

/// Spin up a test server over the in-memory store.
pub fn test_server() -> (TestServer, Arc<InMemoryForum>) {
    let store = Arc::new(InMemoryForum::default());
    let state = AppState::new(store.clone(), store.clone(), store.clone());
    let server = TestServer::new(create_router(state)).expect("test server should start");

    (server, store)
}

/// Seed a user directly through the repository and mint a token for it.
///
/// The stored password hash is a placeholder; login flows go through the
/// real endpoints instead.
pub async fn seed_user(store: &Arc<InMemoryForum>, username: &str) -> TestUser {
    let register = RegisterUser {
        username: username.to_string(),
        password: "secret".to_string(),
        fullname: "Test User".to_string(),
    };

    let added = store
        .add_user(&register, "not-a-real-hash")
        .await
        .expect("seeding a user should succeed");

    let token = create_token(&added.id, &added.username).expect("token should be created");

    TestUser {
        id: added.id,
        username: added.username,
        token,
    }
}

/// Seed a thread for `owner` and return its id.
pub async fn seed_thread(store: &Arc<InMemoryForum>, owner: &TestUser, title: &str) -> String {
    let new_thread = NewThread {
        title: title.to_string(),
        body: "a body".to_string(),
    };

    store
        .add_thread(&new_thread, &owner.id)
        .await
        .expect("seeding a thread should succeed")
        .id
}

/// Seed a comment under `thread_id` for `owner` and return its id.
pub async fn seed_comment(
    store: &Arc<InMemoryForum>,
    thread_id: &str,
    owner: &TestUser,
    content: &str,
) -> String {
    let new_comment = NewComment {
        content: content.to_string(),
    };

    store
        .add_comment(thread_id, &new_comment, &owner.id)
        .await
        .expect("seeding a comment should succeed")
        .id
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("header value should be valid")
}
