//! Application state.

use std::sync::Arc;

use crate::application::{
    AddCommentUseCase, AddThreadUseCase, DeleteCommentUseCase, ThreadDetailUseCase,
};
use crate::auth::users::UserRepository;
use crate::domain::comments::CommentRepository;
use crate::domain::threads::ThreadRepository;

/// State shared across all request handlers.
///
/// Holds the wired use cases plus the user repository (used directly by
/// the account handlers and the auth middleware). Everything is behind an
/// `Arc`, so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub add_thread: Arc<AddThreadUseCase>,
    pub add_comment: Arc<AddCommentUseCase>,
    pub delete_comment: Arc<DeleteCommentUseCase>,
    pub thread_detail: Arc<ThreadDetailUseCase>,
}

impl AppState {
    /// Wire the use cases against a set of repositories.
    ///
    /// This is the single injection point of the service: production code
    /// passes the PostgreSQL repositories, tests pass in-memory ones.
    pub fn new(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            users,
            add_thread: Arc::new(AddThreadUseCase::new(threads.clone())),
            add_comment: Arc::new(AddCommentUseCase::new(threads.clone(), comments.clone())),
            delete_comment: Arc::new(DeleteCommentUseCase::new(comments.clone())),
            thread_detail: Arc::new(ThreadDetailUseCase::new(threads, comments)),
        }
    }
}
