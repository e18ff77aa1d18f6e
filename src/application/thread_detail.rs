//! Thread-detail use case.

use std::sync::Arc;

use crate::domain::comments::CommentRepository;
use crate::domain::threads::{ThreadDetail, ThreadRepository};
use crate::error::ApiError;

/// Composes a thread with its comment list.
pub struct ThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl ThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail, ApiError> {
        let mut thread = self.thread_repository.get_thread_by_id(thread_id).await?;

        thread.comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        Ok(thread)
    }
}
