//! Add-comment use case.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::comments::{AddedComment, CommentRepository, NewComment};
use crate::domain::threads::ThreadRepository;
use crate::error::ApiError;

/// Persists a comment under an existing thread.
///
/// The thread-existence check runs before payload validation, so
/// commenting on an unknown thread reports not-found even when the
/// payload is also invalid.
pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(
        &self,
        payload: &Value,
        thread_id: &str,
        owner: &str,
    ) -> Result<AddedComment, ApiError> {
        self.thread_repository.get_thread_by_id(thread_id).await?;

        let new_comment = NewComment::parse(payload)?;

        self.comment_repository
            .add_comment(thread_id, &new_comment, owner)
            .await
    }
}
