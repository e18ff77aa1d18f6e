//! Delete-comment use case.

use std::sync::Arc;

use crate::domain::comments::CommentRepository;
use crate::error::ApiError;

/// Soft-deletes a comment after checking ownership.
///
/// The ownership check runs first and short-circuits the delete: an
/// unknown comment reports not-found, a foreign comment reports an
/// authorization error and leaves the tombstone untouched.
pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    pub async fn execute(&self, comment_id: &str, owner: &str) -> Result<(), ApiError> {
        self.comment_repository
            .verify_comment_owner(comment_id, owner)
            .await?;

        self.comment_repository.delete_comment_by_id(comment_id).await
    }
}
