//! Comment persistence contract.

use async_trait::async_trait;

use crate::domain::comments::{AddedComment, CommentDetail, NewComment};
use crate::error::ApiError;

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a validated comment under `thread_id` for `owner`.
    async fn add_comment(
        &self,
        thread_id: &str,
        new_comment: &NewComment,
        owner: &str,
    ) -> Result<AddedComment, ApiError>;

    /// List a thread's comments ordered by creation date ascending,
    /// joined with their authors' usernames. Deleted comments come back
    /// with redacted content.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentDetail>, ApiError>;

    /// Set the tombstone flag on a comment.
    ///
    /// Fails with a not-found error when the id is absent. Deleting an
    /// already-deleted comment succeeds and leaves the flag set.
    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<(), ApiError>;

    /// Check that `owner` owns the comment.
    ///
    /// Fails with a not-found error when the comment is absent and with an
    /// authorization error when the owner does not match.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), ApiError>;
}
