//! Comment entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::validation::{required_string, ValidationError};

/// Maximum number of characters in a comment.
pub const CONTENT_LIMIT: usize = 255;

/// Marker shown in place of a soft-deleted comment's content.
pub const DELETED_CONTENT_MARKER: &str = "**comment has been deleted**";

/// A validated comment creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    /// Validate a raw JSON payload into a `NewComment`.
    pub fn parse(payload: &Value) -> Result<Self, ValidationError> {
        let content = required_string(payload, "comment", "content", Some(CONTENT_LIMIT))?;

        Ok(Self { content })
    }
}

/// The slice of a comment returned right after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A comment as rendered inside a thread detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

impl CommentDetail {
    /// Build a comment detail from a storage row.
    ///
    /// When the tombstone flag is set the stored content is replaced with
    /// [`DELETED_CONTENT_MARKER`], so raw content of a deleted comment
    /// never leaves the repository.
    pub fn new(
        id: String,
        username: String,
        date: DateTime<Utc>,
        content: String,
        is_deleted: bool,
    ) -> Self {
        let content = if is_deleted {
            DELETED_CONTENT_MARKER.to_string()
        } else {
            content
        };

        Self {
            id,
            username,
            date,
            content,
            is_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_rejects_payload_without_content() {
        assert_eq!(
            NewComment::parse(&json!({})),
            Err(ValidationError::MissingProperty { entity: "comment" }),
        );
    }

    #[test]
    fn parse_treats_empty_content_as_missing() {
        assert_eq!(
            NewComment::parse(&json!({ "content": "" })),
            Err(ValidationError::MissingProperty { entity: "comment" }),
        );
    }

    #[test]
    fn parse_rejects_payload_with_wrong_data_type() {
        assert_eq!(
            NewComment::parse(&json!({ "content": 123 })),
            Err(ValidationError::WrongType { entity: "comment" }),
        );
    }

    #[test]
    fn parse_rejects_content_longer_than_limit() {
        let payload = json!({ "content": "c".repeat(CONTENT_LIMIT + 1) });

        assert_eq!(
            NewComment::parse(&payload),
            Err(ValidationError::CharacterLimit {
                entity: "comment",
                field: "content",
            }),
        );
    }

    #[test]
    fn parse_accepts_content_of_exactly_the_limit() {
        let payload = json!({ "content": "c".repeat(CONTENT_LIMIT) });

        let new_comment = NewComment::parse(&payload).expect("payload should be valid");
        assert_eq!(new_comment.content.chars().count(), CONTENT_LIMIT);
    }

    #[test]
    fn detail_keeps_content_of_live_comment() {
        let detail = CommentDetail::new(
            "comment-123".to_string(),
            "johndoe".to_string(),
            Utc::now(),
            "a spicy comment".to_string(),
            false,
        );

        assert_eq!(detail.content, "a spicy comment");
        assert!(!detail.is_deleted);
    }

    #[test]
    fn detail_redacts_content_of_deleted_comment() {
        let detail = CommentDetail::new(
            "comment-123".to_string(),
            "johndoe".to_string(),
            Utc::now(),
            "a spicy comment".to_string(),
            true,
        );

        assert_eq!(detail.content, DELETED_CONTENT_MARKER);
        assert!(detail.is_deleted);
    }
}
