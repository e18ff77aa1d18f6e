//! Thread entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::comments::CommentDetail;
use crate::domain::validation::{required_string, ValidationError};

/// Maximum number of characters in a thread title.
pub const TITLE_LIMIT: usize = 255;

/// A validated thread creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
}

impl NewThread {
    /// Validate a raw JSON payload into a `NewThread`.
    ///
    /// `title` and `body` must both be non-empty strings; `title` is
    /// limited to [`TITLE_LIMIT`] characters.
    pub fn parse(payload: &Value) -> Result<Self, ValidationError> {
        let title = required_string(payload, "thread", "title", Some(TITLE_LIMIT))?;
        let body = required_string(payload, "thread", "body", None)?;

        Ok(Self { title, body })
    }
}

/// The slice of a thread returned right after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// A thread as rendered on its detail page.
///
/// Repositories return this with `comments` empty; the thread-detail use
/// case attaches the comment list afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}
