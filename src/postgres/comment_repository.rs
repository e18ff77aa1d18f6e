//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::comments::{
    AddedComment, CommentDetail, CommentRepository, NewComment,
};
use crate::error::ApiError;

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(
        &self,
        thread_id: &str,
        new_comment: &NewComment,
        owner: &str,
    ) -> Result<AddedComment, ApiError> {
        let id = format!("comment-{}", Uuid::new_v4());
        let date = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, owner, date, content, thread_id, is_delete)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(owner)
        .bind(date)
        .bind(&new_comment.content)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedComment {
            id: row.get("id"),
            content: row.get("content"),
            owner: row.get("owner"),
        })
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentDetail>, ApiError> {
        let rows = sqlx::query(
            r#"
            SELECT comments.id, users.username, comments.date, comments.content, comments.is_delete
            FROM comments
            JOIN users ON users.id = comments.owner
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        // CommentDetail::new redacts deleted content, so raw content of a
        // deleted comment stays inside this repository.
        Ok(rows
            .into_iter()
            .map(|row| {
                CommentDetail::new(
                    row.get("id"),
                    row.get("username"),
                    row.get("date"),
                    row.get("content"),
                    row.get("is_delete"),
                )
            })
            .collect())
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<(), ApiError> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::not_found(
                "failed to delete comment, comment not found",
            ));
        }

        Ok(())
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), ApiError> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::not_found("comment not found"))?;

        let actual_owner: String = row.get("owner");
        if actual_owner != owner {
            return Err(ApiError::forbidden(
                "you are not allowed to access this resource",
            ));
        }

        Ok(())
    }
}
