//! PostgreSQL implementation of the thread repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::threads::{AddedThread, NewThread, ThreadDetail, ThreadRepository};
use crate::error::ApiError;

pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(
        &self,
        new_thread: &NewThread,
        owner: &str,
    ) -> Result<AddedThread, ApiError> {
        let id = format!("thread-{}", Uuid::new_v4());
        let date = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO threads (id, title, body, owner, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(owner)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedThread {
            id: row.get("id"),
            title: row.get("title"),
            owner: row.get("owner"),
        })
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail, ApiError> {
        let row = sqlx::query(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            JOIN users ON users.id = threads.owner
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::not_found("thread not found"))?;

        Ok(ThreadDetail {
            id: row.get("id"),
            title: row.get("title"),
            body: row.get("body"),
            date: row.get("date"),
            username: row.get("username"),
            comments: Vec::new(),
        })
    }
}
