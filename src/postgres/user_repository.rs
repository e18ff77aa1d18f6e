//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::auth::users::{RegisterUser, RegisteredUser, User, UserRepository};
use crate::error::ApiError;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn add_user(
        &self,
        register: &RegisterUser,
        password_hash: &str,
    ) -> Result<RegisteredUser, ApiError> {
        let id = format!("user-{}", Uuid::new_v4());

        let row = sqlx::query(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(&id)
        .bind(&register.username)
        .bind(password_hash)
        .bind(&register.fullname)
        .fetch_one(&self.pool)
        .await?;

        Ok(RegisteredUser {
            id: row.get("id"),
            username: row.get("username"),
            fullname: row.get("fullname"),
        })
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, fullname
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, fullname
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
