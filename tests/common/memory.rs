//! In-memory repository implementations.
//!
//! One store implements all three repository contracts so the endpoint
//! tests can drive the real router without a database. Semantics mirror
//! the PostgreSQL implementations: not-found and authorization checks,
//! date-ascending comment ordering, and redaction of deleted content.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use forumd::auth::users::{RegisterUser, RegisteredUser, User, UserRepository};
use forumd::domain::comments::{AddedComment, CommentDetail, CommentRepository, NewComment};
use forumd::domain::threads::{AddedThread, NewThread, ThreadDetail, ThreadRepository};
use forumd::error::ApiError;

struct StoredThread {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

struct StoredComment {
    id: String,
    owner: String,
    date: DateTime<Utc>,
    content: String,
    thread_id: String,
    is_delete: bool,
}

#[derive(Default)]
struct Store {
    users: HashMap<String, User>,
    threads: HashMap<String, StoredThread>,
    comments: Vec<StoredComment>,
}

/// An in-memory forum store implementing every repository contract.
#[derive(Default)]
pub struct InMemoryForum {
    inner: Mutex<Store>,
}

impl InMemoryForum {
    /// The stored tombstone flag of a comment, if the comment exists.
    pub fn comment_is_deleted(&self, comment_id: &str) -> Option<bool> {
        let store = self.inner.lock().unwrap();
        store
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .map(|comment| comment.is_delete)
    }

    fn username_of(store: &Store, owner: &str) -> String {
        store
            .users
            .get(owner)
            .map(|user| user.username.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[async_trait]
impl UserRepository for InMemoryForum {
    async fn add_user(
        &self,
        register: &RegisterUser,
        password_hash: &str,
    ) -> Result<RegisteredUser, ApiError> {
        let mut store = self.inner.lock().unwrap();
        let id = format!("user-{}", Uuid::new_v4());

        store.users.insert(
            id.clone(),
            User {
                id: id.clone(),
                username: register.username.clone(),
                password: password_hash.to_string(),
                fullname: register.fullname.clone(),
            },
        );

        Ok(RegisteredUser {
            id,
            username: register.username.clone(),
            fullname: register.fullname.clone(),
        })
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.get(id).cloned())
    }
}

#[async_trait]
impl ThreadRepository for InMemoryForum {
    async fn add_thread(
        &self,
        new_thread: &NewThread,
        owner: &str,
    ) -> Result<AddedThread, ApiError> {
        let mut store = self.inner.lock().unwrap();
        let id = format!("thread-{}", Uuid::new_v4());

        store.threads.insert(
            id.clone(),
            StoredThread {
                id: id.clone(),
                title: new_thread.title.clone(),
                body: new_thread.body.clone(),
                owner: owner.to_string(),
                date: Utc::now(),
            },
        );

        Ok(AddedThread {
            id,
            title: new_thread.title.clone(),
            owner: owner.to_string(),
        })
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail, ApiError> {
        let store = self.inner.lock().unwrap();
        let thread = store
            .threads
            .get(thread_id)
            .ok_or_else(|| ApiError::not_found("thread not found"))?;

        Ok(ThreadDetail {
            id: thread.id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            date: thread.date,
            username: Self::username_of(&store, &thread.owner),
            comments: Vec::new(),
        })
    }
}

#[async_trait]
impl CommentRepository for InMemoryForum {
    async fn add_comment(
        &self,
        thread_id: &str,
        new_comment: &NewComment,
        owner: &str,
    ) -> Result<AddedComment, ApiError> {
        let mut store = self.inner.lock().unwrap();
        let id = format!("comment-{}", Uuid::new_v4());

        store.comments.push(StoredComment {
            id: id.clone(),
            owner: owner.to_string(),
            date: Utc::now(),
            content: new_comment.content.clone(),
            thread_id: thread_id.to_string(),
            is_delete: false,
        });

        Ok(AddedComment {
            id,
            content: new_comment.content.clone(),
            owner: owner.to_string(),
        })
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentDetail>, ApiError> {
        let store = self.inner.lock().unwrap();

        let mut comments: Vec<&StoredComment> = store
            .comments
            .iter()
            .filter(|comment| comment.thread_id == thread_id)
            .collect();
        comments.sort_by_key(|comment| comment.date);

        Ok(comments
            .into_iter()
            .map(|comment| {
                CommentDetail::new(
                    comment.id.clone(),
                    Self::username_of(&store, &comment.owner),
                    comment.date,
                    comment.content.clone(),
                    comment.is_delete,
                )
            })
            .collect())
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<(), ApiError> {
        let mut store = self.inner.lock().unwrap();
        let comment = store
            .comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| ApiError::not_found("failed to delete comment, comment not found"))?;

        comment.is_delete = true;
        Ok(())
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), ApiError> {
        let store = self.inner.lock().unwrap();
        let comment = store
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| ApiError::not_found("comment not found"))?;

        if comment.owner != owner {
            return Err(ApiError::forbidden(
                "you are not allowed to access this resource",
            ));
        }

        Ok(())
    }
}
