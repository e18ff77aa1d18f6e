//! Thread persistence contract.

use async_trait::async_trait;

use crate::domain::threads::{AddedThread, NewThread, ThreadDetail};
use crate::error::ApiError;

/// Persistence operations for threads.
///
/// The production implementation is backed by PostgreSQL; tests use an
/// in-memory one.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a validated thread for `owner` and return its created slice.
    async fn add_thread(&self, new_thread: &NewThread, owner: &str)
        -> Result<AddedThread, ApiError>;

    /// Fetch a thread by id, joined with its author's username.
    ///
    /// Fails with a not-found error when the id is absent. The returned
    /// detail carries an empty comment list.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail, ApiError>;
}
