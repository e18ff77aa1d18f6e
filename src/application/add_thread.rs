//! Add-thread use case.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::threads::{AddedThread, NewThread, ThreadRepository};
use crate::error::ApiError;

/// Validates a thread payload and persists it for its owner.
pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value, owner: &str) -> Result<AddedThread, ApiError> {
        let new_thread = NewThread::parse(payload)?;

        self.thread_repository.add_thread(&new_thread, owner).await
    }
}
