//! PostgreSQL repository implementations.
//!
//! One struct per repository contract, each holding a `PgPool` handle
//! passed in at construction. SQL lives here and nowhere else.

pub mod comment_repository;
pub mod thread_repository;
pub mod user_repository;

pub use comment_repository::PgCommentRepository;
pub use thread_repository::PgThreadRepository;
pub use user_repository::PgUserRepository;
