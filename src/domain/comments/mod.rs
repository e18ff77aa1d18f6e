//! Comment domain: entities and the persistence contract.

pub mod entities;
pub mod repository;

pub use entities::{AddedComment, CommentDetail, NewComment, CONTENT_LIMIT, DELETED_CONTENT_MARKER};
pub use repository::CommentRepository;
