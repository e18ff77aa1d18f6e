//! Thread domain: entities and the persistence contract.

pub mod entities;
pub mod repository;

pub use entities::{AddedThread, NewThread, ThreadDetail, TITLE_LIMIT};
pub use repository::ThreadRepository;
