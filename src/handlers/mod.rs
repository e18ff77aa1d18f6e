//! Forum HTTP handlers.
//!
//! Handlers translate requests into use-case calls and wrap results in the
//! `{"status":"success","data":…}` envelope. Failures propagate as
//! [`ApiError`](crate::error::ApiError) and render through its
//! `IntoResponse` conversion.

pub mod comments;
pub mod threads;

pub use comments::{delete_comment, post_comment};
pub use threads::{get_thread, post_thread};
