//! Accounts and authentication.
//!
//! - **`users`** - user entities and the `UserRepository` contract
//! - **`sessions`** - JWT access-token creation and verification
//! - **`handlers`** - registration and login endpoints

pub mod handlers;
pub mod sessions;
pub mod users;

pub use users::{RegisterUser, RegisteredUser, User, UserRepository};
