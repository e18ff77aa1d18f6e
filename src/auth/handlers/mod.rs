//! Account HTTP handlers: registration and login.

pub mod login;
pub mod register;

pub use login::login;
pub use register::register;
