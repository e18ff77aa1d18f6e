//! Backend error module.
//!
//! - **`types`** - the `ApiError` enumeration and its status-code mapping
//! - **`conversion`** - `IntoResponse` so handlers can return errors directly

pub mod conversion;
pub mod types;

pub use types::ApiError;
