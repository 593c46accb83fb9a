//! API request and response types

pub mod error;
pub mod models;

pub use error::{ApiError, ApiErrorResponse};
pub use models::ModelsResponse;
