//! # Core Types
//!
//! Error taxonomy and the service trait the rest of the SDK is built on.
//!
//! - [`error`] - `ApiError` and the crate-wide `Result` alias
//! - [`service`] - `ApiService` trait for dependency injection and mocking

pub mod error;
pub mod service;

pub use error::{ApiError, FieldError, Result};
pub use service::ApiService;
