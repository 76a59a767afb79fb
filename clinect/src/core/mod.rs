//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`service::ApiService`] trait every backend
//!   operation goes through, so app logic can run against a mock in tests
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust
//! use clinect::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! In production the app holds an `Arc<dyn ApiService>` backed by the real
//! [`crate::services::api::ApiClient`]; tests swap in a mock implementation
//! of the same trait.

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
#[allow(unused_imports)]
pub use error::{AppError, Result};
#[allow(unused_imports)]
pub use service::ApiService;
