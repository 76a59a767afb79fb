//! # Utility Functions
//!
//! Shared utility functions used across the desktop client.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Global tokio runtime the GUI spawns network tasks on
//! - **[`validation`]**: Input validation utilities (username, age)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (text truncation, dates)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
