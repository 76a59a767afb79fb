//! # User Action Handlers
//!
//! Handlers organized by domain. Each validates input under a short lock,
//! updates optimistic UI state, and delegates network work to [`crate::app::tasks`].

pub mod auth;
pub mod chat;
pub mod navigation;
pub mod profile;
pub mod saved;
pub mod search;
