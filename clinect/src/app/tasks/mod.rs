//! # Async Tasks
//!
//! Each function clones the API handle under a short lock, spawns one call
//! on the global runtime, and sends one completion event back.

pub mod chat;
pub mod profile;
pub mod saved;
pub mod session;
pub mod trials;
