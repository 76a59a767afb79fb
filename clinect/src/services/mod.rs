//! # Services Module
//!
//! External integrations. The only external system is the trials backend,
//! reached over HTTP by the [`api`] client.
//!
//! ```text
//! services/
//! └── api/    - Backend HTTP API client
//!               (session, profile, trial search, bookmarks, chat, graph)
//! ```
//!
//! ## Thread Safety
//!
//! [`api::ApiClient`] wraps a `reqwest::Client` (internally thread-safe,
//! connection-pooled) and is shared across tasks as an
//! `Arc<dyn crate::core::service::ApiService>`.

pub mod api;
