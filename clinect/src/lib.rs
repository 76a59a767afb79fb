//! # Clinect Desktop Client
//!
//! A native desktop client for searching, tracking, and matching clinical
//! trials against a Clinect backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              clinect (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode native GUI            │
//! │  tokio          - Async runtime for backend calls      │
//! │  reqwest        - HTTP client (cookie session)         │
//! │  tracing        - Structured file logging              │
//! └────────────────────────────────────────────────────────┘
//!                      │ HTTP + cookies
//!                      ▼
//!           ┌─────────────────────────┐
//!           │  Clinect backend API    │
//!           │  (trials registry,      │
//!           │   graph matching, chat) │
//!           └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **[`app`]**: orchestrator, state machine, event handling, user-action
//!   handlers, and async tasks
//! - **[`services`]**: the backend HTTP client, one module per endpoint
//!   family
//! - **[`ui`]**: screens, widgets, and the theme
//! - **[`core`]**: the error type and the `ApiService` trait seam
//! - **[`config`]** / **[`logging`]**: env-derived settings and tracing init
//! - **[`utils`]**: shared runtime and input validation

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::error::{AppError, Result};
