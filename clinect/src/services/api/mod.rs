//! # Backend API Client Module
//!
//! HTTP client for the trials backend. One async function per endpoint;
//! every request rides the client's cookie store, which carries the session
//! credential. No retries, no timeouts, no client-side caching; a single
//! attempt per call.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and the endpoint policy table
//! ├── client.rs   - ApiClient struct, base URL, response-policy helpers
//! ├── auth.rs     - Session endpoints (login, logout, current-user)
//! ├── history.rs  - Medical history endpoints
//! ├── trials.rs   - Trial search and protocol record endpoints
//! ├── saved.rs    - Bookmark endpoints
//! ├── chat.rs     - Conversational smart-match endpoint
//! └── graph.rs    - Graph matching, related, recommendations, taxonomy
//! ```
//!
//! ## Hard-failure policy, per endpoint
//!
//! Two response policies exist and the split is intentional (backend
//! compatibility depends on it); each endpoint function picks one helper
//! from `client.rs` and must not be "unified":
//!
//! - **pass-through** ([`client::read_json`]): decode the JSON body even on
//!   non-2xx and hand it to the caller, who branches on the embedded
//!   `success`/`error` fields.
//! - **must-succeed** ([`client::require_success`]): any non-2xx status is an
//!   `Err` with a human-readable message.
//!
//! | Endpoint | Policy |
//! |---|---|
//! | POST /api/login | pass-through |
//! | POST /api/logout | pass-through |
//! | GET /api/current-user | pass-through |
//! | GET /api/medical-history | pass-through |
//! | POST /api/medical-history | pass-through |
//! | GET /api/trials/search | pass-through |
//! | GET /api/trials/{nctId} | pass-through |
//! | GET /api/saved-trials | must-succeed |
//! | POST /api/saved-trials | pass-through |
//! | DELETE /api/saved-trials/{nctId} | pass-through |
//! | POST /api/chat | must-succeed |
//! | POST /api/trials/smart-match | must-succeed |
//! | GET /api/trials/{nctId}/related | must-succeed |
//! | GET /api/recommendations | must-succeed |
//! | GET /api/conditions/hierarchy | must-succeed |

pub mod auth;
pub mod chat;
pub mod client;
pub mod graph;
pub mod history;
pub mod saved;
pub mod trials;

pub use client::ApiClient;
pub use trials::SearchParams;
