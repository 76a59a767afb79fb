//! Global Tokio runtime for async HTTP operations
//!
//! egui drives its own frame loop on the main thread, but reqwest requires a
//! tokio runtime. This static runtime bridges the two:
//! 1. Handlers spawn API tasks onto it (`TOKIO_RT.spawn(...)`)
//! 2. Tasks send completion events back over the app's async channel,
//!    drained by the frame loop on the next tick
//!
//! Usage:
//! ```rust,no_run
//! use clinect::utils::runtime::TOKIO_RT;
//!
//! TOKIO_RT.spawn(async move {
//!     // network call; send an AppEvent with the result
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
