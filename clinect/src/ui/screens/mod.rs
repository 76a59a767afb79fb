//! Screen renderers, one module per [`Screen`](crate::app::Screen) variant.

pub mod chat;
pub mod landing;
pub mod login;
pub mod profile;
pub mod saved;
pub mod search;
pub mod trial_detail;
