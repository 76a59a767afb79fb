//! Reusable presentational components. No business logic; callers act on
//! returned click state.

pub mod badges;
pub mod cards;
pub mod chat;
pub mod forms;
pub mod layouts;
pub mod nav_bar;
pub mod notifications;
