//! Terminal dashboard.
//!
//! `runtime` owns the event loop; `app` owns the state; `input` maps keys to
//! intents; `render` reads the derived view and draws every card.

pub mod app;
pub mod events;
pub mod filters;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod options;
pub mod panels;
pub mod render;
pub mod runtime;
pub mod sidebar;
pub mod terminal;
pub mod theme;
