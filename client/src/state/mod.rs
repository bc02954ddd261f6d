//! Application state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State types are plain structs held in `RwSignal`s by `app::App` and the
//! route pages. Transitions live on the structs so they can be tested
//! without a browser.

pub mod auth;
pub mod board;
pub mod boards;
pub mod coordinator;
pub mod toast;
