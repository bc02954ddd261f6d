//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, the clock,
//! route guards) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod breadcrumb;
pub mod deadline;
pub mod token;
