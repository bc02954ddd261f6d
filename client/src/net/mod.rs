//! Networking modules for the REST board backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues bearer-authenticated JSON requests and `types` defines the
//! backend's wire schema.

pub mod api;
pub mod types;
