//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, REST calls, toasts) and
//! delegates rendering details to `components`.

pub mod board;
pub mod boards;
pub mod login;
pub mod signup;
