//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, session-expiry
//! routing) and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod register;
