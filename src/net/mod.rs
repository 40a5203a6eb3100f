//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` wraps raw HTTP calls with bearer-token and session-expiry
//! handling, `api` exposes one typed helper per endpoint, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod fetch;
pub mod types;
