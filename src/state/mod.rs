//! Shared application state provided via Leptos context.

pub mod session;
