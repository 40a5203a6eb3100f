//! # policy-eval-client
//!
//! Leptos + WASM single-page client for the policy evaluation service.
//! Users sign in, submit a policy objective and category for a
//! success-probability prediction, save results with an observed outcome,
//! browse and delete their evaluation history, and receive a suggested
//! comparable policy. All data lives behind an external REST API; this
//! crate contains pages, components, session state, and the HTTP layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
