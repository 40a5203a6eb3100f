//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the evaluation chrome while reading shared state
//! from Leptos context providers or props passed down from pages.

pub mod history_table;
pub mod navbar;
pub mod policy_form;
pub mod result_panel;
pub mod suggestion_card;
