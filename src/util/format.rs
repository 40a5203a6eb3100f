//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a 0–100 success probability for display, e.g. `97.5%`.
pub fn format_probability(probability: f64) -> String {
    format!("{probability}%")
}
