//! Wire DTOs for the policy evaluation API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads (camelCase field names on
//! the wire) so serde round-trips stay lossless. The client never derives
//! or validates this data; it only displays it and deletes records by id.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A stored prediction plus its later-observed real-world outcome, as
/// returned by `GET /history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    /// Server-assigned record identifier.
    pub id: String,
    /// Free-text policy objective as submitted.
    pub objective: String,
    /// One of the fixed policy categories.
    pub category: String,
    /// Predicted label (e.g. `"Success"`).
    pub prediction: String,
    /// Predicted probability of success, 0–100.
    pub success_probability: f64,
    /// Real-world outcome recorded by the user, if any.
    pub observed_outcome: Option<String>,
    /// Server-side creation time, preformatted for display.
    pub timestamp: String,
}

/// Response body of `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub prediction: String,
    /// Predicted probability of success, 0–100.
    pub success_probability: f64,
}

/// A comparable successful policy returned by `POST /suggest`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub objective: String,
    pub category: String,
    /// Predicted probability of success, 0–100.
    pub success_probability: f64,
    /// Rationale for why the suggested policy worked, when the server has
    /// one on file.
    #[serde(default)]
    pub evaluation: Option<String>,
}

/// Request body of `POST /save`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub objective: String,
    pub category: String,
    pub prediction: String,
    pub success_probability: f64,
    pub observed_outcome: Option<String>,
}

/// Successful response body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Successful response body of `POST /register` and other
/// message-carrying endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body `{error}` sent with application-level 4xx/5xx responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
