use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_url_prefixes_the_base() {
    assert_eq!(api_url("/history"), format!("{}/history", api_base()));
}

#[test]
fn history_record_path_embeds_the_id() {
    assert_eq!(history_record_path("rec-42"), "/history/rec-42");
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn credentials_payload_shape() {
    let payload = credentials_payload("alice", "s3cret");
    assert_eq!(payload, serde_json::json!({"username": "alice", "password": "s3cret"}));
}

#[test]
fn predict_payload_shape() {
    let payload = predict_payload("Expand broadband", "Security / ICT");
    assert_eq!(
        payload,
        serde_json::json!({"objective": "Expand broadband", "category": "Security / ICT"})
    );
}

#[test]
fn suggest_payload_shape() {
    let payload = suggest_payload("Citizen safety");
    assert_eq!(payload, serde_json::json!({"category": "Citizen safety"}));
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn fallback_error_message_formats_status() {
    assert_eq!(fallback_error_message("prediction", 500), "prediction failed: 500");
    assert_eq!(fallback_error_message("delete", 404), "delete failed: 404");
}

#[test]
fn api_error_distinguishes_unauthorized_from_transport() {
    assert_ne!(ApiError::Unauthorized, ApiError::Transport);
    assert_eq!(ApiError::Server("x".to_owned()), ApiError::Server("x".to_owned()));
}
