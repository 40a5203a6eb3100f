use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_record() -> EvaluationRecord {
    EvaluationRecord {
        id: "rec-1".to_owned(),
        objective: "Expand the municipal broadband network".to_owned(),
        category: "Security / ICT".to_owned(),
        prediction: "Success".to_owned(),
        success_probability: 82.4,
        observed_outcome: Some("Success".to_owned()),
        timestamp: "2026-03-14 10:22:05".to_owned(),
    }
}

// =============================================================
// EvaluationRecord serde
// =============================================================

#[test]
fn record_round_trip() {
    let record = make_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: EvaluationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}

#[test]
fn record_uses_camel_case_wire_names() {
    let json = serde_json::to_value(make_record()).unwrap();
    assert!(json.get("successProbability").is_some());
    assert!(json.get("observedOutcome").is_some());
    assert!(json.get("success_probability").is_none());
}

#[test]
fn record_null_observed_outcome_maps_to_none() {
    let raw = r#"{
        "id": "rec-2",
        "objective": "Re-pave arterial roads",
        "category": "Transport / Public works",
        "prediction": "Failure",
        "successProbability": 23.0,
        "observedOutcome": null,
        "timestamp": "2026-01-02 08:00:00"
    }"#;
    let record: EvaluationRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.observed_outcome, None);
    assert!((record.success_probability - 23.0).abs() < f64::EPSILON);
}

// =============================================================
// PredictionResult / Suggestion serde
// =============================================================

#[test]
fn prediction_result_deserializes_wire_body() {
    let raw = r#"{"prediction": "Success", "successProbability": 97.5}"#;
    let result: PredictionResult = serde_json::from_str(raw).unwrap();
    assert_eq!(result.prediction, "Success");
    assert!((result.success_probability - 97.5).abs() < f64::EPSILON);
}

#[test]
fn suggestion_tolerates_missing_evaluation() {
    let raw = r#"{
        "objective": "Community policing pilot",
        "category": "Citizen safety",
        "successProbability": 74.0
    }"#;
    let suggestion: Suggestion = serde_json::from_str(raw).unwrap();
    assert_eq!(suggestion.evaluation, None);
}

#[test]
fn suggestion_keeps_evaluation_when_present() {
    let raw = r#"{
        "objective": "Community policing pilot",
        "category": "Citizen safety",
        "successProbability": 74.0,
        "evaluation": "Neighborhood patrols cut response times in half"
    }"#;
    let suggestion: Suggestion = serde_json::from_str(raw).unwrap();
    assert_eq!(
        suggestion.evaluation.as_deref(),
        Some("Neighborhood patrols cut response times in half")
    );
}

// =============================================================
// SaveRequest serialization
// =============================================================

#[test]
fn save_request_serializes_expected_keys() {
    let request = SaveRequest {
        objective: "Expand the municipal broadband network".to_owned(),
        category: "Security / ICT".to_owned(),
        prediction: "Success".to_owned(),
        success_probability: 82.4,
        observed_outcome: Some("Failure".to_owned()),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["objective"], "Expand the municipal broadband network");
    assert_eq!(json["successProbability"], 82.4);
    assert_eq!(json["observedOutcome"], "Failure");
}

// =============================================================
// Auth / error bodies
// =============================================================

#[test]
fn login_response_deserializes() {
    let raw = r#"{"token": "abc123", "username": "alice"}"#;
    let body: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(body.token, "abc123");
    assert_eq!(body.username, "alice");
}

#[test]
fn error_body_deserializes() {
    let raw = r#"{"error": "Invalid credentials"}"#;
    let body: ErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.error, "Invalid credentials");
}
