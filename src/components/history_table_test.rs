use super::*;

#[test]
fn toggle_label_reflects_expansion() {
    assert_eq!(toggle_label(false), "Show");
    assert_eq!(toggle_label(true), "Hide");
}

#[test]
fn outcome_display_shows_recorded_value() {
    assert_eq!(outcome_display(Some("Success".to_owned())), "Success");
}

#[test]
fn outcome_display_placeholder_for_missing_value() {
    assert_eq!(outcome_display(None), "—");
}
