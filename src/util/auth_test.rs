use super::*;

#[test]
fn should_redirect_when_token_missing() {
    let session = SessionState {
        username: Some("alice".to_owned()),
        token: None,
    };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_with_token_present() {
    let session = SessionState {
        username: Some("alice".to_owned()),
        token: Some("abc123".to_owned()),
    };
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn fresh_session_redirects() {
    assert!(should_redirect_unauth(&SessionState::default()));
}
