use super::*;

#[test]
fn default_session_is_signed_out() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.username, None);
}

#[test]
fn session_with_token_is_authenticated() {
    let session = SessionState {
        username: Some("alice".to_owned()),
        token: Some("abc123".to_owned()),
    };
    assert!(session.is_authenticated());
}

#[test]
fn username_alone_does_not_authenticate() {
    // Expiry clears the token but may keep the username; that session is
    // signed out.
    let session = SessionState {
        username: Some("alice".to_owned()),
        token: None,
    };
    assert!(!session.is_authenticated());
}

#[test]
fn storage_keys_match_the_persisted_schema() {
    assert_eq!(TOKEN_KEY, "token");
    assert_eq!(USERNAME_KEY, "username");
}

#[test]
fn load_session_outside_the_browser_is_empty() {
    // Native builds have no localStorage; the stubs return nothing.
    assert_eq!(load_session(), SessionState::default());
}
