//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior,
//! and session expiry is acted on in exactly one place. The fetch layer
//! reports a 401 as a tagged outcome; `expire_session` clears the token
//! and the installed redirect effect performs the navigation, keeping
//! request code free of navigation concerns.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{self, SessionState};

/// Blocking notification shown when an authenticated call answers 401.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please sign in again.";

/// Whether a route guard should bounce this session to the login page.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    session.token.is_none()
}

/// Redirect to `/login` whenever no session token is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Handle session expiry: notify the user, drop the persisted token
/// (the username is retained), and clear the token on the session
/// object. Navigation happens through [`install_unauth_redirect`].
pub fn expire_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(SESSION_EXPIRED_MESSAGE);
        }
    }
    session::clear_token();
    session.update(|state| state.token = None);
}
