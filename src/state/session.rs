//! Auth-session state for the current browser user.
//!
//! DESIGN
//! ======
//! The session is an explicit object owned by the root `App` and handed
//! to pages via context, not read ad hoc from global storage. Storage is
//! only the persistence layer behind it: the login flow writes both keys,
//! logout removes both, and the expiry handler removes the token alone.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the signed-in username.
pub const USERNAME_KEY: &str = "username";

/// The current session: who is signed in and with which token.
///
/// Provided as `RwSignal<SessionState>` from the root `App`; route guards
/// and user-aware components read it from context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
    pub token: Option<String>,
}

impl SessionState {
    /// Whether an authenticated session is active.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Load the persisted session from localStorage at startup.
pub fn load_session() -> SessionState {
    SessionState {
        username: storage::get_item(USERNAME_KEY),
        token: storage::get_item(TOKEN_KEY),
    }
}

/// Persist a freshly created session (successful login).
pub fn persist_session(username: &str, token: &str) {
    storage::set_item(USERNAME_KEY, username);
    storage::set_item(TOKEN_KEY, token);
}

/// Remove both persisted keys (logout).
pub fn clear_session() {
    storage::remove_item(TOKEN_KEY);
    storage::remove_item(USERNAME_KEY);
}

/// Remove the persisted token alone (session expiry keeps the username).
pub fn clear_token() {
    storage::remove_item(TOKEN_KEY);
}
