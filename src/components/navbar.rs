//! Top navigation bar with session-aware links.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};

/// Navigation bar: Login/Register links when signed out, a Home link
/// plus Logout button when signed in. Logout clears both persisted keys
/// and the session object.
#[component]
pub fn Navbar() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        session::clear_session();
        session_state.set(SessionState::default());
    };

    view! {
        <nav class="navbar">
            <h2>"Public Policies"</h2>
            <div class="navbar__links">
                <Show
                    when=move || session_state.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        }
                    }
                >
                    <a href="/">"Home"</a>
                    <button class="navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
