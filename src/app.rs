//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session;

/// Root application component.
///
/// Owns the session object (loaded from persisted storage once at
/// startup), provides it via context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::load_session());
    provide_context(session);

    view! {
        <Title text="Policy Evaluation"/>

        <Router>
            <Navbar/>
            <div class="page-container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </div>
        </Router>
    }
}
