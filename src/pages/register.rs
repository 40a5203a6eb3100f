//! Registration page: create an account via `POST /register`.

use leptos::prelude::*;

use super::login::validate_credentials;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(error) => {
                message.set(error.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&credentials.0, &credentials.1).await {
                Ok(confirmation) => message.set(confirmation),
                Err(error) => message.set(error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="form-wrapper">
            <h1>"Register"</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="form-message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
