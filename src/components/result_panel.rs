//! Prediction result panel with observed-outcome buttons.

use leptos::prelude::*;

use crate::net::types::PredictionResult;
use crate::util::format::format_probability;

/// Renders the latest prediction and lets the user record what actually
/// happened. Hidden until a result is present.
#[component]
pub fn ResultPanel(result: RwSignal<Option<PredictionResult>>, on_outcome: Callback<String>) -> impl IntoView {
    view! {
        <Show when=move || result.get().is_some()>
            <div class="result-panel">
                <h2>"Result"</h2>
                <p>
                    <strong>"Prediction: "</strong>
                    {move || result.get().map(|r| r.prediction).unwrap_or_default()}
                </p>
                <p>
                    <strong>"Success probability: "</strong>
                    {move || {
                        result.get().map(|r| format_probability(r.success_probability)).unwrap_or_default()
                    }}
                </p>
                <div class="result-panel__actions">
                    <button class="btn" on:click=move |_| on_outcome.run("Success".to_owned())>
                        "Mark as Success"
                    </button>
                    <button class="btn" on:click=move |_| on_outcome.run("Failure".to_owned())>
                        "Mark as Failure"
                    </button>
                </div>
            </div>
        </Show>
    }
}
