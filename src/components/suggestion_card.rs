//! Suggested comparable policy card.

use leptos::prelude::*;

use crate::net::types::Suggestion;
use crate::util::format::format_probability;

/// Renders the server's suggested policy for the submitted category,
/// including the rationale when one is on file. Hidden until a
/// suggestion is present.
#[component]
pub fn SuggestionCard(suggestion: RwSignal<Option<Suggestion>>) -> impl IntoView {
    view! {
        <Show when=move || suggestion.get().is_some()>
            <div class="suggestion-card">
                <h2>"Suggested Policy"</h2>
                <p>
                    <strong>"Objective: "</strong>
                    {move || suggestion.get().map(|s| s.objective).unwrap_or_default()}
                </p>
                <p>
                    <strong>"Category: "</strong>
                    {move || suggestion.get().map(|s| s.category).unwrap_or_default()}
                </p>
                <p>
                    <strong>"Success probability: "</strong>
                    {move || {
                        suggestion
                            .get()
                            .map(|s| format_probability(s.success_probability))
                            .unwrap_or_default()
                    }}
                </p>
                <Show when=move || suggestion.get().is_some_and(|s| s.evaluation.is_some())>
                    <p>
                        <strong>"Why it worked: "</strong>
                        {move || suggestion.get().and_then(|s| s.evaluation).unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </Show>
    }
}
