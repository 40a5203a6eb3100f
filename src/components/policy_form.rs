//! Policy submission form: objective text plus a fixed-category select.

use leptos::prelude::*;

/// Evaluation form. Both fields use native `required` validation; submit
/// triggers the page's evaluate flow.
#[component]
pub fn PolicyForm(
    objective: RwSignal<String>,
    category: RwSignal<String>,
    categories: &'static [&'static str],
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form on:submit=move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            on_submit.run(());
        }>
            <label class="policy-form__label">
                "Main objective:"
                <input
                    type="text"
                    required
                    prop:value=move || objective.get()
                    on:input=move |ev| objective.set(event_target_value(&ev))
                />
            </label>

            <label class="policy-form__label">
                "Category:"
                <select
                    required
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"-- Select a category --"</option>
                    {categories
                        .iter()
                        .map(|name| {
                            let name = *name;
                            view! { <option value=name>{name}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <button type="submit">"Evaluate"</button>
        </form>
    }
}
