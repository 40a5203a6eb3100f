//! Collapsible table of past evaluations.

#[cfg(test)]
#[path = "history_table_test.rs"]
mod history_table_test;

use leptos::prelude::*;

use crate::net::types::EvaluationRecord;

pub(crate) fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Hide" } else { "Show" }
}

pub(crate) fn outcome_display(observed: Option<String>) -> String {
    observed.unwrap_or_else(|| "—".to_owned())
}

/// History of saved evaluations with a per-row delete button. The table
/// starts collapsed; `on_delete` receives the record id.
#[component]
pub fn HistoryTable(history: RwSignal<Vec<EvaluationRecord>>, on_delete: Callback<String>) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div class="history">
            <div class="history__header">
                <h2 class="history__title">"History"</h2>
                <button class="btn history__toggle" on:click=move |_| expanded.update(|value| *value = !*value)>
                    {move || toggle_label(expanded.get())}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <Show
                    when=move || !history.get().is_empty()
                    fallback=|| view! { <p class="history__empty">"No records yet."</p> }
                >
                    <table class="history__table">
                        <thead>
                            <tr>
                                <th>"Objective"</th>
                                <th>"Category"</th>
                                <th>"Prediction"</th>
                                <th>"Success prob."</th>
                                <th>"Observed outcome"</th>
                                <th>"Date"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                history
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let id = record.id;
                                        view! {
                                            <tr>
                                                <td>{record.objective}</td>
                                                <td>{record.category}</td>
                                                <td>{record.prediction}</td>
                                                <td>
                                                    {crate::util::format::format_probability(
                                                        record.success_probability,
                                                    )}
                                                </td>
                                                <td>{outcome_display(record.observed_outcome)}</td>
                                                <td>{record.timestamp}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete.run(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
