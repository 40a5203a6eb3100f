//! Home page: evaluate a policy, review the result and suggestion, and
//! manage the evaluation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads history on mount,
//! chains predict -> suggest on form submit, and funnels every API error
//! through one handler so a 401 from any call expires the session.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::history_table::HistoryTable;
use crate::components::policy_form::PolicyForm;
use crate::components::result_panel::ResultPanel;
use crate::components::suggestion_card::SuggestionCard;
#[cfg(feature = "csr")]
use crate::net::api::{ApiError, SERVER_UNREACHABLE_MESSAGE};
use crate::net::types::{EvaluationRecord, PredictionResult, SaveRequest, Suggestion};
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_session;
use crate::util::auth::install_unauth_redirect;

/// The fixed policy categories the prediction model was trained on.
pub(crate) const CATEGORIES: [&str; 10] = [
    "Security / ICT",
    "Infrastructure / Environment",
    "Education / Public works",
    "Mobility / Infrastructure",
    "Economy / Industrial health",
    "Urban planning / Infrastructure",
    "Citizen safety",
    "Municipal management",
    "Transport / Public works",
    "Local economy / Subsidy",
];

/// Trim the form fields, requiring both to be non-empty.
pub(crate) fn validate_policy_input(objective: &str, category: &str) -> Option<(String, String)> {
    let objective = objective.trim();
    let category = category.trim();
    if objective.is_empty() || category.is_empty() {
        return None;
    }
    Some((objective.to_owned(), category.to_owned()))
}

/// Route an API failure: 401 expires the session, everything else lands
/// in the status line.
#[cfg(feature = "csr")]
fn report_api_error(session: RwSignal<SessionState>, status: RwSignal<String>, error: ApiError) {
    match error {
        ApiError::Unauthorized => expire_session(session),
        ApiError::Transport => status.set(SERVER_UNREACHABLE_MESSAGE.to_owned()),
        ApiError::Server(message) => status.set(message),
    }
}

#[cfg(feature = "csr")]
fn refresh_history(
    session: RwSignal<SessionState>,
    history: RwSignal<Vec<EvaluationRecord>>,
    status: RwSignal<String>,
) {
    leptos::task::spawn_local(async move {
        let token = session.get_untracked().token;
        match crate::net::api::fetch_history(token.as_deref()).await {
            Ok(records) => history.set(records),
            Err(error) => report_api_error(session, status, error),
        }
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let objective = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let result = RwSignal::new(None::<PredictionResult>);
    let suggestion = RwSignal::new(None::<Suggestion>);
    let history = RwSignal::new(Vec::<EvaluationRecord>::new());
    let status = RwSignal::new(String::new());
    let delete_target = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    refresh_history(session, history, status);

    let on_evaluate = Callback::new(move |()| {
        status.set(String::new());
        result.set(None);
        suggestion.set(None);
        let Some(input) = validate_policy_input(&objective.get_untracked(), &category.get_untracked()) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token;
            match crate::net::api::predict(&input.0, &input.1, token.as_deref()).await {
                Ok(prediction) => result.set(Some(prediction)),
                Err(error) => {
                    report_api_error(session, status, error);
                    return;
                }
            }
            match crate::net::api::suggest(&input.1, token.as_deref()).await {
                Ok(suggested) => suggestion.set(suggested),
                Err(error) => report_api_error(session, status, error),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
        }
    });

    let on_outcome = Callback::new(move |observed: String| {
        let Some(prediction) = result.get_untracked() else {
            return;
        };
        let request = SaveRequest {
            objective: objective.get_untracked().trim().to_owned(),
            category: category.get_untracked().trim().to_owned(),
            prediction: prediction.prediction,
            success_probability: prediction.success_probability,
            observed_outcome: Some(observed),
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token;
            match crate::net::api::save_evaluation(&request, token.as_deref()).await {
                Ok(()) => {
                    result.set(None);
                    suggestion.set(None);
                    objective.set(String::new());
                    category.set(String::new());
                    status.set("Evaluation saved.".to_owned());
                    refresh_history(session, history, status);
                }
                Err(error) => report_api_error(session, status, error),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    });

    let on_delete_request = Callback::new(move |id: String| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token;
            match crate::net::api::delete_record(&id, token.as_deref()).await {
                Ok(()) => {
                    status.set("Record deleted.".to_owned());
                    refresh_history(session, history, status);
                }
                Err(error) => report_api_error(session, status, error),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="container">
            <div class="form-wrapper">
                <h1>"Evaluate Public Policy"</h1>
                <PolicyForm
                    objective=objective
                    category=category
                    categories=&CATEGORIES
                    on_submit=on_evaluate
                />

                <Show when=move || !status.get().is_empty()>
                    <p class="form-message">{move || status.get()}</p>
                </Show>

                <ResultPanel result=result on_outcome=on_outcome/>

                <SuggestionCard suggestion=suggestion/>

                <HistoryTable history=history on_delete=on_delete_request/>
            </div>
            <Show when=move || delete_target.get().is_some()>
                <DeleteRecordDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </div>
    }
}

/// Confirmation dialog shown before a history record is deleted.
#[component]
fn DeleteRecordDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Record"</h2>
                <p class="dialog__danger">"This will permanently delete this evaluation record."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
