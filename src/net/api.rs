//! REST API helpers for communicating with the policy evaluation server.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning errors since these endpoints are only reachable from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Authenticated
//! endpoints surface a tagged [`ApiError`] so pages can route a 401 to
//! the session-expiry handler; `/login` and `/register` bypass the
//! authenticated wrapper because a 401 from them means bad credentials,
//! not an expired session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::fetch::{FetchOutcome, RequestOptions, fetch_with_auth};
use super::types::{EvaluationRecord, LoginResponse, PredictionResult, SaveRequest, Suggestion};
#[cfg(feature = "csr")]
use super::types::{ErrorBody, MessageBody};

/// Shown when a request never reached the server.
pub const SERVER_UNREACHABLE_MESSAGE: &str = "Could not reach the server.";

/// Failure of an authenticated API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered 401: the session is expired or the token invalid.
    Unauthorized,
    /// Transport-level failure; already logged by the fetch wrapper.
    Transport,
    /// Application-level error with the server's message when one was sent.
    Server(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn api_base() -> &'static str {
    option_env!("POLICY_API_BASE").unwrap_or("http://127.0.0.1:5000")
}

fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

fn history_record_path(id: &str) -> String {
    format!("/history/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn fallback_error_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn credentials_payload(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

fn predict_payload(objective: &str, category: &str) -> serde_json::Value {
    serde_json::json!({ "objective": objective, "category": category })
}

fn suggest_payload(category: &str) -> serde_json::Value {
    serde_json::json!({ "category": category })
}

/// Extract the `{error}` body of a non-success response, falling back to
/// a generic status message when the body is not in that shape.
#[cfg(feature = "csr")]
async fn error_message(response: gloo_net::http::Response, what: &str) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => fallback_error_message(what, status),
    }
}

/// Sign in via `POST /login`.
///
/// # Errors
///
/// Returns the server's error message on rejected credentials, or a
/// transport/parse message when the call itself fails.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "csr")]
    {
        let payload = credentials_payload(username, password);
        let response = gloo_net::http::Request::post(&api_url("/login"))
            .json(&payload)
            .map_err(|err| err.to_string())?
            .send()
            .await
            .map_err(|_| SERVER_UNREACHABLE_MESSAGE.to_owned())?;
        if !response.ok() {
            return Err(error_message(response, "login").await);
        }
        response.json::<LoginResponse>().await.map_err(|err| err.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account via `POST /register`, returning the server's
/// confirmation message.
///
/// # Errors
///
/// Returns the server's error message (e.g. username taken) or a
/// transport/parse message when the call itself fails.
pub async fn register(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = credentials_payload(username, password);
        let response = gloo_net::http::Request::post(&api_url("/register"))
            .json(&payload)
            .map_err(|err| err.to_string())?
            .send()
            .await
            .map_err(|_| SERVER_UNREACHABLE_MESSAGE.to_owned())?;
        if !response.ok() {
            return Err(error_message(response, "registration").await);
        }
        let body: MessageBody = response.json().await.map_err(|err| err.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Request a success-probability prediction via `POST /predict`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn predict(objective: &str, category: &str, token: Option<&str>) -> ApiResult<PredictionResult> {
    let options = RequestOptions::post(predict_payload(objective, category));
    match fetch_with_auth(&api_url("/predict"), options, token).await {
        #[cfg(feature = "csr")]
        FetchOutcome::Response(response) => {
            if !response.ok() {
                return Err(ApiError::Server(error_message(response, "prediction").await));
            }
            response
                .json::<PredictionResult>()
                .await
                .map_err(|err| ApiError::Server(err.to_string()))
        }
        FetchOutcome::Unauthorized => Err(ApiError::Unauthorized),
        FetchOutcome::Failed => Err(ApiError::Transport),
    }
}

/// Fetch a comparable successful policy via `POST /suggest`.
///
/// Returns `Ok(None)` when the server has no suggestion for the category
/// (it answers 200 with an informational body in that case).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn suggest(category: &str, token: Option<&str>) -> ApiResult<Option<Suggestion>> {
    let options = RequestOptions::post(suggest_payload(category));
    match fetch_with_auth(&api_url("/suggest"), options, token).await {
        #[cfg(feature = "csr")]
        FetchOutcome::Response(response) => {
            if !response.ok() {
                return Err(ApiError::Server(error_message(response, "suggestion").await));
            }
            Ok(response.json::<Suggestion>().await.ok())
        }
        FetchOutcome::Unauthorized => Err(ApiError::Unauthorized),
        FetchOutcome::Failed => Err(ApiError::Transport),
    }
}

/// Fetch the signed-in user's evaluation history via `GET /history`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_history(token: Option<&str>) -> ApiResult<Vec<EvaluationRecord>> {
    match fetch_with_auth(&api_url("/history"), RequestOptions::default(), token).await {
        #[cfg(feature = "csr")]
        FetchOutcome::Response(response) => {
            if !response.ok() {
                return Err(ApiError::Server(error_message(response, "history").await));
            }
            response
                .json::<Vec<EvaluationRecord>>()
                .await
                .map_err(|err| ApiError::Server(err.to_string()))
        }
        FetchOutcome::Unauthorized => Err(ApiError::Unauthorized),
        FetchOutcome::Failed => Err(ApiError::Transport),
    }
}

/// Persist an evaluation with its observed outcome via `POST /save`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn save_evaluation(request: &SaveRequest, token: Option<&str>) -> ApiResult<()> {
    let body = match serde_json::to_value(request) {
        Ok(body) => body,
        Err(err) => return Err(ApiError::Server(err.to_string())),
    };
    match fetch_with_auth(&api_url("/save"), RequestOptions::post(body), token).await {
        #[cfg(feature = "csr")]
        FetchOutcome::Response(response) => {
            if !response.ok() {
                return Err(ApiError::Server(error_message(response, "save").await));
            }
            Ok(())
        }
        FetchOutcome::Unauthorized => Err(ApiError::Unauthorized),
        FetchOutcome::Failed => Err(ApiError::Transport),
    }
}

/// Delete a history record via `DELETE /history/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_record(id: &str, token: Option<&str>) -> ApiResult<()> {
    match fetch_with_auth(&api_url(&history_record_path(id)), RequestOptions::delete(), token).await {
        #[cfg(feature = "csr")]
        FetchOutcome::Response(response) => {
            if !response.ok() {
                return Err(ApiError::Server(error_message(response, "delete").await));
            }
            Ok(())
        }
        FetchOutcome::Unauthorized => Err(ApiError::Unauthorized),
        FetchOutcome::Failed => Err(ApiError::Transport),
    }
}
