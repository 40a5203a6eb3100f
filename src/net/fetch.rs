//! Authenticated HTTP request wrapper.
//!
//! Every call that needs the session token routes through
//! [`fetch_with_auth`]; it is the only place a 401 is recognized as
//! session expiry. The wrapper performs a single attempt with no retries,
//! no backoff, and no timeout.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a tagged [`FetchOutcome`] instead of a raw result: a 401
//! never reaches them as a response, and transport failures are logged
//! here and collapsed to `Failed` so no error propagates.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// HTTP method for an outbound request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Delete,
}

/// Caller-supplied request options; headers and body are optional.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Options for a JSON `POST` with the given body.
    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Options for a bodyless `DELETE`.
    pub fn delete() -> Self {
        Self {
            method: HttpMethod::Delete,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Outcome of an authenticated request.
pub enum FetchOutcome {
    /// A response arrived with any status other than 401. The response is
    /// returned unmodified; the caller interprets `ok`/status and parses
    /// the body.
    #[cfg(feature = "csr")]
    Response(gloo_net::http::Response),
    /// The server answered 401: the session token is expired or invalid.
    Unauthorized,
    /// Transport-level failure (network error, DNS failure, connection
    /// refused). Already logged; the request did not succeed.
    Failed,
}

/// Merge outbound headers: the `Content-Type: application/json` default
/// first, then caller-supplied headers (which may override it), then the
/// `Authorization` bearer header last. With no token the `Authorization`
/// header is omitted entirely.
pub fn build_headers(custom: &[(String, String)], token: Option<&str>) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    for (name, value) in custom {
        upsert_header(&mut headers, name, value);
    }
    if let Some(token) = token {
        upsert_header(&mut headers, "Authorization", &format!("Bearer {token}"));
    }
    headers
}

fn upsert_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
        Some((_, existing_value)) => *existing_value = value.to_owned(),
        None => headers.push((name.to_owned(), value.to_owned())),
    }
}

/// Perform a single authenticated request against `url`.
///
/// The current token is passed in by the caller (drawn from the session
/// object); this function never reads persisted storage itself.
pub async fn fetch_with_auth(url: &str, options: RequestOptions, token: Option<&str>) -> FetchOutcome {
    #[cfg(feature = "csr")]
    {
        let headers = build_headers(&options.headers, token);
        let method = match options.method {
            HttpMethod::Get => gloo_net::http::Method::GET,
            HttpMethod::Post => gloo_net::http::Method::POST,
            HttpMethod::Delete => gloo_net::http::Method::DELETE,
        };
        let mut builder = gloo_net::http::RequestBuilder::new(url).method(method);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        let request = match options.body {
            Some(ref body) => {
                let raw = match serde_json::to_string(body) {
                    Ok(raw) => raw,
                    Err(err) => {
                        log::error!("failed to serialize request body for {url}: {err}");
                        return FetchOutcome::Failed;
                    }
                };
                builder.body(raw)
            }
            None => builder.build(),
        };
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                log::error!("failed to build request for {url}: {err}");
                return FetchOutcome::Failed;
            }
        };
        match request.send().await {
            Ok(response) if response.status() == 401 => FetchOutcome::Unauthorized,
            Ok(response) => FetchOutcome::Response(response),
            Err(err) => {
                log::error!("transport failure for {url}: {err}");
                FetchOutcome::Failed
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, options, token);
        FetchOutcome::Failed
    }
}
