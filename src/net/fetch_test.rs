use super::*;

fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

// =============================================================
// build_headers
// =============================================================

#[test]
fn defaults_json_content_type() {
    let headers = build_headers(&[], None);
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
}

#[test]
fn token_becomes_bearer_authorization() {
    let headers = build_headers(&[], Some("abc123"));
    assert_eq!(header(&headers, "Authorization"), Some("Bearer abc123"));
}

#[test]
fn no_token_omits_authorization_entirely() {
    let headers = build_headers(&[], None);
    assert_eq!(header(&headers, "Authorization"), None);
}

#[test]
fn custom_headers_are_preserved() {
    let custom = vec![("X-Request-Id".to_owned(), "r-1".to_owned())];
    let headers = build_headers(&custom, Some("abc123"));
    assert_eq!(header(&headers, "X-Request-Id"), Some("r-1"));
}

#[test]
fn custom_content_type_overrides_default() {
    let custom = vec![("Content-Type".to_owned(), "text/plain".to_owned())];
    let headers = build_headers(&custom, None);
    assert_eq!(header(&headers, "Content-Type"), Some("text/plain"));
    assert_eq!(headers.iter().filter(|(n, _)| n.eq_ignore_ascii_case("content-type")).count(), 1);
}

#[test]
fn token_overrides_custom_authorization() {
    let custom = vec![("Authorization".to_owned(), "Basic stale".to_owned())];
    let headers = build_headers(&custom, Some("abc123"));
    assert_eq!(header(&headers, "Authorization"), Some("Bearer abc123"));
    assert_eq!(headers.iter().filter(|(n, _)| n.eq_ignore_ascii_case("authorization")).count(), 1);
}

#[test]
fn authorization_is_merged_last() {
    let custom = vec![("X-Trace".to_owned(), "t-9".to_owned())];
    let headers = build_headers(&custom, Some("abc123"));
    assert_eq!(headers.last().map(|(n, _)| n.as_str()), Some("Authorization"));
}

// =============================================================
// RequestOptions
// =============================================================

#[test]
fn default_options_are_a_bodyless_get() {
    let options = RequestOptions::default();
    assert_eq!(options.method, HttpMethod::Get);
    assert!(options.headers.is_empty());
    assert!(options.body.is_none());
}

#[test]
fn post_options_carry_the_body() {
    let options = RequestOptions::post(serde_json::json!({"category": "Citizen safety"}));
    assert_eq!(options.method, HttpMethod::Post);
    assert_eq!(options.body, Some(serde_json::json!({"category": "Citizen safety"})));
}

#[test]
fn delete_options_have_no_body() {
    let options = RequestOptions::delete();
    assert_eq!(options.method, HttpMethod::Delete);
    assert!(options.body.is_none());
}
