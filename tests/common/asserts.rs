use cors_gate::constants::header;
use cors_gate::{CorsDecision, Headers};

use super::headers::{header_value, vary_values};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    assert!(decision.is_cross_origin, "expected a cross-origin request");
    assert!(!decision.is_preflight, "expected a simple request, got {decision:?}");
    assert!(decision.origin_allowed, "expected origin to be allowed");
    assert!(!decision.terminate, "simple requests must not terminate");
    decision.headers
}

/// Returns the headers, status and terminate flag of an allowed preflight.
pub fn assert_preflight(decision: CorsDecision) -> (Headers, Option<u16>, bool) {
    assert!(decision.is_preflight, "expected a preflight, got {decision:?}");
    assert!(decision.origin_allowed, "expected origin to be allowed");
    (decision.headers, decision.status, decision.terminate)
}

pub fn assert_forbidden(decision: &CorsDecision) {
    assert!(decision.is_cross_origin);
    assert!(!decision.origin_allowed);
    assert_eq!(decision.status, Some(403));
    assert!(!decision.terminate, "rejected origins must not terminate");
    assert_no_cors_headers(&decision.headers);
}

pub fn assert_no_cors_headers(headers: &Headers) {
    let leaked: Vec<_> = headers
        .iter()
        .filter(|entry| {
            entry
                .name
                .to_ascii_lowercase()
                .starts_with("access-control-")
        })
        .collect();
    assert!(leaked.is_empty(), "unexpected CORS headers: {leaked:?}");
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(header_value(headers, name), Some(expected), "header {name}");
}

pub fn assert_vary_eq<I, S>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: Vec<String> = expected.into_iter().map(Into::into).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        vary_values(headers).is_empty(),
        "expected no Vary entries, got {:?}",
        headers.get_all(header::VARY).collect::<Vec<_>>()
    );
}
