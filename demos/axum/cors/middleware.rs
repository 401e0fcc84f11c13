use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::{CorsMiddleware, Headers, RequestContext, constants::header};

pub type SharedCors = Arc<CorsMiddleware>;

/// Runs the CORS decision in front of the wrapped routes.
///
/// A rejected origin still reaches the handler; its response is then forced to `403`
/// and carries no CORS headers.
pub async fn cors_middleware(
    State(cors): State<SharedCors>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        // Lossy so an `Origin` with obs-text bytes is still evaluated (and denied).
        let origin = request
            .headers()
            .get(header::ORIGIN)
            .map(|value| String::from_utf8_lossy(value.as_bytes()));
        cors.check(&RequestContext::new(
            request.method().as_str(),
            origin.as_deref(),
        ))
    };

    if decision.terminate {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = status_code(decision.status);
        append_headers(response.headers_mut(), &decision.headers);
        return response;
    }

    let mut response = next.run(request).await;
    if decision.status.is_some() {
        *response.status_mut() = status_code(decision.status);
    }
    append_headers(response.headers_mut(), &decision.headers);
    response
}

fn status_code(status: Option<u16>) -> StatusCode {
    status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::NO_CONTENT)
}

// `append`, not `insert`: `Vary` arrives as separate entries.
fn append_headers(map: &mut HeaderMap, headers: &Headers) {
    for entry in headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(entry.name.as_str()),
            HeaderValue::from_str(&entry.value),
        ) {
            map.append(name, value);
        }
    }
}
