//! Allow-list CORS enforcement
//!
//! An empty allow-list permits every origin. Allowed origins are echoed back
//! (falling back to `*` when the request carries none); `OPTIONS` preflights
//! short-circuit with 204 and never reach the handlers.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

pub async fn enforce(allow_origins: Arc<Vec<String>>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let allowed =
        allow_origins.is_empty() || allow_origins.iter().any(|candidate| candidate == &origin);
    let preflight = request.method() == Method::OPTIONS;

    let mut response = if preflight {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    if allowed {
        let echoed = if origin.is_empty() { "*" } else { origin.as_str() };
        let origin_value =
            HeaderValue::from_str(echoed).unwrap_or_else(|_| HeaderValue::from_static("*"));

        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
        headers.insert(header::VARY, HeaderValue::from_static("Origin"));
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
    }

    response
}
