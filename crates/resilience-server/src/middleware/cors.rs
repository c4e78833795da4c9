// SPDX-License-Identifier: Apache-2.0

//! Single-origin CORS policy.
//!
//! Allowed origins get every method and every requested header, with
//! credentials. Non-preflight requests are always served; only the response
//! headers differ by origin.

use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub(crate) const PREFLIGHT_ALLOW_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
pub(crate) const PREFLIGHT_MAX_AGE_SECS: &str = "600";
pub(crate) const DISALLOWED_ORIGIN_BODY: &str = "Disallowed CORS origin";

fn origin_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn is_preflight(req: &Request<Body>) -> bool {
    req.method() == Method::OPTIONS && req.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

fn insert_allow_origin(headers: &mut HeaderMap, origin: &str) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, v);
        headers.insert(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
    headers.append(VARY, HeaderValue::from_static("Origin"));
}

pub(crate) fn preflight_response(
    origin: &str,
    allowed: bool,
    requested_headers: Option<HeaderValue>,
) -> Response {
    if !allowed {
        let mut resp = (StatusCode::BAD_REQUEST, DISALLOWED_ORIGIN_BODY).into_response();
        resp.headers_mut()
            .append(VARY, HeaderValue::from_static("Origin"));
        return resp;
    }
    let mut resp = (StatusCode::OK, "OK").into_response();
    let headers = resp.headers_mut();
    insert_allow_origin(headers, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(PREFLIGHT_ALLOW_METHODS),
    );
    if let Some(requested) = requested_headers {
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested);
    }
    headers.insert(
        ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS),
    );
    resp
}

pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(origin) = origin_header(req.headers()) else {
        return next.run(req).await;
    };
    let allowed = state.config.origin_allowed(&origin);

    if is_preflight(&req) {
        let requested_headers = req.headers().get(ACCESS_CONTROL_REQUEST_HEADERS).cloned();
        return preflight_response(&origin, allowed, requested_headers);
    }

    let mut resp = next.run(req).await;
    if allowed {
        insert_allow_origin(resp.headers_mut(), &origin);
    }
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_preflight_echoes_requested_headers() {
        let resp = preflight_response(
            "http://localhost:3000",
            true,
            Some(HeaderValue::from_static("content-type,x-custom")),
        );
        assert_eq!(resp.status(), StatusCode::OK);
        let h = resp.headers();
        assert_eq!(h[ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
        assert_eq!(h[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(h[ACCESS_CONTROL_ALLOW_METHODS], PREFLIGHT_ALLOW_METHODS);
        assert_eq!(h[ACCESS_CONTROL_ALLOW_HEADERS], "content-type,x-custom");
        assert_eq!(h[ACCESS_CONTROL_MAX_AGE], "600");
    }

    #[test]
    fn disallowed_preflight_is_rejected_without_allow_origin() {
        let resp = preflight_response("http://evil.test", false, None);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
