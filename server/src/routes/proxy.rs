//! `/api/*` reverse proxy to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this server. Application and auth calls under
//! `/api` are forwarded to `NEXT_PUBLIC_API_URL` with the same path, query,
//! method, body and cookies, and the backend's status, headers (including
//! `Set-Cookie`) and body are returned unchanged.
//!
//! Hop-by-hop headers are dropped in both directions. Each forwarded request
//! has the configured timeout; a timeout is a 504, any other transport failure
//! a 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::{self, HeaderName};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// `ANY /api/{*path}`: forward to the backend.
///
/// # Errors
///
/// Returns a [`ProxyError`] when the body is rejected, the backend cannot be
/// reached, or it does not answer in time.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(&state.config.api_url, parts.uri.path(), parts.uri.query())?;
    let body = to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    tracing::debug!(method = %parts.method, %url, "forwarding api request");
    let upstream = state
        .http
        .request(parts.method.clone(), url.clone())
        .headers(headers)
        .body(body)
        .timeout(state.config.proxy_timeout)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(method = %parts.method, %url, error = %e, "upstream request failed");
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_by_hop(&mut response_headers);
    response_headers.remove(header::CONTENT_LENGTH);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

/// Join the backend base with the incoming path and query.
///
/// # Errors
///
/// Returns [`ProxyError::InvalidUrl`] if the joined string is not a URL.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Result<reqwest::Url, ProxyError> {
    let raw = match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}{path}?{q}"),
        None => format!("{base}{path}"),
    };
    reqwest::Url::parse(&raw).map_err(|e| ProxyError::InvalidUrl(format!("{raw}: {e}")))
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();
    for name in listed {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}
