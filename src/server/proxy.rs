//! Same-origin `/api/*` forwarder.
//!
//! Method, path, query, body and the auth/content headers pass through
//! verbatim; the upstream status and body come back unchanged so the
//! browser-side gateway classifies errors exactly as it would against the
//! backend directly.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body: {0}")]
    Body(String),
    #[error("upstream: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

#[derive(Clone)]
pub struct ApiProxy {
    client: reqwest::Client,
    upstream: Arc<str>,
}

impl ApiProxy {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(upstream: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let upstream: String = upstream.into();
        Ok(Self { client, upstream: upstream.trim_end_matches('/').into() })
    }

    pub fn router(self) -> Router {
        Router::new().route("/api/{*rest}", any(forward)).with_state(self)
    }
}

/// Upstream URL for a request to `/api/{rest}?{query}`.
pub(crate) fn upstream_url(upstream: &str, rest: &str, query: Option<&str>) -> String {
    let base = upstream.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{rest}?{q}"),
        None => format!("{base}/{rest}"),
    }
}

/// Headers copied from the browser request onto the upstream request.
pub(crate) fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = headers.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

async fn forward(
    State(proxy): State<ApiProxy>,
    Path(rest): Path<String>,
    req: Request<Body>,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&proxy.upstream, &rest, req.uri().query());
    let method = req.method().clone();
    let headers = forwarded_headers(req.headers());
    let body = to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(%method, %url, "proxying api request");
    let upstream = proxy
        .client
        .request(method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
