//! HTTP transport seam beneath the request gateway.
//!
//! Client-side (hydrate): `FetchTransport` sends through `gloo-net`.
//! Server-side (SSR): `FetchTransport` reports a network failure since these
//! endpoints are only called from the browser.
//!
//! The gateway owns every request decision (URL, headers, body); a transport
//! only moves bytes and reports the status code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;
use std::future::Future;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum RequestBody {
    Empty,
    Json(String),
    Invalid(String),
}

/// A backend call as API helpers describe it: endpoint-relative, no auth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: RequestBody::Empty }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON body. Encoding failures surface when the call is sent.
    #[must_use]
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = match serde_json::to_string(body) {
            Ok(json) => RequestBody::Json(json),
            Err(e) => RequestBody::Invalid(e.to_string()),
        };
        self
    }

    /// The encoded JSON body, or the encode error.
    pub fn body(&self) -> Result<Option<&str>, &str> {
        match &self.body {
            RequestBody::Empty => Ok(None),
            RequestBody::Json(json) => Ok(Some(json)),
            RequestBody::Invalid(e) => Err(e),
        }
    }
}

/// Exactly what goes on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("no response: {0}")]
    NoResponse(String),
}

pub trait Transport {
    /// Send once. `Err` only when no HTTP response arrived.
    fn send(&self, request: &PreparedRequest) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method as HttpMethod, RequestBuilder};

            let method = match request.method {
                Method::Get => HttpMethod::GET,
                Method::Post => HttpMethod::POST,
                Method::Put => HttpMethod::PUT,
                Method::Delete => HttpMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url)
                .method(method)
                .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match &request.body {
                Some(body) => builder.body(body.as_str()),
                None => builder.build(),
            }
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;

            let resp = built.send().await.map_err(|e| TransportError::NoResponse(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::NoResponse(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::NoResponse("not available on server".to_owned()))
        }
    }
}
