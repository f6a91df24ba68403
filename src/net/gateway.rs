//! The shared request gateway every backend call goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! API helpers build an `ApiRequest`; the gateway resolves it against the
//! configured base URL, attaches the session's bearer token, sends it once,
//! unwraps the configured response contract and decodes the payload.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported exactly once here: one toast, one log line. A
//! 401 additionally clears the session and asks the router for `/login`. The
//! classified error is then returned so the caller can reset local UI state.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{ApiRequest, FetchTransport, PreparedRequest, RawResponse, Transport};
use super::types::Envelope;
use crate::config::{ClientConfig, ResponseContract};
use crate::nav::routes::LOGIN_PATH;
use crate::state::notices::Notices;
use crate::state::redirect::Redirector;
use crate::state::session::SessionStore;

/// Gateway over the browser transport, as provided in context.
pub type ApiClient = Gateway<FetchTransport>;

#[derive(Clone)]
pub struct Gateway<T> {
    transport: T,
    base_url: String,
    contract: ResponseContract,
    session: SessionStore,
    notices: Notices,
    redirect: Redirector,
}

impl<T: Transport> Gateway<T> {
    pub fn new(
        transport: T,
        config: &ClientConfig,
        session: SessionStore,
        notices: Notices,
        redirect: Redirector,
    ) -> Self {
        Self {
            transport,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            contract: config.response_contract,
            session,
            notices,
            redirect,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn notices(&self) -> Notices {
        self.notices
    }

    /// Resolve URL and attach headers. Reads the token at call time.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` when the request body failed to serialize.
    pub fn prepare(&self, request: &ApiRequest) -> Result<PreparedRequest, ApiError> {
        let body = request.body().map_err(|e| ApiError::Encode(e.to_owned()))?;

        let mut headers = Vec::new();
        let token = self.session.token();
        if !token.is_empty() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }

        Ok(PreparedRequest {
            method: request.method,
            url: join_url(&self.base_url, &request.path),
            query: request.query.clone(),
            headers,
            body: body.map(str::to_owned),
        })
    }

    /// Send `request` once and decode the unwrapped payload.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` after it has been reported.
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.send_with(request, decode).await
    }

    /// Like `send`, with a caller-supplied decoder for the unwrapped payload.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` after it has been reported.
    pub async fn send_with<R, F>(&self, request: ApiRequest, decoder: F) -> Result<R, ApiError>
    where
        F: FnOnce(Value) -> Result<R, ApiError>,
    {
        let result = match self.prepare(&request) {
            Ok(prepared) => match self.transport.send(&prepared).await {
                Ok(raw) => unwrap_payload(self.contract, &raw).and_then(decoder),
                Err(e) => Err(ApiError::Network(e.to_string())),
            },
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            self.report(&request, e);
        }
        result
    }

    fn report(&self, request: &ApiRequest, error: &ApiError) {
        if error.is_server_fault() {
            leptos::logging::error!("{} {} failed: {error}", request.method, request.path);
        } else {
            leptos::logging::warn!("{} {} failed: {error}", request.method, request.path);
        }
        self.notices.error(error.notice_message());
        if error.is_unauthorized() {
            self.session.logout();
            self.redirect.request(LOGIN_PATH);
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Strip transport wrapping from a response, per the configured contract.
fn unwrap_payload(contract: ResponseContract, raw: &RawResponse) -> Result<Value, ApiError> {
    if let Some(error) = ApiError::from_status(raw.status, &raw.body) {
        return Err(error);
    }

    let body = raw.body.trim();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?
    };

    match contract {
        ResponseContract::Bare => Ok(value),
        ResponseContract::Enveloped => {
            let envelope: Envelope = serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
            if envelope.success {
                Ok(envelope.data)
            } else {
                Err(ApiError::Rejected {
                    code: envelope.code.map(|code| match code {
                        Value::String(s) => s,
                        other => other.to_string(),
                    }),
                    message: envelope.message.unwrap_or_else(|| "Request rejected.".to_owned()),
                })
            }
        }
    }
}

fn decode<R: DeserializeOwned>(payload: Value) -> Result<R, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
