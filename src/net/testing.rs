//! Scripted transport and gateway fixtures shared by network tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::gateway::Gateway;
use super::transport::{PreparedRequest, RawResponse, Transport, TransportError};
use crate::config::{ClientConfig, ResponseContract};
use crate::state::notices::Notices;
use crate::state::redirect::Redirector;
use crate::state::session::{MemoryStorage, SessionStorage, SessionStore};

/// Replays queued replies and records every request it was handed.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<RawResponse, TransportError>>>>,
    seen: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(Err(TransportError::NoResponse(reason.to_owned())));
        self
    }

    pub fn seen(&self) -> Vec<PreparedRequest> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        self.seen.lock().expect("seen lock").push(request.clone());
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::NoResponse("no scripted reply".to_owned())))
    }
}

pub struct Fixture {
    pub gateway: Gateway<ScriptedTransport>,
    pub transport: ScriptedTransport,
    pub storage: Arc<MemoryStorage>,
    pub session: SessionStore,
    pub notices: Notices,
    pub redirect: Redirector,
}

pub fn fixture(contract: ResponseContract) -> Fixture {
    let transport = ScriptedTransport::default();
    let storage = Arc::new(MemoryStorage::default());
    let backend: Arc<dyn SessionStorage> = storage.clone();
    let session = SessionStore::new(backend);
    session.restore();
    let notices = Notices::new();
    let redirect = Redirector::new();
    let config = ClientConfig { response_contract: contract, ..ClientConfig::default() };
    let gateway = Gateway::new(transport.clone(), &config, session.clone(), notices, redirect);
    Fixture { gateway, transport, storage, session, notices, redirect }
}

pub fn user_json(id: i64, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "username": "alice",
        "email": "alice@example.com",
        "role": role
    })
}
