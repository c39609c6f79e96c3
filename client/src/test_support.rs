//! In-memory fakes for the transport and navigation seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::net::api::ApiClient;
use crate::net::config::ApiConfig;
use crate::net::pipeline::{HttpRequest, HttpResponse, TransportError};
use crate::net::transport::Transport;
use crate::util::navigation::Navigator;
use crate::util::session_store::SessionStore;
use crate::util::storage::MemoryStorage;

pub const TEST_BASE_URL: &str = "https://api.test/v1";

/// Replays scripted outcomes in order and records every request sent.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, error: TransportError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Failed("no scripted response".to_owned())))
    }
}

/// Current path set by the test; records hard redirects.
pub struct RecordingNavigator {
    path: Mutex<String>,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: Mutex::new(path.to_owned()), redirects: Mutex::new(Vec::new()) }
    }

    /// Simulate in-app navigation.
    pub fn go_to(&self, path: &str) {
        *self.path.lock().unwrap() = path.to_owned();
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }

    fn hard_redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_owned());
    }
}

/// An `ApiClient` wired to fakes, with handles kept for assertions.
pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<ScriptedTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub storage: Arc<MemoryStorage>,
    pub store: SessionStore,
}

impl Harness {
    pub fn at(current_path: &str) -> Self {
        let transport = Arc::new(ScriptedTransport::default());
        let navigator = Arc::new(RecordingNavigator::at(current_path));
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        let client = ApiClient::new(
            ApiConfig::from_base_url(TEST_BASE_URL),
            transport.clone(),
            store.clone(),
            navigator.clone(),
        );
        Self { client, transport, navigator, storage, store }
    }
}

pub fn login_success_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "accessToken": "tok123",
            "user": { "_id": "u1", "email": "a@b.com", "username": "alice", "role": "user" }
        }
    })
}
