use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use rheum_bedrock::client::AssessmentClient;
use rheum_core::session::Session;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub client: AssessmentClient,
    pub request_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(client: AssessmentClient, request_timeout: Option<Duration>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            client,
            request_timeout,
        }
    }
}
