//! Session driver: runs one assessment off the request path and applies the
//! outcome to the session when it arrives.

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use rheum_bedrock::error::AssessmentError;
use rheum_core::error::CoreError;
use rheum_core::session::Submission;

use crate::state::AppState;

/// Run the assessment for `submission` on a tokio task.
pub fn spawn_assessment(state: AppState, submission: Submission) -> JoinHandle<()> {
    tokio::spawn(run_assessment(state, submission))
}

async fn run_assessment(state: AppState, submission: Submission) {
    let Submission { ticket, record } = submission;

    let call = state.client.request_assessment(&record);
    let outcome = match state.request_timeout {
        Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
            Err(AssessmentError::Transport(format!(
                "no reply from the model within {} seconds",
                limit.as_secs()
            )))
        }),
        None => call.await,
    };

    let outcome = outcome.map_err(|e| e.banner());
    let succeeded = outcome.is_ok();

    let mut session = state.session.lock().await;
    match session.complete(ticket, outcome) {
        Ok(()) => info!(%ticket, succeeded, "assessment applied"),
        // The view was abandoned. The ticket is released, the outcome dropped.
        Err(CoreError::StaleTicket(_)) => debug!(%ticket, "discarding stale assessment"),
        Err(e) => warn!(%ticket, error = %e, "could not apply assessment"),
    }
}
