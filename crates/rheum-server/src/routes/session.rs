use axum::Json;
use axum::extract::State;
use tracing::info;

use rheum_core::session::SessionSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}

/// Tear the view down to an empty intake. An outstanding assessment is not
/// cancelled; its result is discarded when it arrives, and submit stays
/// rejected until then.
pub async fn abandon(State(state): State<AppState>) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut session = state.session.lock().await;
    let was = session.view().phase();
    session.abandon()?;
    info!(from = was, "session abandoned");
    Ok(Json(session.snapshot()))
}
