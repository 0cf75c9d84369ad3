use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use rheum_core::intake::FieldUpdate;
use rheum_core::models::intake::ClinicalFlag;
use rheum_core::session::SessionSnapshot;

use crate::assessment::spawn_assessment;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JointToggle {
    joint: String,
}

#[derive(Deserialize)]
pub struct MedicationSuggestion {
    suggestion: String,
}

#[derive(Serialize)]
pub struct SubmitAccepted {
    ticket: Uuid,
}

pub async fn update_field(
    State(state): State<AppState>,
    Json(update): Json<FieldUpdate>,
) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.form_mut().update(update);
    Json(session.snapshot())
}

pub async fn toggle_flag(
    State(state): State<AppState>,
    Path(flag): Path<ClinicalFlag>,
) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.form_mut().toggle_flag(flag);
    Json(session.snapshot())
}

pub async fn toggle_joint(
    State(state): State<AppState>,
    Json(body): Json<JointToggle>,
) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.form_mut().toggle_joint(&body.joint);
    Json(session.snapshot())
}

pub async fn append_medication(
    State(state): State<AppState>,
    Json(body): Json<MedicationSuggestion>,
) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.form_mut().append_medication(&body.suggestion);
    Json(session.snapshot())
}

pub async fn reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.reset_form();
    Json(session.snapshot())
}

/// Start an assessment of the current form. `409` while one is outstanding.
pub async fn submit(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SubmitAccepted>), ApiError> {
    let submission = state.session.lock().await.begin_submission()?;
    let ticket = submission.ticket;

    info!(%ticket, model_id = state.client.model_id(), "assessment submitted");
    spawn_assessment(state, submission);

    Ok((StatusCode::ACCEPTED, Json(SubmitAccepted { ticket })))
}
