use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use rheum_core::models::consult::ConsultResponse;
use rheum_core::session::SessionSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

async fn current_response(state: &AppState) -> Result<ConsultResponse, ApiError> {
    state
        .session
        .lock()
        .await
        .view()
        .response()
        .cloned()
        .ok_or_else(|| ApiError::NotFound("no assessment result to show".to_string()))
}

/// Leave the result screen. The form keeps its values.
pub async fn back(State(state): State<AppState>) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut session = state.session.lock().await;
    session.back()?;
    Ok(Json(session.snapshot()))
}

pub async fn copy_text(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let response = current_response(&state).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        rheum_export::view::copy_text(&response),
    ))
}

pub async fn render_html(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let response = current_response(&state).await?;
    Ok(Html(rheum_export::render::render_html(&response)?))
}
