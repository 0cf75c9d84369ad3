use rheum_core::models::consult::ConsultResponse;

use crate::error::AssessmentError;

/// Payload assumed when the service returns no text at all. It never
/// satisfies the schema, so an empty reply always ends as a parse error.
pub const EMPTY_REPLY: &str = "{}";

/// Validate the model's reply text into a [`ConsultResponse`].
///
/// Strict: a missing member, a wrong type, or a likelihood outside
/// `High`/`Moderate`/`Low` is a [`AssessmentError::Parse`].
pub fn parse_consult_response(text: Option<&str>) -> Result<ConsultResponse, AssessmentError> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => EMPTY_REPLY,
    };

    serde_json::from_str(text).map_err(|e| AssessmentError::Parse(e.to_string()))
}
