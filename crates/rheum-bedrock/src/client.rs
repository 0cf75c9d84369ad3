use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use uuid::Uuid;

use rheum_core::models::consult::ConsultResponse;
use rheum_core::models::intake::ClinicalIntakeRecord;

use crate::error::AssessmentError;
use crate::invoke::{ModelInvoker, ModelRequest};
use crate::parse::parse_consult_response;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::safety::missing_urate_marker_reminder;
use crate::schema::{consult_response_schema, CONSULT_TOOL_DESCRIPTION, CONSULT_TOOL_NAME};

/// Whole milliseconds in `d` for log fields, saturating at `u64::MAX`.
pub fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Sends intake records to the model and validates the replies.
///
/// One call per request: no retry, no cache, no partial results.
#[derive(Clone)]
pub struct AssessmentClient {
    invoker: Arc<dyn ModelInvoker>,
}

impl AssessmentClient {
    pub fn new(invoker: Arc<dyn ModelInvoker>) -> Self {
        Self { invoker }
    }

    pub fn model_id(&self) -> &str {
        self.invoker.model_id()
    }

    /// Build the model request for a record. Exposed so callers can inspect
    /// exactly what will be sent.
    pub fn build_request(record: &ClinicalIntakeRecord) -> ModelRequest {
        ModelRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            prompt: build_prompt(record),
            schema: consult_response_schema(),
            tool_name: CONSULT_TOOL_NAME.to_string(),
            tool_description: CONSULT_TOOL_DESCRIPTION.to_string(),
        }
    }

    pub async fn request_assessment(
        &self,
        record: &ClinicalIntakeRecord,
    ) -> Result<ConsultResponse, AssessmentError> {
        let request_id = Uuid::new_v4();
        let model_id = self.invoker.model_id();
        let request = Self::build_request(record);
        let started = Instant::now();

        info!(%request_id, model_id, "requesting assessment");

        let outcome = match self.invoker.invoke(&request).await {
            Ok(reply) => {
                if let Some(usage) = reply.usage {
                    info!(
                        %request_id,
                        input_tokens = usage.input,
                        output_tokens = usage.output,
                        total_tokens = usage.total(),
                        "token usage"
                    );
                }
                parse_consult_response(reply.text.as_deref())
            }
            Err(e) => Err(e),
        };

        let elapsed_ms = duration_ms(started.elapsed());

        match &outcome {
            Ok(response) => {
                if missing_urate_marker_reminder(response) {
                    warn!(%request_id, "gout in differential without HLA-B*5801 reminder");
                }
                info!(
                    %request_id,
                    elapsed_ms,
                    differentials = response.differentials.len(),
                    "assessment complete"
                );
            }
            Err(e) => {
                warn!(%request_id, elapsed_ms, kind = e.kind(), error = %e, "assessment failed");
            }
        }

        outcome
    }
}
