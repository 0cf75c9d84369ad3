use serde_json::{json, Value};

use rheum_core::models::consult::Likelihood;

/// Name of the tool the model is forced to call with its answer.
pub const CONSULT_TOOL_NAME: &str = "record_consult";

pub const CONSULT_TOOL_DESCRIPTION: &str =
    "Record the differential diagnosis list, the SOAP consult note and the clinical pearls.";

/// JSON Schema for `ConsultResponse`. Every member is required.
pub fn consult_response_schema() -> Value {
    let likelihoods: Vec<&str> = Likelihood::ALL.iter().map(|l| l.label()).collect();

    json!({
        "type": "object",
        "properties": {
            "differentials": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "condition": { "type": "string" },
                        "likelihood": { "type": "string", "enum": likelihoods },
                        "reasoning": { "type": "string" },
                        "keyTests": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["condition", "likelihood", "reasoning", "keyTests"]
                }
            },
            "consultNote": {
                "type": "string",
                "description": "A full SOAP note text block with clear line breaks between sections"
            },
            "suggestedPlan": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of safety checks and clinical pearls"
            }
        },
        "required": ["differentials", "consultNote", "suggestedPlan"]
    })
}
