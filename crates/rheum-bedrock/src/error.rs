use thiserror::Error;

/// Message shown when the reply could not be used.
pub const GENERIC_FAILURE: &str = "Failed to generate assessment.";

#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The external call could not be completed (network, auth, quota,
    /// timeout).
    #[error("model invocation failed: {0}")]
    Transport(String),

    /// A reply arrived but was not valid JSON or did not match the consult
    /// response schema.
    #[error("response did not conform to expected schema: {0}")]
    Parse(String),
}

impl AssessmentError {
    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Parse(_) => "parse",
        }
    }

    /// Single-line text for the banner over the intake form.
    pub fn banner(&self) -> String {
        match self {
            Self::Transport(_) => self
                .to_string()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" "),
            Self::Parse(_) => GENERIC_FAILURE.to_string(),
        }
    }
}
