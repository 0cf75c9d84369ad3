use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The model's structured answer to one intake submission.
///
/// No field carries a serde default: a reply missing any member is rejected
/// rather than filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConsultResponse {
    pub differentials: Vec<DiagnosisCandidate>,
    /// SOAP note text; whitespace is significant.
    pub consult_note: String,
    /// Clinical pearls and safety checks for the clinician.
    pub suggested_plan: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisCandidate {
    pub condition: String,
    pub likelihood: Likelihood,
    pub reasoning: String,
    pub key_tests: Vec<String>,
}

/// Likelihood tier of a differential. Orders `High > Moderate > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Likelihood {
    High,
    Moderate,
    Low,
}

impl Likelihood {
    /// Highest tier first.
    pub const ALL: [Likelihood; 3] = [Self::High, Self::Moderate, Self::Low];

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::High => 2,
            Self::Moderate => 1,
            Self::Low => 0,
        }
    }
}

impl PartialOrd for Likelihood {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Likelihood {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}
