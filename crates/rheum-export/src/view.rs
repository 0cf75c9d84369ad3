use serde::Serialize;

use rheum_core::models::consult::{ConsultResponse, DiagnosisCandidate, Likelihood};

/// Heading of the plan section in the copied text. Anything pasting the
/// text elsewhere depends on this exact label.
pub const PLAN_HEADING: &str = "[Clinical Pearls & Safety Checks]:";

/// Clipboard export of a response: the note, a blank line, the labeled plan.
///
/// The format is fixed: `"{note}\n\n[Clinical Pearls & Safety Checks]:\n- a\n- b"`.
/// An empty plan leaves the heading as the last line.
pub fn copy_text(response: &ConsultResponse) -> String {
    let plan = response
        .suggested_plan
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{PLAN_HEADING}\n{plan}", response.consult_note)
}

/// Differentials sharing one likelihood, in response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikelihoodTier {
    pub likelihood: Likelihood,
    pub label: &'static str,
    pub entries: Vec<DiagnosisCandidate>,
}

/// Read-only presentation model of a [`ConsultResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub differentials: Vec<DiagnosisCandidate>,
    /// Highest tier first; empty tiers are left out.
    pub tiers: Vec<LikelihoodTier>,
    /// Verbatim, whitespace included.
    pub note: String,
    pub plan: Vec<String>,
    pub copy_text: String,
}

impl ResultView {
    pub fn from_response(response: &ConsultResponse) -> Self {
        let tiers = Likelihood::ALL
            .into_iter()
            .filter_map(|likelihood| {
                let entries: Vec<_> = response
                    .differentials
                    .iter()
                    .filter(|d| d.likelihood == likelihood)
                    .cloned()
                    .collect();
                (!entries.is_empty()).then(|| LikelihoodTier {
                    likelihood,
                    label: likelihood.label(),
                    entries,
                })
            })
            .collect();

        Self {
            differentials: response.differentials.clone(),
            tiers,
            note: response.consult_note.clone(),
            plan: response.suggested_plan.clone(),
            copy_text: copy_text(response),
        }
    }
}
