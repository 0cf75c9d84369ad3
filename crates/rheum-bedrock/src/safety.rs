//! Local checks on a validated reply. These only inform logging; the reply
//! is never altered.

use rheum_core::models::consult::ConsultResponse;

const GOUT_TERMS: &[&str] = &["gout", "통풍"];
const MARKER_TERMS: &[&str] = &["hla-b5801", "hla-b*5801", "hla-b*58:01", "hla-b 5801"];

fn mentions(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|n| haystack.contains(n))
}

/// True when gout is in the differential but neither the note nor the plan
/// mentions checking HLA-B*5801 before allopurinol.
pub fn missing_urate_marker_reminder(response: &ConsultResponse) -> bool {
    let gout_suspected = response
        .differentials
        .iter()
        .any(|d| mentions(&d.condition, GOUT_TERMS));
    if !gout_suspected {
        return false;
    }

    let in_note = mentions(&response.consult_note, MARKER_TERMS);
    let in_plan = response
        .suggested_plan
        .iter()
        .any(|p| mentions(p, MARKER_TERMS));
    !(in_note || in_plan)
}
