//! Prompt construction for the consult request.
//!
//! [`build_prompt`] is total and deterministic: every record field is written
//! out, flags as `Yes`/`No`, so two identical records always produce the
//! same text. The formatting rules at the end are instructions to the model
//! only; nothing here checks that the reply follows them.

use std::fmt::Write;

use rheum_core::models::intake::{ClinicalFlag, ClinicalIntakeRecord, SignGroup};

pub const SYSTEM_PROMPT: &str = "\
You are a senior rheumatologist and internal medicine specialist answering an \
inpatient consult about joint pain. Record your answer only through the \
provided tool.";

const TASK: &str = "\
TASK:
1. Provide a differential diagnosis list tailored to rheumatology.
2. Draft a professional, structured medical consult note in SOAP format.
3. Provide a list of \"Clinical Pearls & Safety Checks\": reminders the \
treating doctor might otherwise miss.
";

const NOTE_RULES: &str = "\
[Structure]
- Use clearly separated S, O, A, P sections with Markdown headers \
(e.g. ### Subjective).
- Insert TWO blank lines between each section so they stay visually separated.

[Assessment (A) section]
- Use a \"Problem List\" format, for example:
  #1. [Main symptom/location] (e.g. Rt. MTP pain with heating sense)
      r/o Gout
      r/o CPPD
      r/o Septic arthritis -- [comment on likelihood]

[Plan (P) section]
- Open the Plan with a 1-2 sentence narrative summary/impression \
(e.g. \"This patient was referred for acute Lt. 1st PIP pain... Gout is most \
likely given the clinical presentation...\").
- Then list the specific diagnostic workup and therapeutic plans.
- If gout is suspected: explicitly mention checking HLA-B*5801 before \
starting allopurinol (include the screening/reimbursement context).

[Clinical Pearls & Safety Checks list]
- Do not just repeat orders. List safety checks and pearls that might be missed.
- Example: \"Check creatinine/eGFR before prescribing NSAIDs.\"
- Example: \"Consider colchicine prophylaxis if flares are frequent.\"
- Example: \"Ensure arthrocentesis if septic arthritis is not fully ruled out.\"
";

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

fn write_signs(out: &mut String, record: &ClinicalIntakeRecord, group: SignGroup) {
    for flag in ClinicalFlag::ALL.into_iter().filter(|f| f.group() == group) {
        let _ = writeln!(
            out,
            "- {}: {}",
            flag.prompt_label(),
            yes_no(record.signs.get(flag))
        );
    }
}

/// Render the intake record and the fixed instructions into the user prompt.
pub fn build_prompt(record: &ClinicalIntakeRecord) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("Analyze the following patient data for an inpatient rheumatology consult.\n\n");

    out.push_str("PATIENT DEMOGRAPHICS:\n");
    let _ = writeln!(out, "- Age: {}", or_placeholder(&record.age, "Unknown"));
    let _ = writeln!(out, "- Gender: {}", record.gender.label());
    out.push('\n');

    out.push_str("PATIENT DATA:\n");
    let _ = writeln!(out, "- Joint Pattern: {}", record.joint_pattern.label());
    let _ = writeln!(out, "- Onset: {}", record.onset_speed.label());
    let joints = record.affected_joints.join(", ");
    let _ = writeln!(
        out,
        "- Affected Joints: {}",
        or_placeholder(&joints, "Unspecified")
    );
    out.push('\n');

    out.push_str("CHARACTERISTICS & SIGNS:\n");
    write_signs(&mut out, record, SignGroup::Articular);
    out.push('\n');

    out.push_str("SYSTEMIC / EXTRA-ARTICULAR SIGNS:\n");
    write_signs(&mut out, record, SignGroup::Systemic);
    let _ = writeln!(out, "- Other Signs: {}", record.custom_signs);
    out.push('\n');

    out.push_str("HISTORY & LABS:\n");
    let _ = writeln!(out, "- Medications: {}", record.medications);
    let _ = writeln!(out, "- Comorbidities: {}", record.comorbidities);
    let _ = writeln!(out, "- Relevant Labs/Vitals: {}", record.labs);
    out.push('\n');

    out.push_str(TASK);
    out.push('\n');

    out.push_str("FORMATTING RULES FOR THE CONSULT NOTE (follow strictly):\n");
    let _ = writeln!(
        out,
        "- Language: write the note, differentials and checks in {}.",
        record.output_language.label()
    );
    out.push_str(NOTE_RULES);

    out
}
