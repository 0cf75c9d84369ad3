use rheum_bedrock::prompt::build_prompt;
use rheum_core::intake::{FieldUpdate, IntakeForm};
use rheum_core::models::intake::{
    ClinicalFlag, ClinicalIntakeRecord, Gender, JointPattern, OnsetSpeed, OutputLanguage,
};

fn scenario_record() -> ClinicalIntakeRecord {
    let mut form = IntakeForm::new();
    form.update(FieldUpdate::Age("45".into()));
    form.update(FieldUpdate::Gender(Gender::Female));
    form.update(FieldUpdate::JointPattern(JointPattern::Mono));
    form.update(FieldUpdate::OnsetSpeed(OnsetSpeed::Acute));
    form.toggle_flag(ClinicalFlag::Fever);
    form.submit()
}

#[test]
fn scenario_fields_appear_in_prompt() {
    let prompt = build_prompt(&scenario_record());

    assert!(prompt.contains("Age: 45"));
    assert!(prompt.contains("Gender: Female"));
    assert!(prompt.contains("Fever: Yes"));
    assert!(prompt.contains("Joint Pattern: Monoarticular"));
    assert!(prompt.contains("Onset: Acute (<6 weeks)"));
}

#[test]
fn every_flag_is_rendered_yes_or_no() {
    let mut record = ClinicalIntakeRecord::default();
    record.signs.psoriasis = true;
    let prompt = build_prompt(&record);

    for flag in ClinicalFlag::ALL {
        let expected = if flag == ClinicalFlag::Psoriasis { "Yes" } else { "No" };
        let line = format!("- {}: {}\n", flag.prompt_label(), expected);
        assert!(prompt.contains(&line), "missing line {line:?}");
    }
}

#[test]
fn empty_fields_render_as_placeholders_or_blank() {
    let prompt = build_prompt(&ClinicalIntakeRecord::default());

    assert!(prompt.contains("- Age: Unknown\n"));
    assert!(prompt.contains("- Affected Joints: Unspecified\n"));
    assert!(prompt.contains("- Other Signs: \n"));
    assert!(prompt.contains("- Medications: \n"));
    assert!(prompt.contains("- Comorbidities: \n"));
    assert!(prompt.contains("- Relevant Labs/Vitals: \n"));
}

#[test]
fn free_text_is_passed_through_unchanged() {
    let mut record = ClinicalIntakeRecord::default();
    record.age = "about fifty".into();
    record.affected_joints = vec!["MTP 1 (Right)".into(), "Knee (Left)".into()];
    record.medications = "Diuretics (Thiazide/Loop), Aspirin (Low dose)".into();
    record.labs = "CRP 8.2, Uric acid 9.1".into();
    let prompt = build_prompt(&record);

    assert!(prompt.contains("- Age: about fifty\n"));
    assert!(prompt.contains("- Affected Joints: MTP 1 (Right), Knee (Left)\n"));
    assert!(prompt.contains("- Medications: Diuretics (Thiazide/Loop), Aspirin (Low dose)\n"));
    assert!(prompt.contains("- Relevant Labs/Vitals: CRP 8.2, Uric acid 9.1\n"));
}

#[test]
fn output_language_is_passed_as_instruction() {
    let mut record = ClinicalIntakeRecord::default();
    assert!(build_prompt(&record).contains("in Korean."));

    record.output_language = OutputLanguage::English;
    assert!(build_prompt(&record).contains("in English."));
}

#[test]
fn formatting_instructions_are_always_present() {
    let prompt = build_prompt(&ClinicalIntakeRecord::default());

    assert!(prompt.contains("SOAP"));
    assert!(prompt.contains("TWO blank lines"));
    assert!(prompt.contains("\"Problem List\""));
    assert!(prompt.contains("1-2 sentence narrative"));
    assert!(prompt.contains("HLA-B*5801"));
    assert!(prompt.contains("allopurinol"));
}

#[test]
fn prompt_is_deterministic() {
    let record = scenario_record();
    assert_eq!(build_prompt(&record), build_prompt(&record));
}
