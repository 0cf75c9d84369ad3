use rheum_core::models::consult::{ConsultResponse, Likelihood};
use rheum_core::models::intake::{ClinicalFlag, ClinicalIntakeRecord};

#[test]
fn intake_record_uses_flat_camel_case_fields() {
    let mut record = ClinicalIntakeRecord::default();
    record.signs.morning_stiffness = true;
    record.affected_joints.push("PIPs".into());

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["morningStiffness"], true);
    assert_eq!(value["dryEyeMouth"], false);
    assert_eq!(value["jointPattern"], "Mono");
    assert_eq!(value["onsetSpeed"], "Acute");
    assert_eq!(value["outputLanguage"], "Korean");
    assert_eq!(value["affectedJoints"][0], "PIPs");
    assert!(value.get("signs").is_none());

    let back: ClinicalIntakeRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn intake_record_rejects_values_outside_closed_enums() {
    let mut value = serde_json::to_value(ClinicalIntakeRecord::default()).unwrap();
    value["gender"] = "Unknown".into();
    assert!(serde_json::from_value::<ClinicalIntakeRecord>(value).is_err());
}

#[test]
fn clinical_flag_names_match_record_fields() {
    let record = serde_json::to_value(ClinicalIntakeRecord::default()).unwrap();
    for flag in ClinicalFlag::ALL {
        let name = serde_json::to_value(flag).unwrap();
        let name = name.as_str().unwrap();
        assert!(record.get(name).is_some(), "{name} is not a record field");
    }
    assert_eq!(ClinicalFlag::ALL.len(), 17);
}

#[test]
fn likelihood_orders_high_above_low() {
    assert!(Likelihood::High > Likelihood::Moderate);
    assert!(Likelihood::Moderate > Likelihood::Low);
    let mut tiers = vec![Likelihood::Low, Likelihood::High, Likelihood::Moderate];
    tiers.sort_by(|a, b| b.cmp(a));
    assert_eq!(tiers, Likelihood::ALL.to_vec());
}

#[test]
fn consult_response_reads_camel_case_members() {
    let json = r####"{
        "differentials": [
            {"condition": "Gout", "likelihood": "High", "reasoning": "MTP 1", "keyTests": ["Uric acid", "Arthrocentesis"]}
        ],
        "consultNote": "### Subjective\n...",
        "suggestedPlan": ["Check eGFR"]
    }"####;
    let response: ConsultResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.differentials[0].likelihood, Likelihood::High);
    assert_eq!(response.differentials[0].key_tests, vec!["Uric acid", "Arthrocentesis"]);
    assert_eq!(response.suggested_plan, vec!["Check eGFR"]);
}

#[test]
fn consult_response_rejects_unknown_likelihood() {
    let json = r#"{
        "differentials": [
            {"condition": "Gout", "likelihood": "Severe", "reasoning": "", "keyTests": []}
        ],
        "consultNote": "",
        "suggestedPlan": []
    }"#;
    assert!(serde_json::from_str::<ConsultResponse>(json).is_err());
}
