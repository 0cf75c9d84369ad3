//! Calls the real Bedrock Converse API. Needs AWS credentials with Bedrock
//! access; run with `cargo test -p rheum-bedrock --test live -- --ignored`.

use rheum_bedrock::client::AssessmentClient;
use rheum_bedrock::converse::BedrockInvoker;
use rheum_core::models::intake::{ClinicalIntakeRecord, Gender, OutputLanguage};

const MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

#[tokio::test]
#[ignore = "calls AWS Bedrock"]
async fn live_gout_scenario_conforms_to_schema() {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let model_id = std::env::var("RHEUM_MODEL_ID").unwrap_or_else(|_| MODEL_ID.to_string());
    let client = AssessmentClient::new(std::sync::Arc::new(BedrockInvoker::new(&config, model_id)));

    let mut record = ClinicalIntakeRecord::default();
    record.age = "58".into();
    record.gender = Gender::Male;
    record.output_language = OutputLanguage::English;
    record.signs.redness = true;
    record.signs.joint_edema = true;
    record.affected_joints = vec!["MTP 1 (Right)".into()];
    record.medications = "Diuretics (Thiazide/Loop)".into();

    let response = client.request_assessment(&record).await.unwrap();

    assert!(!response.differentials.is_empty());
    assert!(!response.consult_note.is_empty());
}
