use std::sync::{Arc, Mutex};
use std::time::Duration;

use rheum_bedrock::client::{AssessmentClient, duration_ms};
use rheum_bedrock::error::AssessmentError;
use rheum_bedrock::invoke::{BoxFuture, ModelInvoker, ModelReply, ModelRequest, TokenCount};
use rheum_bedrock::schema::CONSULT_TOOL_NAME;
use rheum_core::models::consult::Likelihood;
use rheum_core::models::intake::ClinicalIntakeRecord;

/// Replays a canned result and records every request it sees.
struct StubInvoker {
    reply: Result<ModelReply, String>,
    seen: Mutex<Vec<ModelRequest>>,
}

impl StubInvoker {
    fn replying(text: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(ModelReply {
                text: text.map(str::to_string),
                usage: Some(TokenCount { input: 1200, output: 800 }),
            }),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl ModelInvoker for StubInvoker {
    fn model_id(&self) -> &str {
        "stub-model"
    }

    fn invoke<'a>(
        &'a self,
        request: &'a ModelRequest,
    ) -> BoxFuture<'a, Result<ModelReply, AssessmentError>> {
        self.seen.lock().unwrap().push(request.clone());
        let reply = self.reply.clone().map_err(AssessmentError::Transport);
        Box::pin(async move { reply })
    }
}

const VALID: &str = r####"{
    "differentials": [
        {"condition": "Gout", "likelihood": "High", "reasoning": "Acute MTP 1", "keyTests": ["Arthrocentesis"]}
    ],
    "consultNote": "### Subjective\n...",
    "suggestedPlan": ["Check HLA-B*5801 before allopurinol"]
}"####;

#[tokio::test]
async fn valid_reply_becomes_consult_response() {
    let stub = StubInvoker::replying(Some(VALID));
    let client = AssessmentClient::new(stub.clone());

    let response = client
        .request_assessment(&ClinicalIntakeRecord::default())
        .await
        .unwrap();

    assert_eq!(response.differentials.len(), 1);
    assert_eq!(response.differentials[0].likelihood, Likelihood::High);
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn request_carries_schema_and_forced_tool() {
    let stub = StubInvoker::replying(Some(VALID));
    let client = AssessmentClient::new(stub.clone());
    let mut record = ClinicalIntakeRecord::default();
    record.age = "67".into();

    client.request_assessment(&record).await.unwrap();

    let seen = stub.seen.lock().unwrap();
    let request = &seen[0];
    assert_eq!(request.tool_name, CONSULT_TOOL_NAME);
    assert!(request.prompt.contains("- Age: 67\n"));
    assert_eq!(
        request.schema["required"],
        serde_json::json!(["differentials", "consultNote", "suggestedPlan"])
    );
}

#[tokio::test]
async fn transport_failure_is_not_retried() {
    let stub = StubInvoker::failing("throttled");
    let client = AssessmentClient::new(stub.clone());

    let err = client
        .request_assessment(&ClinicalIntakeRecord::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AssessmentError::Transport(ref m) if m == "throttled"));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn empty_reply_is_a_parse_error() {
    let client = AssessmentClient::new(StubInvoker::replying(None));

    let err = client
        .request_assessment(&ClinicalIntakeRecord::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AssessmentError::Parse(_)));
}

#[tokio::test]
async fn non_conforming_reply_is_a_parse_error() {
    let client = AssessmentClient::new(StubInvoker::replying(Some(
        r#"{"differentials": [], "consultNote": "x"}"#,
    )));

    let err = client
        .request_assessment(&ClinicalIntakeRecord::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AssessmentError::Parse(_)));
}

#[test]
fn build_request_is_deterministic() {
    let record = ClinicalIntakeRecord::default();
    let a = AssessmentClient::build_request(&record);
    let b = AssessmentClient::build_request(&record);
    assert_eq!(a.prompt, b.prompt);
    assert_eq!(a.schema, b.schema);
}

#[test]
fn duration_ms_saturates_instead_of_wrapping() {
    assert_eq!(duration_ms(Duration::from_millis(1500)), 1500);
    assert_eq!(duration_ms(Duration::from_micros(999)), 0);
    assert_eq!(duration_ms(Duration::MAX), u64::MAX);
}
