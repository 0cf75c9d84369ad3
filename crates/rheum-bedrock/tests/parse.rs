use rheum_bedrock::error::{AssessmentError, GENERIC_FAILURE};
use rheum_bedrock::parse::parse_consult_response;
use rheum_core::models::consult::Likelihood;

const VALID: &str = r####"{
    "differentials": [
        {"condition": "Gout", "likelihood": "High", "reasoning": "Acute MTP 1", "keyTests": ["Arthrocentesis", "Serum urate"]},
        {"condition": "Septic arthritis", "likelihood": "Moderate", "reasoning": "Fever", "keyTests": ["Synovial culture"]},
        {"condition": "CPPD", "likelihood": "High", "reasoning": "Age", "keyTests": []}
    ],
    "consultNote": "### Subjective\nPain\n\n\n### Objective\n...",
    "suggestedPlan": ["Check HLA-B*5801 before allopurinol"]
}"####;

fn assert_parse_error(text: Option<&str>) {
    match parse_consult_response(text) {
        Err(AssessmentError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn valid_reply_parses_in_response_order() {
    let response = parse_consult_response(Some(VALID)).unwrap();
    let conditions: Vec<_> = response.differentials.iter().map(|d| d.condition.as_str()).collect();
    assert_eq!(conditions, vec!["Gout", "Septic arthritis", "CPPD"]);
    assert_eq!(response.differentials[2].likelihood, Likelihood::High);
    assert_eq!(response.differentials[0].key_tests, vec!["Arthrocentesis", "Serum urate"]);
    assert!(response.consult_note.contains("\n\n\n### Objective"));
}

#[test]
fn empty_object_is_a_parse_error() {
    assert_parse_error(Some("{}"));
}

#[test]
fn missing_text_falls_back_to_empty_object() {
    assert_parse_error(None);
    assert_parse_error(Some(""));
    assert_parse_error(Some("   \n"));
}

#[test]
fn likelihood_outside_enum_is_a_parse_error() {
    let text = VALID.replace("\"Moderate\"", "\"Severe\"");
    assert_parse_error(Some(&text));
}

#[test]
fn wrong_member_type_is_a_parse_error() {
    let text = VALID.replace(
        "[\"Check HLA-B*5801 before allopurinol\"]",
        "\"Check HLA-B*5801 before allopurinol\"",
    );
    assert_parse_error(Some(&text));
}

#[test]
fn missing_nested_member_is_a_parse_error() {
    let text = r#"{
        "differentials": [{"condition": "Gout", "likelihood": "High", "reasoning": "x"}],
        "consultNote": "",
        "suggestedPlan": []
    }"#;
    assert_parse_error(Some(text));
}

#[test]
fn non_json_is_a_parse_error() {
    assert_parse_error(Some("Here is your consult note: ..."));
}

#[test]
fn parse_errors_show_the_generic_banner() {
    let err = parse_consult_response(Some("{}")).unwrap_err();
    assert_eq!(err.kind(), "parse");
    assert_eq!(err.banner(), GENERIC_FAILURE);
}

#[test]
fn transport_banner_is_verbatim_on_one_line() {
    let err = AssessmentError::Transport("dispatch failure:\n  connection refused".into());
    assert_eq!(err.kind(), "transport");
    assert_eq!(
        err.banner(),
        "model invocation failed: dispatch failure: connection refused"
    );
}
