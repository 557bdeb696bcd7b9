use std::sync::Arc;

use jobspark_core::ScoringRequest;
use jobspark_engine::{
    encode_pdf_data_uri, FailureKind, ReqwestScoringClient, ScoringService, ServiceSettings,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESUME: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n";

fn request(job_description: Option<&str>) -> ScoringRequest {
    ScoringRequest {
        document: Arc::from(RESUME),
        job_description: job_description.map(ToOwned::to_owned),
    }
}

fn client(server: &MockServer) -> ReqwestScoringClient {
    ReqwestScoringClient::new(&ServiceSettings::with_base_url(&server.uri())).expect("client")
}

#[tokio::test]
async fn posts_data_uri_and_parses_score() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-ats-score"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "pdfData": encode_pdf_data_uri(RESUME),
            "jobDescription": "Rust backend engineer"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": 82.5,
            "explanation": "Good keyword match"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .score(&request(Some("Rust backend engineer")))
        .await
        .expect("score");
    assert_eq!(result.score, 82.5);
    assert_eq!(result.explanation.as_deref(), Some("Good keyword match"));
}

#[tokio::test]
async fn missing_description_is_sent_as_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-ats-score"))
        .and(body_json(json!({
            "pdfData": encode_pdf_data_uri(RESUME),
            "jobDescription": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"score": 55, "explanation": ""})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).score(&request(None)).await.expect("score");
    assert_eq!(result.score, 55.0);
    assert_eq!(result.explanation, None);
}

#[tokio::test]
async fn server_failure_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-ats-score"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Could not extract text from PDF"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).score(&request(None)).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, "HTTP error! status: 400");
}

#[tokio::test]
async fn error_payload_with_success_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-ats-score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "model not loaded"})))
        .mount(&server)
        .await;

    let err = client(&server).score(&request(None)).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Service { retry_after: None });
    assert_eq!(err.to_string(), "model not loaded");
}
