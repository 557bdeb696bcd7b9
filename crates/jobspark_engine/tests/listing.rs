use std::time::Duration;

use jobspark_core::SearchQuery;
use jobspark_engine::{
    EngineError, FailureKind, JobListingService, ReqwestListingClient, ServiceSettings,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query(term: &str, location: &str, page: u32) -> SearchQuery {
    SearchQuery {
        term: term.to_string(),
        location: location.to_string(),
        page,
    }
}

fn client(server: &MockServer) -> ReqwestListingClient {
    ReqwestListingClient::new(&ServiceSettings::with_base_url(&server.uri())).expect("client")
}

#[tokio::test]
async fn posts_query_and_parses_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .and(body_json(json!({
            "search_term": "engineer",
            "location": "India",
            "page": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [
                {
                    "title": "Backend Engineer",
                    "company": "Acme",
                    "location": "Pune, India",
                    "salary": "$100000-$150000",
                    "description": "Rust services",
                    "date_posted": "2024-05-01",
                    "job_url": "https://jobs.example.com/42",
                    "site": "linkedin",
                    "job_type": "fulltime"
                },
                {
                    "title": "SRE",
                    "company": "Initech",
                    "location": "Remote",
                    "salary": "N/A",
                    "description": "",
                    "date_posted": "N/A",
                    "job_url": ""
                }
            ],
            "total": 12,
            "current_page": 1,
            "has_more": true,
            "sources": ["linkedin", "indeed"],
            "cached": false,
            "cache_expires_in": 600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .fetch_page(&query("engineer", "India", 1))
        .await
        .expect("page");

    assert!(page.has_more);
    assert_eq!(page.total, Some(12));
    assert_eq!(page.sources, vec!["linkedin".to_string(), "indeed".to_string()]);
    assert_eq!(page.jobs.len(), 2);

    let first = &page.jobs[0];
    assert_eq!(first.title, "Backend Engineer");
    assert_eq!(first.salary.as_deref(), Some("$100000-$150000"));
    assert_eq!(
        first.apply_url.as_ref().map(|url| url.as_str()),
        Some("https://jobs.example.com/42")
    );

    let second = &page.jobs[1];
    assert_eq!(second.salary, None);
    assert_eq!(second.description, None);
    assert_eq!(second.date_posted, None);
    assert_eq!(second.apply_url, None);
}

#[tokio::test]
async fn empty_result_notice_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [],
            "total": 0,
            "has_more": false,
            "message": "No jobs found. All job sites may be temporarily unavailable.",
            "retry_after": 60
        })))
        .mount(&server)
        .await;

    let page = client(&server)
        .fetch_page(&query("engineer", "India", 1))
        .await
        .expect("page");
    assert!(page.jobs.is_empty());
    assert!(!page.has_more);
    assert_eq!(
        page.notice.as_deref(),
        Some("No jobs found. All job sites may be temporarily unavailable.")
    );
}

#[tokio::test]
async fn non_success_status_is_reported_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Service temporarily unavailable: scraper down",
            "retry_after": 120
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_page(&query("engineer", "India", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[tokio::test]
async fn error_field_in_successful_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Search term is required"})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_page(&query("engineer", "India", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Service { retry_after: None });
    assert_eq!(err.message, "Search term is required");
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_page(&query("engineer", "India", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"jobs": [], "has_more": false})),
        )
        .mount(&server)
        .await;

    let settings = ServiceSettings {
        request_timeout: Duration::from_millis(50),
        ..ServiceSettings::with_base_url(&server.uri())
    };
    let client = ReqwestListingClient::new(&settings).expect("client");

    let err = client
        .fetch_page(&query("engineer", "India", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    let server = MockServer::start().await;
    let settings = ServiceSettings::with_base_url(&server.uri());
    drop(server);

    let client = ReqwestListingClient::new(&settings).expect("client");
    let err = client
        .fetch_page(&query("engineer", "India", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn health_reports_service_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "API is running",
            "cache_size": 3,
            "site_cooldowns": {},
            "available_sites": ["linkedin", "indeed", "google"]
        })))
        .mount(&server)
        .await;

    let health = client(&server).health().await.expect("health");
    assert_eq!(health.status, "API is running");
    assert_eq!(health.cache_size, Some(3));
    assert_eq!(health.available_sites.len(), 3);
}

#[test]
fn invalid_endpoint_is_rejected_up_front() {
    let settings = ServiceSettings {
        jobs_endpoint: "not a url".to_string(),
        ..ServiceSettings::default()
    };
    assert!(ReqwestListingClient::new(&settings).is_err());
}

#[test]
fn malformed_endpoint_is_rejected_at_construction() {
    let settings = ServiceSettings {
        jobs_endpoint: "not a url".to_string(),
        ..ServiceSettings::default()
    };
    match ReqwestListingClient::new(&settings) {
        Err(EngineError::InvalidEndpoint { endpoint, .. }) => assert_eq!(endpoint, "not a url"),
        other => panic!("expected InvalidEndpoint, got {:?}", other.map(|_| ())),
    }
}
