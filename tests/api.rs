use axum::body::Body;
use axum::http::{header, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use cyberquiz::api::{build_router, AppState};
use cyberquiz::config::ReportConfig;
use cyberquiz::store::ResponseStore;
use tempfile::TempDir;

const BANK: &str = r#"{
    "common": [
        {"text": "What is your company's name?", "type": "text"},
        {"text": "What is your email address?", "type": "email"},
        {"text": "Which compliance test do you want to take?", "type": "radio", "options": ["ISO 27001", "GDPR"]}
    ],
    "compliance_categories": [
        {
            "name": "ISO 27001",
            "questions": [
                {
                    "question": "Is there an asset inventory?",
                    "response_options": [
                        {"option": "Yes", "recommendation": "Review the inventory quarterly.", "acknowledgment": true},
                        {"option": "No", "recommendation": "Build an asset inventory.", "acknowledgment": false}
                    ]
                }
            ]
        },
        {
            "name": "GDPR",
            "questions": [
                {
                    "question": "Which safeguards are in place?",
                    "response_options": [
                        {"option": "Encryption", "recommendation": "Rotate keys."},
                        {"option": "Pseudonymisation", "recommendation": "Separate the keys from the data."}
                    ]
                },
                {"question": "Is there a DPO?", "response_options": [{"option": "Yes"}, {"option": "No"}]}
            ]
        }
    ]
}"#;

struct Fixture {
    dir: TempDir,
    state: AppState,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let questions = dir.path().join("questions.json");
        std::fs::write(&questions, BANK).unwrap();
        let store = ResponseStore::new(dir.path().join("responses.csv"));
        let state = AppState::new(questions, store, ReportConfig::default());
        Self { dir, state }
    }

    fn app(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    fn store_lines(&self) -> Vec<String> {
        std::fs::read_to_string(self.state.store.path())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

fn full_submission() -> Value {
    json!({
        "responses": [
            {"question": "What is your company's name?", "answer": "Acme"},
            {"question": "What is your email address?", "answer": "sec@acme.test"},
            {"question": "Is there an asset inventory?", "answer": "No"},
            {"question": "Which safeguards are in place?", "answer": "Encryption,Pseudonymisation"}
        ]
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let fx = Fixture::new();
    let response = fx.app().oneshot(make_request("GET", "/api/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "cyberquiz");
}

#[tokio::test]
async fn test_questions_are_flattened() {
    let fx = Fixture::new();
    let response = fx.app().oneshot(make_request("GET", "/questions", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 3 + 3);
    assert!(questions.iter().all(|q| !q["category"].as_str().unwrap().is_empty()));

    assert_eq!(questions[0]["category"], "common");
    assert_eq!(questions[0]["type"], "text");
    assert_eq!(questions[3]["text"], "Is there an asset inventory?");
    assert_eq!(questions[3]["type"], "radio");
    assert_eq!(questions[3]["options"], json!(["Yes", "No"]));
    assert_eq!(questions[5]["category"], "GDPR");
}

#[tokio::test]
async fn test_questions_missing_bank_is_500() {
    let fx = Fixture::new();
    std::fs::remove_file(fx.dir.path().join("questions.json")).unwrap();

    let response = fx.app().oneshot(make_request("GET", "/questions", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_questions_malformed_bank_is_500() {
    let fx = Fixture::new();
    std::fs::write(fx.dir.path().join("questions.json"), "{\"common\": [").unwrap();

    let response = fx.app().oneshot(make_request("GET", "/questions", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_submit_empty_responses_is_400_without_write() {
    let fx = Fixture::new();
    let req = make_request("POST", "/submit", Some(json!({"responses": []})));
    let response = fx.app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No responses received");
    assert!(!fx.state.store.path().exists());
}

#[tokio::test]
async fn test_submit_without_responses_key_is_400() {
    let fx = Fixture::new();
    let req = make_request("POST", "/submit", Some(json!({})));
    let response = fx.app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!fx.state.store.path().exists());
}

#[tokio::test]
async fn test_submit_malformed_body_is_400() {
    let fx = Fixture::new();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/submit")
        .header("content-type", "application/json")
        .body(Body::from("{\"responses\": [oops"))
        .unwrap();
    let response = fx.app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid submission"));
}

#[tokio::test]
async fn test_submit_appends_one_row() {
    let fx = Fixture::new();
    let response = fx
        .app()
        .oneshot(make_request("POST", "/submit", Some(full_submission())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Responses submitted successfully!");
    assert_eq!(body["data"], full_submission()["responses"]);

    let lines = fx.store_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].trim_end(), "timestamp,company,email,response_data");
    assert!(lines[1].contains(",Acme,sec@acme.test,"));
}

#[tokio::test]
async fn test_resubmission_appends_again() {
    let fx = Fixture::new();
    for _ in 0..3 {
        let response = fx
            .app()
            .oneshot(make_request("POST", "/submit", Some(full_submission())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(fx.state.store.count().unwrap(), 3);
}

#[tokio::test]
async fn test_submit_identity_defaults_to_unknown() {
    let fx = Fixture::new();
    let req = make_request(
        "POST",
        "/submit",
        Some(json!({"responses": [{"question": "Is there a DPO?", "answer": "Yes"}]})),
    );
    let response = fx.app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let latest = fx.state.store.latest().unwrap();
    assert_eq!(latest.company, "Unknown");
    assert_eq!(latest.email, "Unknown");
}

#[tokio::test]
async fn test_report_without_store_is_404() {
    let fx = Fixture::new();
    let response = fx.app().oneshot(make_request("GET", "/get-report", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "No responses found");
}

#[tokio::test]
async fn test_report_with_header_only_store_is_404() {
    let fx = Fixture::new();
    fx.state.store.initialize().unwrap();

    let response = fx.app().oneshot(make_request("GET", "/get-report", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "No responses found");
}

#[tokio::test]
async fn test_report_is_pdf_attachment() {
    let fx = Fixture::new();
    let response = fx
        .app()
        .oneshot(make_request("POST", "/submit", Some(full_submission())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = fx.app().oneshot(make_request("GET", "/get-report", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"cybersecurity_report.pdf\""
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_report_with_corrupt_row_is_500() {
    let fx = Fixture::new();
    std::fs::write(
        fx.state.store.path(),
        "timestamp,company,email,response_data\n2024-01-01 00:00:00,Acme,a@b.c,{broken\n",
    )
    .unwrap();

    let response = fx.app().oneshot(make_request("GET", "/get-report", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Malformed response record"));
}
