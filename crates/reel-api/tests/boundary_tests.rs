//! Delivery boundary tests.
//!
//! Exercises the full router with the remote service mocked out; asserts
//! the in-band error contract and that validation short-circuits before any
//! remote call.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reel_api::{create_router, ApiConfig, AppState};
use reel_gen::{GenConfig, GeminiClient};

const SUBMIT_PATH: &str = "/v1beta/models/veo-2.0-generate-001:predictLongRunning";
const TTS_PATH: &str = "/v1beta/models/gemini-2.5-flash-preview-tts:generateContent";
const ASSET_PATH: &str = "/assets/clip.mp4";

fn test_app(server: &MockServer, narration: bool, max_attempts: u32) -> Router {
    let generator = GeminiClient::new(GenConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        poll_interval: Duration::from_millis(10),
        max_attempts,
        narration,
        ..GenConfig::default()
    });
    create_router(AppState::with_generator(ApiConfig::default(), generator))
}

async fn post_form(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn mount_happy_video(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "operations/abc",
            "done": true,
            "response": {
                "content": [
                    {"media": {"url": format!("{}{}", server.uri(), ASSET_PATH), "contentType": "video/mp4"}}
                ]
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(ASSET_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"FAKE_MP4".to_vec()))
        .mount(server)
        .await;
}

fn tts_success_body() -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{
                    "inlineData": {"mimeType": "audio/L16;rate=24000", "data": "AQD/fw=="}
                }]
            }
        }]
    })
}

#[tokio::test]
async fn test_short_prompt_rejected_without_remote_call() {
    let server = MockServer::start().await;

    // Any request reaching the mock service fails the test.
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&server, true, 3);
    let (status, body) = post_form(app, "prompt=ab").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["error"],
        json!("Prompt must be at least 3 characters long.")
    );
    assert_eq!(body["video"], Value::Null);
    assert_eq!(body["audio"], Value::Null);
}

#[tokio::test]
async fn test_successful_generation_returns_data_uris() {
    let server = MockServer::start().await;
    mount_happy_video(&server).await;

    Mock::given(method("POST"))
        .and(path(TTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(tts_success_body()))
        .mount(&server)
        .await;

    let app = test_app(&server, true, 3);
    let (status, body) = post_form(app, "prompt=A+cat+playing+piano").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], Value::Null);
    assert!(body["video"]
        .as_str()
        .unwrap()
        .starts_with("data:video/mp4;base64,"));
    assert!(body["audio"]
        .as_str()
        .unwrap()
        .starts_with("data:audio/wav;base64,"));
}

#[tokio::test]
async fn test_orchestration_failure_maps_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal service detail"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(TTS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = test_app(&server, true, 1);
    let (status, body) = post_form(app, "prompt=A+cat+playing+piano").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["error"],
        json!("Failed to generate video. Please try again.")
    );
    assert_eq!(body["video"], Value::Null);

    // Internal error detail never leaks to the caller
    let raw = body.to_string();
    assert!(!raw.contains("internal service detail"));
    assert!(!raw.contains("500"));
}

#[tokio::test]
async fn test_narration_disabled_returns_null_audio() {
    let server = MockServer::start().await;
    mount_happy_video(&server).await;

    Mock::given(method("POST"))
        .and(path(TTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(tts_success_body()))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&server, false, 3);
    let (status, body) = post_form(app, "prompt=A+cat+playing+piano").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], Value::Null);
    assert!(body["video"]
        .as_str()
        .unwrap()
        .starts_with("data:video/mp4;base64,"));
    assert_eq!(body["audio"], Value::Null);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let app = test_app(&server, true, 3);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("healthy"));
}
