// Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use cupola::error::RelayError;
use http_body_util::BodyExt;
use serde_json::{json, Value};

async fn response_parts(error: RelayError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        RelayError::MissingImage,
        RelayError::InvalidBody("expected value".to_string()),
        RelayError::MissingApiKey,
        RelayError::Upstream {
            status: 503,
            details: "quota exhausted".to_string(),
        },
        RelayError::NoImage { raw: json!({}) },
        RelayError::Config("bad file".to_string()),
        RelayError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_missing_api_key_message_names_the_variable_not_the_value() {
    let display = format!("{}", RelayError::MissingApiKey);
    assert_eq!(display, "Server misconfigured: missing GENAI_API_KEY");
}

#[tokio::test]
async fn test_missing_image_maps_to_400() {
    let (status, body) = response_parts(RelayError::MissingImage).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing imageBase64");
}

#[tokio::test]
async fn test_invalid_body_maps_to_400() {
    let (status, body) =
        response_parts(RelayError::InvalidBody("expected value at line 1".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("expected value at line 1"));
}

#[tokio::test]
async fn test_missing_api_key_maps_to_500() {
    let (status, body) = response_parts(RelayError::MissingApiKey).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server misconfigured: missing GENAI_API_KEY");
}

#[tokio::test]
async fn test_upstream_error_keeps_upstream_status() {
    let (status, body) = response_parts(RelayError::Upstream {
        status: 429,
        details: "rate limited".to_string(),
    })
    .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Upstream error");
    assert_eq!(body["details"], "rate limited");
}

#[tokio::test]
async fn test_invalid_upstream_status_falls_back_to_502() {
    let (status, _) = response_parts(RelayError::Upstream {
        status: 42, // not a valid HTTP status
        details: String::new(),
    })
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_no_image_maps_to_502_with_raw_payload() {
    let raw = json!({ "candidates": [] });
    let (status, body) = response_parts(RelayError::NoImage { raw: raw.clone() }).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "No image generated");
    assert_eq!(body["raw"], raw);
}

#[tokio::test]
async fn test_internal_error_maps_to_500() {
    let (status, body) = response_parts(RelayError::Internal("boom".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("boom"));
}
