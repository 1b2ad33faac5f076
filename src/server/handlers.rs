// HTTP request handlers

use super::routes::AppState;
use crate::error::{RelayError, Result};
use crate::models::relay::{GenerateRequest, GenerateResponse};
use crate::prompt;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, response::Builder, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Permissive cross-origin headers attached to relay responses.
fn cors_headers(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

/// Handler for `POST /generate`: one caller image in, one generated image out.
///
/// The pipeline is a single linear pass. Every step either proceeds or
/// terminates the invocation with a response; failures propagate to the
/// `RelayError` boundary, so exactly one response is produced per request.
pub async fn generate_handler(
    State(state): State<AppState>,
    body: String, // raw body first, so malformed JSON maps to an explicit 400
) -> Result<Response> {
    let req: GenerateRequest =
        serde_json::from_str(&body).map_err(|e| RelayError::InvalidBody(e.to_string()))?;

    let image_base64 = req.require_image()?.to_string();

    info!(
        region = %req.region,
        mime = %req.image_mime_type,
        lang = %req.lang,
        "Received generate request ({} base64 chars)",
        image_base64.len()
    );

    // Configuration check before any outbound traffic
    let api_key = state.config.genai.require_api_key()?.to_string();

    let prompt_text = prompt::build_prompt(&req.region);
    let outbound = prompt::build_generate_content(prompt_text, req.image_mime_type, image_base64);

    let generated = state.genai.generate_image(outbound, &api_key).await?;

    debug!("Relaying generated image ({})", generated.mime_type);

    let payload = GenerateResponse {
        image_base64: generated.data,
        mime_type: generated.mime_type,
    };

    Ok(cors_headers(Response::builder().status(StatusCode::OK))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload)?))
        .unwrap())
}

/// CORS preflight for `/generate`.
pub async fn preflight_handler() -> Response {
    cors_headers(Response::builder().status(StatusCode::NO_CONTENT))
        .body(Body::empty())
        .unwrap()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Credential presence only; the value never appears here
    let credential_check = if state.config.genai.require_api_key().is_err() {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: "GENAI_API_KEY not set; generate requests will fail".to_string(),
        }
    } else {
        HealthCheck {
            status: "ok".to_string(),
            message: "Upstream credential present".to_string(),
        }
    };
    checks.insert("credential".to_string(), credential_check);

    checks.insert(
        "upstream".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("API base: {}", state.config.genai.api_base_url),
        },
    );

    checks.insert(
        "model".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: state.config.genai.model.clone(),
        },
    );

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
