// HTTP routes configuration

use super::handlers::{generate_handler, health_handler, preflight_handler};
use crate::config::AppConfig;
use crate::error::Result;
use crate::genai::GenAiClient;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub genai: Arc<GenAiClient>,
}

pub fn create_router(config: AppConfig, genai: GenAiClient) -> Result<Router> {
    let state = AppState {
        config,
        genai: Arc::new(genai),
    };

    // Non-POST/OPTIONS methods on /generate get a 405 from the method
    // router before any body handling.
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/generate", post(generate_handler).options(preflight_handler))
        // Allow large request bodies for base64-encoded images
        // 7MB PNG = ~9.5MB base64, so allow up to 50MB to be safe
        .layer(tower_http::limit::RequestBodyLimitLayer::new(50 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    Ok(app)
}
