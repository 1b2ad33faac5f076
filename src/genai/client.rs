// Generative Language API client

use crate::config::GenAiConfig;
use crate::error::{RelayError, Result};
use crate::models::genai::{extract_inline_image, GenerateContentRequest, ImageExtraction};
use crate::utils::logging;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// A generated image relayed back from the upstream service.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes, passed through without decoding.
    pub data: String,
    pub mime_type: String,
}

/// Client for the Generative Language API (API-key flavored endpoints).
///
/// Holds a pooled HTTP client with the configured request timeout. One
/// outbound call per invocation, no retries.
pub struct GenAiClient {
    http_client: Client,
    config: GenAiConfig,
}

impl GenAiClient {
    pub fn new(config: &GenAiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .use_rustls_tls()
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Endpoint URL without the credential, safe for logs.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        )
    }

    /// Call `generateContent` once and extract the generated image.
    ///
    /// Non-2xx statuses surface as `Upstream` with the raw body text so the
    /// caller sees the upstream's own status code. A 2xx payload with no
    /// inline image part surfaces as `NoImage` carrying the full payload.
    pub async fn generate_image(
        &self,
        request: GenerateContentRequest,
        api_key: &str,
    ) -> Result<GeneratedImage> {
        let endpoint = self.endpoint();
        debug!("Calling generateContent for model: {}", self.config.model);

        // The credential travels as a query parameter; keep it out of logs.
        let url = format!("{}?key={}", endpoint, urlencoding::encode(api_key));

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            error!(
                "Upstream error: HTTP {} from {} - {}",
                status,
                endpoint,
                logging::sanitize(&details)
            );
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let payload: serde_json::Value = response.json().await?;

        match extract_inline_image(payload) {
            ImageExtraction::Found { data, mime_type } => {
                debug!(
                    "Extracted inline image ({}, {} base64 chars)",
                    mime_type,
                    data.len()
                );
                Ok(GeneratedImage { data, mime_type })
            }
            ImageExtraction::NotFound { raw } => Err(RelayError::NoImage { raw }),
        }
    }
}
