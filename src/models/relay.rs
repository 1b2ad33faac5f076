// Caller-facing API types

use crate::error::{RelayError, Result};
use serde::{Deserialize, Serialize};

/// Request body for `POST /generate`.
///
/// Only the image payload is required; everything else has a default. The
/// mime type is not checked against an allow-list and region/language are
/// not sanitized beyond normal JSON parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Base64-encoded source image.
    #[serde(default)]
    pub image_base64: Option<String>,

    /// Mime type of the source image. Default: `image/png`.
    #[serde(default = "default_mime_type")]
    pub image_mime_type: String,

    /// Region shown through the cupola window. Default: `Earth`.
    #[serde(default = "default_region")]
    pub region: String,

    /// Caller language. Carried for bookkeeping; does not reach the
    /// outbound prompt.
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl GenerateRequest {
    /// The required image payload, rejecting absent or empty values.
    pub fn require_image(&self) -> Result<&str> {
        self.image_base64
            .as_deref()
            .filter(|data| !data.is_empty())
            .ok_or(RelayError::MissingImage)
    }
}

/// Success body returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub image_base64: String,
    pub mime_type: String,
}

fn default_mime_type() -> String {
    "image/png".to_string()
}

fn default_region() -> String {
    "Earth".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}
