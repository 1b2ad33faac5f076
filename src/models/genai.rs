// Generative Language API type definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// A single content entry holding the prompt and the inline source image.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Individual part of a request: prompt text or inline image data.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Inline image payload (base64 data plus its mime type).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    pub data: String,
}

/// Generation parameters. The relay always requests image-modality output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

/// `generateContent` response body.
///
/// Every field is defaulted: the upstream shape is loosely specified, so an
/// unfamiliar payload parses to an empty structure and falls through to the
/// no-image path instead of failing the request with a parse error.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part. Parts without `inlineData` (text, safety metadata,
/// anything introduced later) deserialize with `inline_data = None`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ResponsePart {
    #[serde(rename = "inlineData", default)]
    pub inline_data: Option<InlineData>,
}

/// Outcome of probing an upstream payload for inline image data.
#[derive(Debug, Clone)]
pub enum ImageExtraction {
    /// An inline image part was found.
    Found { data: String, mime_type: String },
    /// No usable image anywhere in the payload; the raw payload is kept for
    /// caller-side debugging.
    NotFound { raw: Value },
}

/// Locate the first candidate part carrying non-empty inline image data.
///
/// A missing mime type defaults to `image/png`.
pub fn extract_inline_image(raw: Value) -> ImageExtraction {
    let parsed: GenerateContentResponse = match serde_json::from_value(raw.clone()) {
        Ok(parsed) => parsed,
        Err(_) => return ImageExtraction::NotFound { raw },
    };

    for candidate in parsed.candidates {
        let Some(content) = candidate.content else {
            continue;
        };
        for part in content.parts {
            let Some(inline) = part.inline_data else {
                continue;
            };
            if inline.data.is_empty() {
                continue;
            }
            let mime_type = if inline.mime_type.is_empty() {
                "image/png".to_string()
            } else {
                inline.mime_type
            };
            return ImageExtraction::Found {
                data: inline.data,
                mime_type,
            };
        }
    }

    ImageExtraction::NotFound { raw }
}
