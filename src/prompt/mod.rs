//! Prompt assembly for the Cupola scene.
//!
//! The instruction template is fixed; the only caller-controlled value is
//! the region name substituted into the Earth-view sentence. No other caller
//! input reaches the prompt text.

use crate::models::genai::{
    Content, GenerateContentRequest, GenerationConfig, InlineData, Part,
};

/// Build the scene instruction with the region substituted in.
pub fn build_prompt(region: &str) -> String {
    format!(
        "A hyper-realistic 8K first-person perspective inside the ISS Cupola. \
         A real astronaut in a detailed white space suit holds a glossy printed photograph \
         showing the face from the provided image. \
         Soft reflections on the photo surface, natural finger shadows, \
         cinematic ISS interior lighting matching the photo. \
         Background through the cupola shows a breathtaking Earth over {region}. \
         Ultra realistic, no AI artifacts."
    )
}

/// Assemble the outbound `generateContent` body: prompt text first, then the
/// inline source image, requesting image-modality output.
pub fn build_generate_content(
    prompt: String,
    mime_type: String,
    image_base64: String,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type,
                        data: image_base64,
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string()],
        },
    }
}
