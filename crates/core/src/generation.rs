//! The seam between request handling and the hosted image model.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::normalize::GenerationOutput;
use crate::styles::{StyleEntry, GENERATION_NEGATIVE_PROMPT, NUM_INFERENCE_STEPS};

/// Everything the hosted model needs for one renovation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Resolved input image: a data URL or a remote URL.
    pub image: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub num_inference_steps: u32,
}

impl GenerationRequest {
    /// Build the request for `style`, using the fixed negative prompt and
    /// step count shared by all styles.
    pub fn for_style(style: &StyleEntry, image: String) -> Self {
        Self {
            image,
            prompt: style.prompt.to_string(),
            negative_prompt: GENERATION_NEGATIVE_PROMPT.to_string(),
            num_inference_steps: NUM_INFERENCE_STEPS,
        }
    }
}

/// Submits a generation to some image model.
///
/// Failures of any kind (network, timeout, model error) surface as
/// [`CoreError::Upstream`]. Implementations do not retry.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, CoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::validate_style;

    #[test]
    fn request_uses_style_prompt_and_fixed_negative() {
        let style = validate_style("zen").unwrap();
        let request = GenerationRequest::for_style(style, "https://x/in.jpg".into());
        assert_eq!(request.prompt, style.prompt);
        assert_ne!(request.negative_prompt, style.negative_prompt);
        assert!(request.negative_prompt.starts_with("lowres, watermark"));
        assert_eq!(request.num_inference_steps, 25);
        assert_eq!(request.image, "https://x/in.jpg");
    }
}
