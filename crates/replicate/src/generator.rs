use std::time::Duration;

use akiya_core::error::CoreError;
use akiya_core::generation::{GenerationRequest, ImageGenerator};
use akiya_core::normalize::GenerationOutput;
use async_trait::async_trait;

use crate::api::{PredictionInput, ReplicateApi, ReplicateError};
use crate::config::ReplicateConfig;
use crate::output::{adapt_output, first_url};

/// [`ImageGenerator`] backed by a hosted Replicate model.
pub struct ReplicateGenerator {
    api: ReplicateApi,
    timeout: Duration,
    fetch_output: bool,
}

impl ReplicateGenerator {
    pub fn new(config: &ReplicateConfig) -> Self {
        Self {
            api: ReplicateApi::new(config),
            timeout: Duration::from_secs(config.timeout_secs),
            fetch_output: config.fetch_output,
        }
    }

    async fn run(&self, request: GenerationRequest) -> Result<GenerationOutput, ReplicateError> {
        let input = PredictionInput {
            input: request.image,
            prompt: request.prompt,
            negative_prompt: request.negative_prompt,
            num_inference_steps: request.num_inference_steps,
        };
        let output = adapt_output(self.api.run(&input).await?);

        if self.fetch_output {
            if let Some(url) = first_url(&output) {
                let bytes = self.api.download(url).await?;
                tracing::debug!(size = bytes.len(), "Downloaded generated image");
                return Ok(GenerationOutput::Bytes(bytes));
            }
        }
        Ok(output)
    }
}

#[async_trait]
impl ImageGenerator for ReplicateGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, CoreError> {
        let result = match tokio::time::timeout(self.timeout, self.run(request)).await {
            Ok(result) => result,
            Err(_) => Err(ReplicateError::Timeout(self.timeout.as_secs())),
        };
        result.map_err(|e| CoreError::Upstream(e.to_string()))
    }
}
