//! REST client for the Replicate predictions API.
//!
//! Creates a prediction with `Prefer: wait`, then polls its `urls.get`
//! endpoint until it reaches a terminal status.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ReplicateConfig;

/// HTTP client bound to one Replicate account and model version.
pub struct ReplicateApi {
    client: reqwest::Client,
    api_base: String,
    api_token: String,
    model_version: String,
    poll_interval: Duration,
}

/// Model input for the interior design model. The image goes under `input`,
/// not `image`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionInput {
    pub input: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub num_inference_steps: u32,
}

/// A prediction as returned by `POST /predictions` and `GET` on its URL.
#[derive(Debug, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub urls: Option<PredictionUrls>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionUrls {
    #[serde(default)]
    pub get: Option<String>,
}

/// Errors from the Replicate REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ReplicateError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Replicate returned a non-2xx status code.
    #[error("Replicate API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    #[error("Prediction {status}: {detail}")]
    PredictionFailed { status: String, detail: String },

    #[error("Prediction still running but no poll URL was returned")]
    MissingPollUrl,

    #[error("Generation timed out after {0}s")]
    Timeout(u64),
}

impl Prediction {
    fn is_pending(&self) -> bool {
        matches!(self.status.as_str(), "starting" | "processing")
    }
}

impl ReplicateApi {
    pub fn new(config: &ReplicateConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ReplicateConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.clone(),
            api_token: config.api_token.clone(),
            model_version: config.model_version.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Run the configured model to completion and return its raw `output`.
    ///
    /// No deadline is applied here; callers wrap this in their own timeout.
    pub async fn run(&self, input: &PredictionInput) -> Result<serde_json::Value, ReplicateError> {
        let mut prediction = self.create_prediction(input).await?;
        tracing::debug!(id = ?prediction.id, status = %prediction.status, "Prediction created");

        while prediction.is_pending() {
            let poll_url = prediction
                .urls
                .as_ref()
                .and_then(|u| u.get.clone())
                .ok_or(ReplicateError::MissingPollUrl)?;
            tokio::time::sleep(self.poll_interval).await;
            prediction = self.get_prediction(&poll_url).await?;
        }

        if prediction.status != "succeeded" {
            let detail = prediction
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no error detail".into());
            return Err(ReplicateError::PredictionFailed {
                status: prediction.status,
                detail,
            });
        }

        tracing::info!(id = ?prediction.id, "Prediction succeeded");
        Ok(prediction.output.unwrap_or(serde_json::Value::Null))
    }

    /// Sends `POST /predictions`, asking Replicate to hold the connection
    /// until the prediction finishes when it can.
    pub async fn create_prediction(
        &self,
        input: &PredictionInput,
    ) -> Result<Prediction, ReplicateError> {
        let body = serde_json::json!({
            "version": self.model_version,
            "input": input,
        });

        let response = self
            .client
            .post(format!("{}/predictions", self.api_base))
            .bearer_auth(&self.api_token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the current state of a prediction from its `urls.get` URL.
    pub async fn get_prediction(&self, poll_url: &str) -> Result<Prediction, ReplicateError> {
        let response = self
            .client
            .get(poll_url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Download a generated file.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ReplicateError> {
        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ReplicateError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ReplicateError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ReplicateError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
