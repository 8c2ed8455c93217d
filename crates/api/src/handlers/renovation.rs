//! Handler for `POST /api/renovate/{house_id}/{image_id}`.
//!
//! Steps, each short-circuiting on failure: validate house, validate image,
//! validate style, resolve input, invoke the model, normalize the output,
//! persist the generated image, respond. Nothing is stored unless every
//! step succeeds.

use akiya_core::catalog::is_demo_placeholder;
use akiya_core::error::CoreError;
use akiya_core::generation::GenerationRequest;
use akiya_core::image_ref::preview;
use akiya_core::normalize::normalize_output;
use akiya_core::styles;
use akiya_core::types::ImageRecord;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub const MOCK_MESSAGE: &str = "Mock response - configure REPLICATE_API_TOKEN for real generation";

#[derive(Debug, Deserialize)]
pub struct RenovateRequest {
    pub style: String,
    /// Required for demo placeholder ids, ignored otherwise.
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenovationResponse {
    pub id: String,
    pub status: &'static str,
    pub output: Vec<String>,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /api/renovate/{house_id}/{image_id}
///
/// Without a configured generator the original reference is echoed back as
/// a mock result and nothing is stored.
pub async fn renovate_image(
    State(state): State<AppState>,
    Path((house_id, image_id)): Path<(String, String)>,
    Json(input): Json<RenovateRequest>,
) -> AppResult<Json<RenovationResponse>> {
    let image = source_image(&state, &house_id, &image_id, input.image_url).await?;
    let style = styles::validate_style(&input.style)?;

    let Some(generator) = state.generator.as_ref() else {
        tracing::info!(%house_id, %image_id, style = style.id, "Returning mock renovation");
        return Ok(Json(RenovationResponse {
            id: format!("mock-{}", uuid::Uuid::new_v4()),
            status: "succeeded",
            output: vec![image.data],
            style: input.style,
            message: Some(MOCK_MESSAGE),
        }));
    };

    let resolved = state.resolver.resolve(&image.data).await?;
    tracing::debug!(input = preview(&resolved, 100), "Resolved generation input");

    let output = generator
        .generate(GenerationRequest::for_style(style, resolved))
        .await?;
    let generated = normalize_output(&output, &image.data);

    let record = ImageRecord::generated(&image_id, style.id, generated);
    let response = RenovationResponse {
        id: record.id.clone(),
        status: "succeeded",
        output: vec![record.data.clone()],
        style: input.style,
        message: None,
    };
    state.store.append_image(&house_id, record).await?;

    tracing::info!(%house_id, %image_id, style = style.id, id = %response.id, "Renovation stored");
    Ok(Json(response))
}

/// Find the image to renovate. Demo placeholders take their reference from
/// the request body; everything else must already be attached to the house.
async fn source_image(
    state: &AppState,
    house_id: &str,
    image_id: &str,
    image_url: Option<String>,
) -> AppResult<ImageRecord> {
    if !state.store.contains(house_id).await {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "House",
            id: house_id.to_string(),
        }));
    }

    if is_demo_placeholder(image_id) {
        let url = image_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::BadRequest("Image URL required for demo images".into()))?;
        return Ok(ImageRecord::placeholder(image_id, url));
    }

    state
        .store
        .find_image(house_id, image_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Image",
                id: image_id.to_string(),
            })
        })
}
