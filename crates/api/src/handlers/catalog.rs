//! Handlers for the read-only catalog: properties, demo photos, styles.

use akiya_core::catalog;
use akiya_core::error::CoreError;
use akiya_core::styles::STYLES;
use akiya_core::types::{DemoImage, PropertyRecord};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Public view of a style; prompts stay server-side.
#[derive(Debug, Serialize)]
pub struct StyleSummary {
    pub id: &'static str,
    pub label: &'static str,
}

/// GET /api/houses
pub async fn list_houses(State(state): State<AppState>) -> Json<Vec<PropertyRecord>> {
    Json(state.store.list().await)
}

/// GET /api/demo-images/{house_type}
pub async fn list_demo_images(
    Path(house_type): Path<String>,
) -> AppResult<Json<&'static [DemoImage]>> {
    catalog::demo_images_for(&house_type)
        .map(Json)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "House type",
            id: house_type,
        }))
}

/// GET /api/styles
pub async fn list_styles() -> Json<Vec<StyleSummary>> {
    Json(
        STYLES
            .iter()
            .map(|s| StyleSummary {
                id: s.id,
                label: s.label,
            })
            .collect(),
    )
}
