pub mod catalog;
pub mod health;
pub mod pages;
pub mod renovation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /houses                              list properties
/// /demo-images/{house_type}            demo photos for a property type
/// /styles                              renovation styles
///
/// /upload/{house_id}                   upload an image (multipart)
/// /renovate/{house_id}/{image_id}      generate a renovated image
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(renovation::router())
}
