//! Route definitions for the read-only catalog.
//!
//! ```text
//! GET /houses                     list_houses
//! GET /demo-images/{house_type}   list_demo_images
//! GET /styles                     list_styles
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/houses", get(catalog::list_houses))
        .route("/demo-images/{house_type}", get(catalog::list_demo_images))
        .route("/styles", get(catalog::list_styles))
}
