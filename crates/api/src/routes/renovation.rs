//! Route definitions for uploads and renovation.
//!
//! ```text
//! POST /upload/{house_id}                 upload_image
//! POST /renovate/{house_id}/{image_id}    renovate_image
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::{renovation, upload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload/{house_id}", post(upload::upload_image))
        .route(
            "/renovate/{house_id}/{image_id}",
            post(renovation::renovate_image),
        )
}
