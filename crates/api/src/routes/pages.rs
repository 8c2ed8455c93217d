use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Mount the HTML front page at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(pages::index))
}
