use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the HTML shell at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handlers::page::index))
}
