use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Session, dilemma and decision routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start_game", post(handlers::game::start_game))
        .route("/end_game", post(handlers::game::end_game))
        .route("/get_stats/{game_id}", get(handlers::game::get_stats))
        .route("/get_dilemma", get(handlers::dilemma::get_dilemma))
        .route("/make_decision", post(handlers::decision::make_decision))
}
