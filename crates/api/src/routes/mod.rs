pub mod achievements;
pub mod game;
pub mod health;
pub mod page;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /start_game                       start a session
/// GET  /get_dilemma                      next dilemma (generated or predefined)
/// POST /make_decision                    record a choice, analysis, unlocks
/// GET  /get_stats/{game_id}              per-game aggregates
/// POST /end_game                         close a session
/// GET  /get_achievements/{player_name}   catalog with unlock state
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(game::router())
        .merge(achievements::router())
}
