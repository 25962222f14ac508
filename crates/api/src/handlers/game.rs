//! Handlers for game sessions.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use quandary_core::error::CoreError;
use quandary_core::types::DbId;
use quandary_db::models::game::CreateGame;
use quandary_db::repositories::{DecisionRepo, GameRepo};
use serde::{Deserialize, Serialize};

use crate::engine::achievements;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Player name reported for stats of a game that does not exist.
const UNKNOWN_PLAYER: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub player_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartGameResponse {
    pub game_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct EndGameRequest {
    pub game_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub framework_stats: BTreeMap<String, i64>,
    pub category_stats: BTreeMap<String, i64>,
    pub total_decisions: i64,
    pub player_name: String,
    pub dilemmas_answered: i64,
}

/// POST /api/start_game
pub async fn start_game(
    State(state): State<AppState>,
    payload: Result<Json<StartGameRequest>, JsonRejection>,
) -> AppResult<Json<StartGameResponse>> {
    let Json(input) = payload?;
    let game = GameRepo::create(&state.pool, &CreateGame::for_player(input.player_name.as_deref()))
        .await?;

    tracing::info!(game_id = game.id, player_name = %game.player_name, "Game started");
    Ok(Json(StartGameResponse { game_id: game.id }))
}

/// POST /api/end_game
pub async fn end_game(
    State(state): State<AppState>,
    payload: Result<Json<EndGameRequest>, JsonRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Json(input) = payload?;
    let game_id = input
        .game_id
        .ok_or_else(|| AppError::BadRequest("Missing required field: game_id".into()))?;

    GameRepo::close(&state.pool, game_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Game",
            id: game_id,
        }))?;

    tracing::info!(game_id, "Game ended");
    Ok(Json(StatusResponse { status: "success" }))
}

/// GET /api/get_stats/{game_id}
///
/// Also re-runs achievement evaluation for the game's player; failures
/// there never affect the response.
pub async fn get_stats(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<StatsResponse>> {
    let Path(game_id) = path?;
    let stats = DecisionRepo::stats_for_game(&state.pool, game_id).await?;
    let game = GameRepo::find_by_id(&state.pool, game_id).await?;

    if game.is_some() {
        let unlocked = achievements::evaluate_for_game(&state.pool, game_id).await;
        if !unlocked.is_empty() {
            tracing::info!(game_id, count = unlocked.len(), "Achievements unlocked on stats read");
        }
    }

    let (player_name, dilemmas_answered) = match game {
        Some(game) => (game.player_name, game.dilemmas_answered),
        None => (UNKNOWN_PLAYER.to_string(), 0),
    };

    Ok(Json(StatsResponse {
        framework_stats: stats.framework_stats,
        category_stats: stats.category_stats,
        total_decisions: stats.total_decisions,
        player_name,
        dilemmas_answered,
    }))
}
