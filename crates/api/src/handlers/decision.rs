use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use quandary_core::category::{normalize_category, CATEGORY_GENERAL};
use quandary_core::error::CoreError;
use quandary_core::framework::normalize_framework_label;
use quandary_core::imagery::framework_image;
use quandary_core::types::DbId;
use quandary_db::models::achievement::AchievementSummary;
use quandary_db::models::decision::CreateDecision;
use quandary_db::repositories::{DecisionRepo, GameRepo};
use serde::{Deserialize, Serialize};

use crate::engine::achievements;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /api/make_decision`. Every field is optional at the
/// serde level so missing ones produce a descriptive 400.
#[derive(Debug, Deserialize)]
pub struct MakeDecisionRequest {
    pub game_id: Option<DbId>,
    pub dilemma_id: Option<i64>,
    pub dilemma_text: Option<String>,
    pub dilemma_category: Option<String>,
    pub chosen_option: Option<String>,
    pub ethical_framework: Option<String>,
    /// The dilemma as served; its `scenario` is sent for analysis.
    pub full_dilemma: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct MakeDecisionResponse {
    pub status: &'static str,
    pub analysis: Option<String>,
    pub ethical_framework_image: &'static str,
    pub newly_unlocked_achievements: Vec<AchievementSummary>,
}

fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing required field: {field}")))
}

/// POST /api/make_decision
pub async fn make_decision(
    State(state): State<AppState>,
    payload: Result<Json<MakeDecisionRequest>, JsonRejection>,
) -> AppResult<Json<MakeDecisionResponse>> {
    let Json(input) = payload?;

    let game_id = input
        .game_id
        .ok_or_else(|| AppError::BadRequest("Missing required field: game_id".into()))?;
    let dilemma_id = input
        .dilemma_id
        .ok_or_else(|| AppError::BadRequest("Missing required field: dilemma_id".into()))?;
    let dilemma_text = required_text(input.dilemma_text, "dilemma_text")?;
    let chosen_option = required_text(input.chosen_option, "chosen_option")?;
    let raw_framework = required_text(input.ethical_framework, "ethical_framework")?;

    let ethical_framework = normalize_framework_label(&raw_framework);
    let dilemma_category = normalize_category(
        input.dilemma_category.as_deref().unwrap_or(CATEGORY_GENERAL),
    );

    GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Game",
            id: game_id,
        }))?;

    let scenario = input
        .full_dilemma
        .as_ref()
        .and_then(|d| d.get("scenario"))
        .and_then(|s| s.as_str())
        .unwrap_or_default();
    let analysis = state
        .ai
        .analyze(scenario, &chosen_option, &ethical_framework)
        .await;

    let decision = DecisionRepo::record(
        &state.pool,
        &CreateDecision {
            game_id,
            dilemma_id,
            dilemma_text,
            dilemma_category,
            chosen_option,
            ethical_framework,
            analysis,
        },
    )
    .await?;

    tracing::info!(
        game_id,
        dilemma_id,
        framework = %decision.ethical_framework,
        has_analysis = decision.analysis.is_some(),
        "Decision recorded"
    );

    let newly_unlocked_achievements = achievements::evaluate_for_game(&state.pool, game_id).await;

    Ok(Json(MakeDecisionResponse {
        status: "success",
        ethical_framework_image: framework_image(&decision.ethical_framework),
        analysis: decision.analysis,
        newly_unlocked_achievements,
    }))
}
