use axum::extract::State;
use axum::Json;
use quandary_core::dilemma::Dilemma;

use crate::engine::dilemma_source;
use crate::state::AppState;

/// GET /api/get_dilemma
pub async fn get_dilemma(State(state): State<AppState>) -> Json<Dilemma> {
    let dilemma = dilemma_source::next_dilemma(&state.pool, &state.ai).await;
    tracing::debug!(id = dilemma.id, category = %dilemma.category, "Dilemma served");
    Json(dilemma)
}
