use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use quandary_db::models::achievement::{AchievementProgress, PlayerAchievements};
use quandary_db::repositories::AchievementRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/get_achievements/{player_name}
pub async fn get_achievements(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<PlayerAchievements>> {
    let Path(player_name) = path?;
    let unlocked = AchievementRepo::list_unlocked_for_player(&state.pool, &player_name).await?;
    let definitions = AchievementRepo::list_definitions(&state.pool).await?;

    let all: Vec<AchievementProgress> = definitions
        .iter()
        .map(|a| AchievementProgress {
            code: a.code.clone(),
            name: a.name.clone(),
            description: a.description.clone(),
            icon: a.icon.clone(),
            unlocked: unlocked.iter().any(|u| u.code == a.code),
        })
        .collect();

    Ok(Json(PlayerAchievements {
        total: all.len(),
        unlocked_count: unlocked.len(),
        unlocked,
        all,
    }))
}
