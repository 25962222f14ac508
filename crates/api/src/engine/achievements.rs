//! Achievement evaluation against stored decisions.

use quandary_core::achievements::{newly_satisfied, DecisionFact, PlayerHistory};
use quandary_core::types::DbId;
use quandary_db::models::achievement::AchievementSummary;
use quandary_db::repositories::{AchievementRepo, DecisionRepo, GameRepo};
use quandary_db::DbPool;

/// Unlock every achievement the player newly satisfies.
///
/// Rules see the player's lifetime decisions; `game_id` only feeds the
/// single-session rule. Returns the summaries of achievements unlocked by
/// this call, in catalog order.
pub async fn evaluate(
    pool: &DbPool,
    player_name: &str,
    game_id: Option<DbId>,
) -> Result<Vec<AchievementSummary>, sqlx::Error> {
    let facts = DecisionRepo::list_facts_for_player(pool, player_name).await?;
    if facts.is_empty() {
        return Ok(Vec::new());
    }

    let session_decisions = match game_id {
        Some(id) => Some(u64::try_from(DecisionRepo::count_for_game(pool, id).await?).unwrap_or(0)),
        None => None,
    };
    let history = PlayerHistory::new(
        facts.into_iter().map(DecisionFact::from).collect(),
        session_decisions,
    );

    let unlocked = AchievementRepo::unlocked_codes(pool, player_name).await?;
    let definitions = AchievementRepo::list_definitions(pool).await?;

    let rules = definitions.iter().filter_map(|a| match a.rule() {
        Ok(rule) => Some((a.code.as_str(), rule)),
        Err(e) => {
            tracing::warn!(code = %a.code, error = %e, "Skipping achievement with invalid rule");
            None
        }
    });
    let satisfied = newly_satisfied(rules, &unlocked, &history);

    let mut newly_unlocked = Vec::with_capacity(satisfied.len());
    for code in satisfied {
        let Some(achievement) = definitions.iter().find(|a| a.code == code) else {
            continue;
        };
        // A false return means a concurrent request got there first.
        if AchievementRepo::unlock(pool, player_name, achievement.id).await? {
            tracing::info!(player_name, code, "Achievement unlocked");
            newly_unlocked.push(achievement.summary());
        }
    }

    Ok(newly_unlocked)
}

/// [`evaluate`] for a game's owner, with errors logged and swallowed.
pub async fn evaluate_for_game(pool: &DbPool, game_id: DbId) -> Vec<AchievementSummary> {
    let player_name = match GameRepo::find_by_id(pool, game_id).await {
        Ok(Some(game)) => game.player_name,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(game_id, error = %e, "Failed to load game for achievements");
            return Vec::new();
        }
    };

    match evaluate(pool, &player_name, Some(game_id)).await {
        Ok(unlocked) => unlocked,
        Err(e) => {
            tracing::warn!(game_id, error = %e, "Achievement evaluation failed");
            Vec::new()
        }
    }
}

/// Evaluate every player that has ever started a game. Returns the total
/// number of unlocks. A failure for one player does not stop the rest.
pub async fn evaluate_all_players(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let players = GameRepo::distinct_player_names(pool).await?;
    let mut total = 0;

    for player_name in &players {
        match evaluate(pool, player_name, None).await {
            Ok(unlocked) if !unlocked.is_empty() => {
                tracing::info!(
                    player_name,
                    count = unlocked.len(),
                    "Retroactive achievements unlocked"
                );
                total += unlocked.len();
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(player_name, error = %e, "Retroactive evaluation failed");
            }
        }
    }

    Ok(total)
}
