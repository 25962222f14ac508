//! Repository for the `decisions` table.

use chrono::Utc;
use quandary_core::types::DbId;

use crate::models::decision::{CreateDecision, Decision, DecisionFactRow, GameStats};
use crate::DbPool;

const COLUMNS: &str = "\
    id, game_id, dilemma_id, dilemma_text, dilemma_category, chosen_option, \
    ethical_framework, analysis, timestamp";

/// Provides write and aggregate operations for decisions.
pub struct DecisionRepo;

impl DecisionRepo {
    /// Insert a decision and bump the owning game's counter in one
    /// transaction.
    pub async fn record(pool: &DbPool, input: &CreateDecision) -> Result<Decision, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO decisions \
                (game_id, dilemma_id, dilemma_text, dilemma_category, chosen_option, \
                 ethical_framework, analysis, timestamp) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let decision = sqlx::query_as::<_, Decision>(&query)
            .bind(input.game_id)
            .bind(input.dilemma_id)
            .bind(&input.dilemma_text)
            .bind(&input.dilemma_category)
            .bind(&input.chosen_option)
            .bind(&input.ethical_framework)
            .bind(&input.analysis)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE games SET dilemmas_answered = COALESCE(dilemmas_answered, 0) + 1 \
             WHERE id = $1",
        )
        .bind(input.game_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(decision)
    }

    pub async fn count_for_game(pool: &DbPool, game_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM decisions WHERE game_id = $1")
            .bind(game_id)
            .fetch_one(pool)
            .await
    }

    /// The rule-relevant columns of every decision made in any game the
    /// player has started.
    pub async fn list_facts_for_player(
        pool: &DbPool,
        player_name: &str,
    ) -> Result<Vec<DecisionFactRow>, sqlx::Error> {
        sqlx::query_as::<_, DecisionFactRow>(
            "SELECT d.ethical_framework, d.dilemma_category, d.analysis \
             FROM decisions d \
             JOIN games g ON g.id = d.game_id \
             WHERE g.player_name = $1 \
             ORDER BY d.id",
        )
        .bind(player_name)
        .fetch_all(pool)
        .await
    }

    /// Decision counts for one game grouped by framework and by category.
    ///
    /// Labels are normalized while counting, so rows written with legacy
    /// labels share keys with newer ones.
    pub async fn stats_for_game(pool: &DbPool, game_id: DbId) -> Result<GameStats, sqlx::Error> {
        let rows = sqlx::query_as::<_, DecisionFactRow>(
            "SELECT ethical_framework, dilemma_category, analysis \
             FROM decisions \
             WHERE game_id = $1 \
             ORDER BY id",
        )
        .bind(game_id)
        .fetch_all(pool)
        .await?;

        Ok(GameStats::tally(rows))
    }
}
