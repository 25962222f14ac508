//! Repository for the `achievements` and `player_achievements` tables.

use std::collections::HashSet;

use chrono::Utc;
use quandary_core::achievements::AchievementDefinition;
use quandary_core::types::DbId;

use crate::models::achievement::{Achievement, UnlockedAchievement};
use crate::DbPool;

const COLUMNS: &str = "id, code, name, description, icon, achievement_type, condition_value";

/// Provides catalog and unlock operations for achievements.
pub struct AchievementRepo;

impl AchievementRepo {
    // -----------------------------------------------------------------------
    // Catalog
    // -----------------------------------------------------------------------

    /// Insert every catalog entry whose code is not present yet. Existing
    /// rows are left alone. Returns the number of rows inserted.
    pub async fn seed_catalog(
        pool: &DbPool,
        catalog: &[AchievementDefinition],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for definition in catalog {
            let result = sqlx::query(
                "INSERT INTO achievements \
                    (code, name, description, icon, achievement_type, condition_value) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (code) DO NOTHING",
            )
            .bind(definition.code)
            .bind(definition.name)
            .bind(definition.description)
            .bind(definition.icon)
            .bind(definition.rule.kind())
            .bind(definition.rule.condition())
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// All catalog rows in insertion order.
    pub async fn list_definitions(pool: &DbPool) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM achievements ORDER BY id");
        sqlx::query_as::<_, Achievement>(&query)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Unlocks
    // -----------------------------------------------------------------------

    /// Codes of the achievements the player already holds.
    pub async fn unlocked_codes(
        pool: &DbPool,
        player_name: &str,
    ) -> Result<HashSet<String>, sqlx::Error> {
        let codes = sqlx::query_scalar::<_, String>(
            "SELECT a.code FROM player_achievements pa \
             JOIN achievements a ON a.id = pa.achievement_id \
             WHERE pa.player_name = $1",
        )
        .bind(player_name)
        .fetch_all(pool)
        .await?;
        Ok(codes.into_iter().collect())
    }

    /// Record an unlock. Returns `false` when the player already held it.
    pub async fn unlock(
        pool: &DbPool,
        player_name: &str,
        achievement_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO player_achievements (player_name, achievement_id, unlocked_at) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (player_name, achievement_id) DO NOTHING",
        )
        .bind(player_name)
        .bind(achievement_id)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The player's unlocks, most recent first.
    pub async fn list_unlocked_for_player(
        pool: &DbPool,
        player_name: &str,
    ) -> Result<Vec<UnlockedAchievement>, sqlx::Error> {
        sqlx::query_as::<_, UnlockedAchievement>(
            "SELECT a.code, a.name, a.description, a.icon, pa.unlocked_at \
             FROM player_achievements pa \
             JOIN achievements a ON a.id = pa.achievement_id \
             WHERE pa.player_name = $1 \
             ORDER BY pa.unlocked_at DESC, pa.id DESC",
        )
        .bind(player_name)
        .fetch_all(pool)
        .await
    }
}
