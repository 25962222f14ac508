//! Repository for the `ai_dilemmas_cache` table.

use chrono::Utc;

use crate::models::dilemma_cache::CreateCachedDilemma;
use crate::DbPool;

/// Stores generated dilemmas keyed by their scenario text.
pub struct DilemmaCacheRepo;

impl DilemmaCacheRepo {
    /// Cache a dilemma unless the same scenario text is already stored.
    /// Returns `true` if a row was inserted.
    pub async fn insert_if_absent(
        pool: &DbPool,
        input: &CreateCachedDilemma,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO ai_dilemmas_cache \
                (dilemma_text, scenario, options, category, image_url, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (dilemma_text) DO NOTHING",
        )
        .bind(&input.scenario)
        .bind(&input.scenario)
        .bind(&input.options_json)
        .bind(&input.category)
        .bind(&input.image_url)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fill in the image of an entry cached before images were stored.
    /// Entries that already have one are left unchanged.
    pub async fn backfill_image(
        pool: &DbPool,
        scenario: &str,
        image_url: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE ai_dilemmas_cache SET image_url = $2 \
             WHERE dilemma_text = $1 AND (image_url IS NULL OR image_url = '')",
        )
        .bind(scenario)
        .bind(image_url)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The stored image for a scenario, if any.
    pub async fn find_image(pool: &DbPool, scenario: &str) -> Result<Option<String>, sqlx::Error> {
        let image = sqlx::query_scalar::<_, Option<String>>(
            "SELECT image_url FROM ai_dilemmas_cache WHERE dilemma_text = $1",
        )
        .bind(scenario)
        .fetch_optional(pool)
        .await?;
        Ok(image.flatten().filter(|url| !url.is_empty()))
    }

}
