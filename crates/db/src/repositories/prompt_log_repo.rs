//! Repository for the `prompts_log` table.

use chrono::Utc;

use crate::models::prompt_log::PromptLog;
use crate::DbPool;

const COLUMNS: &str = "id, prompt_text, response_text, timestamp";

/// Append-only log of provider exchanges that could not be used.
pub struct PromptLogRepo;

impl PromptLogRepo {
    pub async fn insert(
        pool: &DbPool,
        prompt_text: &str,
        response_text: &str,
    ) -> Result<PromptLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts_log (prompt_text, response_text, timestamp) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptLog>(&query)
            .bind(prompt_text)
            .bind(response_text)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

}
