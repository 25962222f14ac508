//! Supplies the next dilemma to play.
//!
//! A generated dilemma is preferred; any provider failure falls back to a
//! random entry from the predefined catalog. Generated dilemmas are cached
//! by scenario text and unusable responses go to the prompt log.

use quandary_ai::{AiClient, AiError};
use quandary_core::dilemma::{random_predefined, Dilemma, GeneratedDilemma, GENERATED_ID_RANGE};
use quandary_core::imagery::image_for;
use quandary_db::models::dilemma_cache::CreateCachedDilemma;
use quandary_db::repositories::{DilemmaCacheRepo, PromptLogRepo};
use quandary_db::DbPool;
use rand::Rng;

/// Produce the next dilemma. Never fails: the predefined catalog is the
/// last resort.
pub async fn next_dilemma(pool: &DbPool, ai: &AiClient) -> Dilemma {
    match ai.try_generate_dilemma().await {
        Ok(generated) => from_generated(pool, generated).await,
        Err(AiError::NotConfigured) => predefined(),
        Err(AiError::Malformed {
            prompt,
            response,
            reason,
        }) => {
            tracing::warn!(%reason, "Discarding malformed generated dilemma");
            let logged = format!("{reason}\nContent: {response}");
            if let Err(e) = PromptLogRepo::insert(pool, &prompt, &logged).await {
                tracing::warn!(error = %e, "Failed to record prompt log entry");
            }
            predefined()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Dilemma generation failed, using predefined catalog");
            predefined()
        }
    }
}

/// A random catalog entry with its computed image.
pub fn predefined() -> Dilemma {
    let entry = random_predefined();
    Dilemma {
        id: entry.id,
        category: entry.category.to_string(),
        scenario: entry.scenario.to_string(),
        options: entry.options(),
        image_url: image_for(entry.scenario, entry.category).to_string(),
    }
}

async fn from_generated(pool: &DbPool, generated: GeneratedDilemma) -> Dilemma {
    let computed = image_for(&generated.scenario, &generated.category);

    let cached = match DilemmaCacheRepo::find_image(pool, &generated.scenario).await {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read dilemma cache");
            None
        }
    };

    cache_generated(pool, &generated, computed).await;

    let id = rand::rng().random_range(GENERATED_ID_RANGE);
    tracing::info!(id, category = %generated.category, "Serving generated dilemma");

    Dilemma {
        id,
        category: generated.category,
        scenario: generated.scenario,
        options: generated.options,
        image_url: cached.unwrap_or_else(|| computed.to_string()),
    }
}

/// Store a generated dilemma once per scenario text, back-filling the
/// image of older entries. Failures are logged and ignored.
async fn cache_generated(pool: &DbPool, generated: &GeneratedDilemma, image_url: &str) {
    let options_json = match serde_json::to_string(&generated.options) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize dilemma options");
            return;
        }
    };

    let input = CreateCachedDilemma {
        scenario: generated.scenario.clone(),
        options_json,
        category: generated.category.clone(),
        image_url: image_url.to_string(),
    };

    let result = async {
        let inserted = DilemmaCacheRepo::insert_if_absent(pool, &input).await?;
        if !inserted {
            DilemmaCacheRepo::backfill_image(pool, &input.scenario, image_url).await?;
        }
        Ok::<_, sqlx::Error>(inserted)
    }
    .await;

    match result {
        Ok(inserted) => tracing::debug!(inserted, "Cached generated dilemma"),
        Err(e) => tracing::warn!(error = %e, "Failed to cache generated dilemma"),
    }
}
