//! Integration tests for the generated dilemma cache and prompt log.

use quandary_db::models::dilemma_cache::CreateCachedDilemma;
use quandary_db::repositories::{DilemmaCacheRepo, PromptLogRepo};
use sqlx::SqlitePool;

const SCENARIO: &str = "A city must choose between a new hospital and a flood barrier.";

fn cached(image_url: &str) -> CreateCachedDilemma {
    CreateCachedDilemma {
        scenario: SCENARIO.to_string(),
        options_json: r#"[{"text":"Hospital","ethical_value":"utilitarianism"}]"#.to_string(),
        category: "society".to_string(),
        image_url: image_url.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_scenarios_are_stored_once(pool: SqlitePool) {
    assert!(DilemmaCacheRepo::insert_if_absent(&pool, &cached("https://img/a")).await.unwrap());
    assert!(!DilemmaCacheRepo::insert_if_absent(&pool, &cached("https://img/b")).await.unwrap());

    let (scenario, category): (String, String) =
        sqlx::query_as("SELECT scenario, category FROM ai_dilemmas_cache WHERE dilemma_text = $1")
            .bind(SCENARIO)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(scenario, SCENARIO);
    assert_eq!(category, "society");
    assert_eq!(
        DilemmaCacheRepo::find_image(&pool, SCENARIO).await.unwrap().as_deref(),
        Some("https://img/a")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn backfill_only_touches_missing_images(pool: SqlitePool) {
    sqlx::query(
        "INSERT INTO ai_dilemmas_cache (dilemma_text, scenario, options) VALUES ($1, $2, '[]')",
    )
    .bind(SCENARIO)
    .bind(SCENARIO)
    .execute(&pool)
    .await
    .unwrap();
    assert!(DilemmaCacheRepo::find_image(&pool, SCENARIO).await.unwrap().is_none());

    assert!(DilemmaCacheRepo::backfill_image(&pool, SCENARIO, "https://img/first").await.unwrap());
    assert!(!DilemmaCacheRepo::backfill_image(&pool, SCENARIO, "https://img/second")
        .await
        .unwrap());
    assert_eq!(
        DilemmaCacheRepo::find_image(&pool, SCENARIO).await.unwrap().as_deref(),
        Some("https://img/first")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn prompt_log_keeps_raw_exchange(pool: SqlitePool) {
    PromptLogRepo::insert(&pool, "make a dilemma", "not json at all").await.unwrap();
    let entry = PromptLogRepo::insert(&pool, "make another", "{broken").await.unwrap();

    let recent: Vec<(i64, String)> =
        sqlx::query_as("SELECT id, response_text FROM prompts_log ORDER BY id DESC")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].0, entry.id);
    assert_eq!(recent[1].1, "not json at all");
}
