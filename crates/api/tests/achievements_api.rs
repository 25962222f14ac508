//! Integration tests for achievement evaluation and the achievements route.

mod common;

use axum::http::StatusCode;
use common::{body_json, decide, get, start_game};
use quandary_api::engine::achievements;
use quandary_core::achievements::ACHIEVEMENT_CATALOG;
use quandary_core::category::CORE_CATEGORIES;
use sqlx::SqlitePool;

fn codes(json: &serde_json::Value) -> Vec<String> {
    json["newly_unlocked_achievements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["code"].as_str().unwrap().to_string())
        .collect()
}

async fn unlock_count(pool: &SqlitePool, player: &str, code: &str) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM player_achievements pa \
         JOIN achievements a ON a.id = pa.achievement_id \
         WHERE pa.player_name = $1 AND a.code = $2",
    )
    .bind(player)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn first_decision_unlocks_first_dilemma(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let game_id = start_game(&pool, "Ada").await;

    let json = decide(&pool, game_id, "autonomy", "medicine").await;
    assert_eq!(codes(&json), vec!["first_dilemma".to_string()]);

    let unlocked = &json["newly_unlocked_achievements"][0];
    assert_eq!(unlocked["name"], "First Step");
    assert!(unlocked["icon"].is_string());
    assert!(unlocked["description"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn quantity_unlocks_exactly_at_threshold_and_once(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let game_id = start_game(&pool, "Ada").await;

    // Alternate frameworks so no consistency badge interferes before the tenth.
    for i in 0..9 {
        let framework = if i % 2 == 0 { "autonomy" } else { "deontology" };
        let json = decide(&pool, game_id, framework, "medicine").await;
        assert!(!codes(&json).contains(&"ten_dilemmas".to_string()), "decision {i}");
    }
    assert_eq!(unlock_count(&pool, "Ada", "ten_dilemmas").await, 0);

    let json = decide(&pool, game_id, "ecocentrism", "medicine").await;
    let unlocked = codes(&json);
    assert!(unlocked.contains(&"ten_dilemmas".to_string()));
    // Ten decisions in one game also satisfies the single-session badge.
    assert!(unlocked.contains(&"speedster".to_string()));

    // Re-evaluation through the stats route writes nothing new.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/get_stats/{game_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let again = achievements::evaluate(&pool, "Ada", Some(game_id)).await.unwrap();
    assert!(again.is_empty());
    assert_eq!(unlock_count(&pool, "Ada", "ten_dilemmas").await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lifetime_decisions_span_games(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let first = start_game(&pool, "Ada").await;
    let second = start_game(&pool, "Ada").await;

    for framework in ["autonomy", "deontology", "autonomy", "deontology", "autonomy"] {
        decide(&pool, first, framework, "medicine").await;
    }
    for framework in ["deontology", "autonomy", "deontology", "autonomy"] {
        decide(&pool, second, framework, "medicine").await;
    }
    let json = decide(&pool, second, "ecocentrism", "medicine").await;

    let unlocked = codes(&json);
    assert!(unlocked.contains(&"ten_dilemmas".to_string()));
    // Only five decisions in this game.
    assert!(!unlocked.contains(&"speedster".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn explorer_requires_every_core_category(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let game_id = start_game(&pool, "Ada").await;

    let (last, rest) = CORE_CATEGORIES.split_last().unwrap();
    for category in rest {
        let json = decide(&pool, game_id, "autonomy", category).await;
        assert!(!codes(&json).contains(&"explorer".to_string()));
    }

    let json = decide(&pool, game_id, "autonomy", last).await;
    assert!(codes(&json).contains(&"explorer".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn consistency_counts_only_its_framework(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let game_id = start_game(&pool, "Ada").await;

    for _ in 0..4 {
        decide(&pool, game_id, "utilitarianism", "classic").await;
    }
    for _ in 0..3 {
        let json = decide(&pool, game_id, "deontology", "classic").await;
        assert!(!codes(&json).contains(&"utilitarian".to_string()));
    }

    let json = decide(&pool, game_id, "utilitarianism", "classic").await;
    let unlocked = codes(&json);
    assert!(unlocked.contains(&"utilitarian".to_string()));
    assert!(!unlocked.contains(&"deontologist".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn player_without_decisions_unlocks_nothing(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    start_game(&pool, "Idle").await;

    let unlocked = achievements::evaluate(&pool, "Idle", None).await.unwrap();
    assert!(unlocked.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn retroactive_pass_unlocks_for_existing_players(pool: SqlitePool) {
    let ada = start_game(&pool, "Ada").await;
    let bea = start_game(&pool, "Bea").await;
    // Decisions recorded before the catalog existed unlock nothing.
    decide(&pool, ada, "autonomy", "medicine").await;
    decide(&pool, bea, "deontology", "society").await;
    assert_eq!(unlock_count(&pool, "Ada", "first_dilemma").await, 0);

    common::seed_catalog(&pool).await;
    let total = achievements::evaluate_all_players(&pool).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(unlock_count(&pool, "Ada", "first_dilemma").await, 1);
    assert_eq!(unlock_count(&pool, "Bea", "first_dilemma").await, 1);

    assert_eq!(achievements::evaluate_all_players(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_achievements_lists_catalog_with_unlock_state(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let game_id = start_game(&pool, "Ada").await;
    decide(&pool, game_id, "autonomy", "medicine").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/get_achievements/Ada").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], ACHIEVEMENT_CATALOG.len());
    assert_eq!(json["unlocked_count"], 1);
    assert_eq!(json["unlocked"][0]["code"], "first_dilemma");
    assert!(json["unlocked"][0]["unlocked_at"].is_string());

    let all = json["all"].as_array().unwrap();
    assert_eq!(all.len(), ACHIEVEMENT_CATALOG.len());
    assert_eq!(all[0]["code"], "first_dilemma");
    assert_eq!(all[0]["unlocked"], true);
    assert!(all[1..].iter().all(|a| a["unlocked"] == false));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_achievements_for_unknown_player_is_empty(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/get_achievements/Nobody").await).await;
    assert_eq!(json["unlocked_count"], 0);
    assert_eq!(json["unlocked"], serde_json::json!([]));
    assert_eq!(json["total"], ACHIEVEMENT_CATALOG.len());
}
