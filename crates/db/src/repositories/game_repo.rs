//! Repository for the `games` table.

use chrono::Utc;
use quandary_core::types::DbId;

use crate::models::game::{CreateGame, Game};
use crate::DbPool;

/// Column list for `games` queries. Older files may hold NULL counters.
const COLUMNS: &str =
    "id, player_name, start_time, end_time, COALESCE(dilemmas_answered, 0) AS dilemmas_answered";

/// Provides CRUD operations for game sessions.
pub struct GameRepo;

impl GameRepo {
    /// Start a new game, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (player_name, start_time, dilemmas_answered) \
             VALUES ($1, $2, 0) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.player_name)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Stamp `end_time` on a game. Closing an already closed game moves the
    /// stamp forward. Returns `None` if the game does not exist.
    pub async fn close(pool: &DbPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET end_time = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Every player name that has started at least one game.
    pub async fn distinct_player_names(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT player_name FROM games \
             WHERE player_name IS NOT NULL ORDER BY player_name",
        )
        .fetch_all(pool)
        .await
    }
}
