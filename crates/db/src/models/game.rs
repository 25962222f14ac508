//! Game session models.

use quandary_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Player name recorded when the client does not supply one.
pub const ANONYMOUS_PLAYER: &str = "Anonymous";

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub player_name: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub dilemmas_answered: i64,
}

/// DTO for starting a game.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub player_name: String,
}

impl CreateGame {
    /// Build the DTO, substituting [`ANONYMOUS_PLAYER`] for a blank name.
    pub fn for_player(name: Option<&str>) -> Self {
        let player_name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS_PLAYER)
            .to_string();
        Self { player_name }
    }
}
