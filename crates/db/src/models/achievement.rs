//! Achievement catalog and unlock models.

use quandary_core::achievements::AchievementRule;
use quandary_core::error::CoreError;
use quandary_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub achievement_type: String,
    pub condition_value: Option<String>,
}

impl Achievement {
    /// Parse the stored rule columns.
    pub fn rule(&self) -> Result<AchievementRule, CoreError> {
        AchievementRule::parse(&self.achievement_type, self.condition_value.as_deref())
    }

    pub fn summary(&self) -> AchievementSummary {
        AchievementSummary {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// What the client sees about a newly unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementSummary {
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// An achievement a player has unlocked, joined with its definition.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnlockedAchievement {
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: Timestamp,
}

/// A catalog entry annotated with whether the player holds it.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementProgress {
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
}

/// Everything the achievements screen shows for one player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerAchievements {
    pub unlocked: Vec<UnlockedAchievement>,
    pub all: Vec<AchievementProgress>,
    pub total: usize,
    pub unlocked_count: usize,
}
