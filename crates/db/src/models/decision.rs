//! Decision models.

use std::collections::BTreeMap;

use quandary_core::achievements::DecisionFact;
use quandary_core::category::normalize_category;
use quandary_core::framework::normalize_framework_label;
use quandary_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `decisions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Decision {
    pub id: DbId,
    pub game_id: DbId,
    pub dilemma_id: i64,
    pub dilemma_text: String,
    pub dilemma_category: Option<String>,
    pub chosen_option: String,
    pub ethical_framework: String,
    pub analysis: Option<String>,
    pub timestamp: Timestamp,
}

/// DTO for recording a decision. Labels are expected to be normalized.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDecision {
    pub game_id: DbId,
    pub dilemma_id: i64,
    pub dilemma_text: String,
    pub dilemma_category: String,
    pub chosen_option: String,
    pub ethical_framework: String,
    pub analysis: Option<String>,
}

/// The columns achievement rules read from each decision.
#[derive(Debug, Clone, FromRow)]
pub struct DecisionFactRow {
    pub ethical_framework: Option<String>,
    pub dilemma_category: Option<String>,
    pub analysis: Option<String>,
}

impl From<DecisionFactRow> for DecisionFact {
    fn from(row: DecisionFactRow) -> Self {
        DecisionFact::from_stored(
            row.ethical_framework.as_deref(),
            row.dilemma_category.as_deref(),
            row.analysis.as_deref(),
        )
    }
}

/// Aggregates for one game.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameStats {
    pub framework_stats: BTreeMap<String, i64>,
    pub category_stats: BTreeMap<String, i64>,
    pub total_decisions: i64,
}

impl GameStats {
    /// Count decisions by normalized framework and category. A missing
    /// category counts as `general`; a missing framework is not counted.
    pub fn tally(rows: impl IntoIterator<Item = DecisionFactRow>) -> Self {
        let mut stats = Self::default();
        for row in rows {
            stats.total_decisions += 1;

            let framework = row.ethical_framework.as_deref().filter(|f| !f.trim().is_empty());
            if let Some(framework) = framework {
                *stats
                    .framework_stats
                    .entry(normalize_framework_label(framework))
                    .or_insert(0) += 1;
            }

            let category = normalize_category(row.dilemma_category.as_deref().unwrap_or_default());
            *stats.category_stats.entry(category).or_insert(0) += 1;
        }
        stats
    }
}
