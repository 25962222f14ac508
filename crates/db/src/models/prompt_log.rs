//! Prompt log entries.

use quandary_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `prompts_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptLog {
    pub id: DbId,
    pub prompt_text: String,
    pub response_text: String,
    pub timestamp: Timestamp,
}
