use std::sync::Arc;

use quandary_ai::AiClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quandary_db::DbPool,
    /// Text providers for dilemma generation and decision analysis.
    pub ai: Arc<AiClient>,
}
