//! Gameplay logic that spans the database and the text providers.
//!
//! Contains the dilemma source (generation with predefined fallback and
//! caching) and the achievement evaluator.

pub mod achievements;
pub mod dilemma_source;
