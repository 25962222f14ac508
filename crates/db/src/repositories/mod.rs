//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod achievement_repo;
pub mod decision_repo;
pub mod dilemma_cache_repo;
pub mod game_repo;
pub mod prompt_log_repo;

pub use achievement_repo::AchievementRepo;
pub use decision_repo::DecisionRepo;
pub use dilemma_cache_repo::DilemmaCacheRepo;
pub use game_repo::GameRepo;
pub use prompt_log_repo::PromptLogRepo;
