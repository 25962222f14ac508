//! Where the SQLite file lives.
//!
//! Serverless hosts only allow writes under the temp directory, so the
//! deployment mode decides between a temp-dir path and a local file.

use std::path::{Path, PathBuf};

/// File name used in both deployment modes.
pub const DEFAULT_DB_FILE: &str = "ethical_game.db";

/// Resolve the database path.
///
/// An explicit path always wins; otherwise serverless deployments use
/// `<temp_dir>/ethical_game.db` and local runs use `./ethical_game.db`.
pub fn resolve_database_path(explicit: Option<&str>, serverless: bool, temp_dir: &Path) -> PathBuf {
    match explicit.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => PathBuf::from(path),
        None if serverless => temp_dir.join(DEFAULT_DB_FILE),
        None => PathBuf::from(DEFAULT_DB_FILE),
    }
}

/// Whether an environment flag such as `VERCEL` is switched on.
pub fn flag_enabled(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}
