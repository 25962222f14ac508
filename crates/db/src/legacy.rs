//! Additive reconciliation for database files written by older releases.
//!
//! Those releases created the same tables without some of the columns
//! the current schema has. `CREATE TABLE IF NOT EXISTS` leaves such tables
//! untouched, so the missing columns are added here by introspection.
//! Nothing is ever dropped or rewritten.

use crate::DbPool;

/// `(table, column, column definition)` for every column added after the
/// first release.
const ADDED_COLUMNS: &[(&str, &str, &str)] = &[
    ("decisions", "dilemma_category", "TEXT"),
    ("decisions", "analysis", "TEXT"),
    ("games", "dilemmas_answered", "INTEGER NOT NULL DEFAULT 0"),
    ("ai_dilemmas_cache", "image_url", "TEXT"),
];

/// Names of the columns currently present on `table`.
pub async fn column_names(pool: &DbPool, table: &str) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?)")
        .bind(table)
        .fetch_all(pool)
        .await
}

/// Add every known column that is missing. Returns `table.column` for each
/// column added.
pub async fn reconcile_columns(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
    let mut added = Vec::new();

    for (table, column, definition) in ADDED_COLUMNS {
        let existing = column_names(pool, table).await?;
        // Table absent entirely: nothing to reconcile.
        if existing.is_empty() || existing.iter().any(|c| c == column) {
            continue;
        }

        let statement = format!("ALTER TABLE {table} ADD COLUMN {column} {definition}");
        sqlx::query(&statement).execute(pool).await?;
        tracing::info!(table, column, "Added legacy column");
        added.push(format!("{table}.{column}"));
    }

    Ok(added)
}
