pub(crate) mod config;
pub(crate) mod history;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod stats;

use std::path::PathBuf;

use bookload_db::Connection;

use crate::CliError;
use crate::settings::{Settings, resolve_db_path};

/// Resolve the database path from `--db`, settings, or the default location.
pub(crate) fn catalog_db_path(db: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let settings = Settings::load()?;
    Ok(resolve_db_path(db, &settings).0)
}

/// Open an existing catalog for reading.
///
/// Returns `None` (after telling the user) when there is no database yet.
pub(crate) fn open_existing_catalog(
    db: Option<PathBuf>,
) -> Result<Option<(Connection, PathBuf)>, CliError> {
    let db_path = catalog_db_path(db)?;

    if !db_path.exists() {
        log::warn!("No catalog database found at {}", db_path.display());
        log::info!("Run 'bookload import <FILES>' to create one.");
        return Ok(None);
    }

    let conn = bookload_db::open_database(&db_path)
        .map_err(|e| CliError::database(format!("Failed to open catalog database: {}", e)))?;
    Ok(Some((conn, db_path)))
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
