use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_existing_catalog, truncate_str};

/// Show the most recent file imports.
pub(crate) fn run_history(db: Option<PathBuf>, limit: u32) -> Result<(), CliError> {
    let Some((conn, _)) = open_existing_catalog(db)? else {
        return Ok(());
    };

    let logs = bookload_db::list_import_logs(&conn, Some(limit))
        .map_err(|e| CliError::database(format!("Failed to read import history: {}", e)))?;

    if logs.is_empty() {
        log::info!("No imports recorded yet.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!(
            "  {:<25} {:<40} {:>7} {:>7} {:>7}",
            "Imported at", "Source", "Added", "Updated", "Skipped"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for entry in &logs {
        log::info!(
            "  {:<25} {:<40} {:>7} {:>7} {:>7}",
            entry.imported_at,
            truncate_str(&entry.source_name, 40),
            entry.records_created,
            entry.records_updated,
            entry.records_skipped,
        );
    }

    Ok(())
}
