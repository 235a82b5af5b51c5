use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_existing_catalog;

pub(crate) fn run_stats(db: Option<PathBuf>) -> Result<(), CliError> {
    let Some((conn, db_path)) = open_existing_catalog(db)? else {
        return Ok(());
    };

    let stats = bookload_db::catalog_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query catalog stats: {}", e)))?;

    log::info!(
        "{}",
        "Catalog Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Categories:     {:>8}", stats.categories);
    log::info!("  Books:          {:>8}", stats.books);
    log::info!("  Copies:         {:>8}", stats.copies);
    log::info!("  Unavailable:    {:>8} (no copies)", stats.unavailable);
    log::info!("  Imports:        {:>8}", stats.imports);

    Ok(())
}
