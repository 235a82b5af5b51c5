use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookload_catalog::{BookFields, pluralize};
use bookload_import::{
    Action, FileResult, ImportError, ImportEvents, RowOutcome, RunMode, RunSummary, SkippedRow,
    SqliteCatalog, collect_sources,
};

use crate::CliError;

use super::catalog_db_path;

/// Run the import command.
pub(crate) fn run_import(
    db: Option<PathBuf>,
    files: Vec<PathBuf>,
    folder: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CliError> {
    let mode = if dry_run {
        RunMode::Preview
    } else {
        RunMode::Apply
    };

    let sources = collect_sources(&files, folder.as_deref())?;
    let db_path = catalog_db_path(db)?;

    let conn = if mode.is_preview() && !db_path.exists() {
        log::debug!(
            "No database at {}, previewing against an empty catalog",
            db_path.display()
        );
        bookload_db::open_memory()
    } else {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        bookload_db::open_database(&db_path)
    }
    .map_err(|e| CliError::database(format!("Failed to open catalog database: {}", e)))?;

    log::info!(
        "Importing {} {} into {}",
        sources.len(),
        pluralize("file", sources.len() as u64),
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if mode.is_preview() {
        log::info!(
            "{}",
            "[DRY RUN] No changes will be saved.".if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    let mut gateway = SqliteCatalog::new(&conn);
    let summary = bookload_import::run_import(&mut gateway, &sources, mode, &CliImportEvents);

    print_final_summary(&summary, mode);
    Ok(())
}

/// Renders import events as console output.
struct CliImportEvents;

impl ImportEvents for CliImportEvents {
    fn on_file_start(&self, source: &str) {
        crate::log_blank();
        log::info!(
            "{}",
            format!("=== Processing file: {} ===", source).if_supports_color(Stdout, |t| t.bold()),
        );
    }

    fn on_row(&self, source: &str, outcome: &RowOutcome) {
        let code = &outcome.book_code;
        match (&outcome.action, outcome.mode) {
            (Action::Add(fields), RunMode::Apply) => log::info!(
                "{} {} ({})",
                "Added new book:".if_supports_color(Stdout, |t| t.green()),
                code,
                fields.title,
            ),
            (Action::Add(fields), RunMode::Preview) => log::info!(
                "{} {}",
                "[DRY RUN] Would ADD".if_supports_color(Stdout, |t| t.green()),
                describe_addition(code, fields),
            ),
            (Action::Update { fields, .. }, RunMode::Apply) => log::info!(
                "{} {} ({})",
                "Updated existing book:".if_supports_color(Stdout, |t| t.yellow()),
                code,
                fields.title,
            ),
            (Action::Update { changes, .. }, RunMode::Preview) => {
                log::info!(
                    "{} {}:",
                    "[DRY RUN] Would UPDATE".if_supports_color(Stdout, |t| t.yellow()),
                    code,
                );
                for change in changes {
                    log::info!("  - {}", change);
                }
            }
            (Action::Unchanged, RunMode::Apply) => {
                log::debug!("{}:{} {} unchanged", source, outcome.row, code)
            }
            (Action::Unchanged, RunMode::Preview) => log::info!(
                "{} {} (no changes)",
                "[DRY RUN] Would SKIP".if_supports_color(Stdout, |t| t.dimmed()),
                code,
            ),
            (Action::Invalid(row), _) => log::warn!(
                "{} {}",
                format!("Skipping row with {}:", row.cause).if_supports_color(Stdout, |t| t.red()),
                describe_skipped(row),
            ),
        }
    }

    fn on_file_complete(&self, result: &FileResult) {
        crate::log_blank();
        log::info!("Summary for {}:", result.source);
        log_counts(result.added, result.updated, result.skipped);
        log_updated(&result.updated_books);
        log_skipped(&result.skipped_rows);
    }

    fn on_file_error(&self, source: &str, error: &ImportError) {
        log::error!(
            "{} {}: {}",
            "Failed to import".if_supports_color(Stdout, |t| t.red()),
            source,
            error,
        );
    }
}

fn print_final_summary(summary: &RunSummary, mode: RunMode) {
    crate::log_blank();
    log::info!(
        "{}",
        "=== Final Summary ===".if_supports_color(Stdout, |t| t.bold()),
    );

    let processed = summary.files.len() as u64;
    log::info!("{} {} processed", processed, pluralize("file", processed));
    log_counts(summary.added, summary.updated, summary.skipped);
    log_updated(&summary.updated_books);
    log_skipped(&summary.skipped_rows);

    if !summary.failed.is_empty() {
        let failed = summary.failed.len() as u64;
        log::warn!(
            "{}",
            format!("{} {} failed:", failed, pluralize("file", failed))
                .if_supports_color(Stdout, |t| t.red()),
        );
        for f in &summary.failed {
            log::warn!("  - {}: {}", f.source, f.error);
        }
    }

    if mode.is_preview() {
        crate::log_blank();
        log::info!(
            "{}",
            "Dry run: no changes made.".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}

fn log_counts(added: u64, updated: u64, skipped: u64) {
    log::info!("  {}", count_phrase(added, "book", "added"));
    log::info!("  {}", count_phrase(updated, "book", "updated"));
    log::info!("  {}", count_phrase(skipped, "row", "skipped"));
}

fn log_updated(updated: &[String]) {
    if updated.is_empty() {
        return;
    }
    log::info!("  Updated books:");
    for label in updated {
        log::info!("    - {}", label);
    }
}

fn log_skipped(skipped: &[SkippedRow]) {
    if skipped.is_empty() {
        return;
    }
    log::info!("  Skipped rows:");
    for row in skipped {
        log::info!("    - {} ({})", describe_skipped(row), row.cause);
    }
}

/// `"3 books added"`, `"1 row skipped"`.
fn count_phrase(count: u64, noun: &str, verb: &str) -> String {
    format!("{} {} {}", count, pluralize(noun, count), verb)
}

/// `"F001 - Dune by Herbert (3 copies) in Fiction"`.
fn describe_addition(code: &str, fields: &BookFields) -> String {
    let by = match &fields.authors {
        Some(a) => format!(" by {}", a),
        None => String::new(),
    };
    format!(
        "{} - {}{} ({} {}) in {}",
        code,
        fields.title,
        by,
        fields.number_of_copies,
        pluralize("copy", fields.number_of_copies as u64),
        fields.category,
    )
}

fn describe_skipped(row: &SkippedRow) -> String {
    format!("Category: {} | Book Code: {}", row.category, row.book_code)
}
