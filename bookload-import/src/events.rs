//! Import event reporting.

use crate::engine::{Action, RowOutcome};
use crate::error::ImportError;
use crate::summary::FileResult;

/// Trait for receiving structured import events.
///
/// The engine only emits events; how they are shown is up to the receiver.
pub trait ImportEvents {
    /// Called before a source is opened.
    fn on_file_start(&self, source: &str);

    /// Called after each row is reconciled.
    fn on_row(&self, source: &str, outcome: &RowOutcome);

    /// Called when every row of a source has been processed.
    fn on_file_complete(&self, result: &FileResult);

    /// Called when a source is abandoned.
    fn on_file_error(&self, source: &str, error: &ImportError);
}

/// A no-op receiver that discards all events.
pub struct SilentEvents;

impl ImportEvents for SilentEvents {
    fn on_file_start(&self, _source: &str) {}
    fn on_row(&self, _source: &str, _outcome: &RowOutcome) {}
    fn on_file_complete(&self, _result: &FileResult) {}
    fn on_file_error(&self, _source: &str, _error: &ImportError) {}
}

/// A receiver that logs to the `log` crate without formatting.
pub struct LogEvents;

impl ImportEvents for LogEvents {
    fn on_file_start(&self, source: &str) {
        log::info!("Processing {}", source);
    }

    fn on_row(&self, source: &str, outcome: &RowOutcome) {
        match &outcome.action {
            Action::Add(_) => log::debug!("{}:{} add {}", source, outcome.row, outcome.label()),
            Action::Update { changes, .. } => log::debug!(
                "{}:{} update {} ({} fields)",
                source,
                outcome.row,
                outcome.label(),
                changes.len()
            ),
            Action::Unchanged => {
                log::debug!("{}:{} unchanged {}", source, outcome.row, outcome.book_code)
            }
            Action::Invalid(row) => log::warn!(
                "{}:{} skipped ({}): Category: {} | Book Code: {}",
                source,
                outcome.row,
                row.cause,
                row.category,
                row.book_code
            ),
        }
    }

    fn on_file_complete(&self, result: &FileResult) {
        log::info!(
            "{}: {} added, {} updated, {} skipped",
            result.source,
            result.added,
            result.updated,
            result.skipped
        );
    }

    fn on_file_error(&self, source: &str, error: &ImportError) {
        log::error!("{}: {}", source, error);
    }
}
