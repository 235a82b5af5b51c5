//! Per-file results and the multi-file run accumulator.

use crate::engine::{Action, RowOutcome};
use crate::error::ImportError;
use crate::normalize::SkippedRow;

/// Counts and listings for one imported source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileResult {
    pub source: String,
    pub added: u64,
    pub updated: u64,
    /// Unchanged and invalid rows together.
    pub skipped: u64,
    /// `"<code> (<title>)"` for each updated book, in row order.
    pub updated_books: Vec<String>,
    /// Codes of rows that matched the catalog exactly.
    pub unchanged: Vec<String>,
    /// Rows rejected by the normalizer.
    pub skipped_rows: Vec<SkippedRow>,
}

impl FileResult {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Fold one row outcome into the counts.
    pub fn record(&mut self, outcome: &RowOutcome) {
        match &outcome.action {
            Action::Add(_) => self.added += 1,
            Action::Update { .. } => {
                self.updated += 1;
                self.updated_books.push(outcome.label());
            }
            Action::Unchanged => {
                self.skipped += 1;
                self.unchanged.push(outcome.book_code.clone());
            }
            Action::Invalid(row) => {
                self.skipped += 1;
                self.skipped_rows.push(row.clone());
            }
        }
    }
}

/// A source that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedSource {
    pub source: String,
    pub error: String,
}

/// Aggregate totals for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub added: u64,
    pub updated: u64,
    pub skipped: u64,
    pub updated_books: Vec<String>,
    pub unchanged: Vec<String>,
    pub skipped_rows: Vec<SkippedRow>,
    /// Per-file results in processing order.
    pub files: Vec<FileResult>,
    pub failed: Vec<FailedSource>,
}

/// Running totals over a sequence of [`FileResult`]s.
///
/// Lists are concatenated in the order files are added; a book updated by
/// two files appears twice.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    summary: RunSummary,
}

impl RunAccumulator {
    pub fn add(&mut self, result: FileResult) {
        let s = &mut self.summary;
        s.added += result.added;
        s.updated += result.updated;
        s.skipped += result.skipped;
        s.updated_books.extend(result.updated_books.iter().cloned());
        s.unchanged.extend(result.unchanged.iter().cloned());
        s.skipped_rows.extend(result.skipped_rows.iter().cloned());
        s.files.push(result);
    }

    pub fn record_failure(&mut self, source: &str, error: &ImportError) {
        self.summary.failed.push(FailedSource {
            source: source.to_string(),
            error: error.to_string(),
        });
    }

    pub fn finalize(self) -> RunSummary {
        self.summary
    }
}

impl Extend<FileResult> for RunAccumulator {
    fn extend<T: IntoIterator<Item = FileResult>>(&mut self, iter: T) {
        for result in iter {
            self.add(result);
        }
    }
}

impl FromIterator<FileResult> for RunSummary {
    fn from_iter<T: IntoIterator<Item = FileResult>>(iter: T) -> Self {
        let mut totals = RunAccumulator::default();
        totals.extend(iter);
        totals.finalize()
    }
}
