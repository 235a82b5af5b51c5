//! Reconcile import rows against the catalog.
//!
//! Each valid row is compared with the stored book of the same code and
//! classified as an add, an update (with the differing fields), or a no-op.
//! In [`RunMode::Apply`] the matching write goes through the
//! [`CatalogGateway`]; in [`RunMode::Preview`] only lookups are issued, so
//! a preview never changes the catalog (not even by creating categories).

use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use bookload_catalog::BookFields;

use crate::error::ImportError;
use crate::events::ImportEvents;
use crate::gateway::CatalogGateway;
use crate::normalize::{Normalized, NormalizedBook, SkippedRow, normalize};
use crate::row::{Row, RowReader};
use crate::summary::{FileResult, RunAccumulator, RunSummary};

/// Whether reconciliation writes to the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Apply,
    Preview,
}

impl RunMode {
    pub fn is_preview(self) -> bool {
        self == RunMode::Preview
    }
}

/// A reconcilable book attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Authors,
    Category,
    Copies,
}

impl BookField {
    pub fn label(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Authors => "Authors",
            BookField::Category => "Category",
            BookField::Copies => "Copies",
        }
    }
}

/// One field that differs between the catalog and the incoming row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: BookField,
    pub old: Option<String>,
    pub new: Option<String>,
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |v: &Option<String>| match (self.field, v) {
            (_, None) => "none".to_string(),
            (BookField::Copies, Some(v)) => v.clone(),
            (_, Some(v)) => format!("'{v}'"),
        };
        write!(
            f,
            "{}: {} \u{2192} {}",
            self.field.label(),
            render(&self.old),
            render(&self.new)
        )
    }
}

/// What reconciliation decided for a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No book with this code exists yet.
    Add(BookFields),
    /// The book exists and at least one field differs.
    Update {
        fields: BookFields,
        changes: Vec<FieldChange>,
    },
    /// The book exists with identical fields.
    Unchanged,
    /// The row was rejected by the normalizer.
    Invalid(SkippedRow),
}

/// The result of reconciling one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// 1-based data row number within the source (header excluded).
    pub row: usize,
    pub book_code: String,
    pub mode: RunMode,
    pub action: Action,
}

impl RowOutcome {
    /// Label used in update listings: `"<code> (<title>)"` with the new title.
    pub fn label(&self) -> String {
        match &self.action {
            Action::Add(fields) | Action::Update { fields, .. } => {
                format!("{} ({})", self.book_code, fields.title)
            }
            Action::Unchanged | Action::Invalid(_) => self.book_code.clone(),
        }
    }
}

/// Compare stored fields against normalized input, in reporting order.
pub fn diff_fields(old: &BookFields, new: &BookFields) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if old.title != new.title {
        changes.push(FieldChange {
            field: BookField::Title,
            old: Some(old.title.clone()),
            new: Some(new.title.clone()),
        });
    }
    if old.authors != new.authors {
        changes.push(FieldChange {
            field: BookField::Authors,
            old: old.authors.clone(),
            new: new.authors.clone(),
        });
    }
    if old.category != new.category {
        changes.push(FieldChange {
            field: BookField::Category,
            old: Some(old.category.clone()),
            new: Some(new.category.clone()),
        });
    }
    if old.number_of_copies != new.number_of_copies {
        changes.push(FieldChange {
            field: BookField::Copies,
            old: Some(old.number_of_copies.to_string()),
            new: Some(new.number_of_copies.to_string()),
        });
    }

    changes
}

/// Decide and, in apply mode, perform the action for one valid row.
pub fn reconcile_row<G: CatalogGateway + ?Sized>(
    gateway: &mut G,
    book: &NormalizedBook,
    mode: RunMode,
) -> Result<Action, ImportError> {
    let Some(existing) = gateway.find_book(&book.book_code)? else {
        if !mode.is_preview() {
            let category = gateway.get_or_create_category(&book.fields.category)?;
            gateway.create_book(&book.book_code, &category, &book.fields)?;
        }
        return Ok(Action::Add(book.fields.clone()));
    };

    let changes = diff_fields(&existing.fields(), &book.fields);
    if changes.is_empty() {
        return Ok(Action::Unchanged);
    }

    if !mode.is_preview() {
        let category = gateway.get_or_create_category(&book.fields.category)?;
        gateway.upsert_book(&book.book_code, &category, &book.fields)?;
    }

    Ok(Action::Update {
        fields: book.fields.clone(),
        changes,
    })
}

/// Reconcile a stream of rows from one source, in order.
///
/// Stops at the first source-level error (missing column, unreadable
/// record, catalog failure). Invalid rows are counted and skipped.
pub fn process_rows<G, I>(
    gateway: &mut G,
    source: &str,
    rows: I,
    mode: RunMode,
    events: &dyn ImportEvents,
) -> Result<FileResult, ImportError>
where
    G: CatalogGateway + ?Sized,
    I: IntoIterator<Item = Result<Row, ImportError>>,
{
    let mut result = FileResult::new(source);

    for (i, row) in rows.into_iter().enumerate() {
        let row = row?;
        let outcome = match normalize(&row)? {
            Normalized::Invalid(skipped) => RowOutcome {
                row: i + 1,
                book_code: skipped.book_code.clone(),
                mode,
                action: Action::Invalid(skipped),
            },
            Normalized::Valid(book) => {
                let action = reconcile_row(gateway, &book, mode)?;
                RowOutcome {
                    row: i + 1,
                    book_code: book.book_code,
                    mode,
                    action,
                }
            }
        };

        events.on_row(source, &outcome);
        result.record(&outcome);
    }

    Ok(result)
}

/// Open one CSV source and reconcile all of its rows.
pub fn import_file<G: CatalogGateway + ?Sized>(
    gateway: &mut G,
    path: &Path,
    mode: RunMode,
    events: &dyn ImportEvents,
) -> Result<FileResult, ImportError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ImportError::SourceNotFound(path.to_path_buf()),
        _ => ImportError::Io(e),
    })?;
    let rows = RowReader::new(file)?;
    process_rows(gateway, &path.display().to_string(), rows, mode, events)
}

/// Import every source in order, continuing past per-file failures.
///
/// In apply mode each completed file is recorded through
/// [`CatalogGateway::record_import`].
pub fn run_import<G: CatalogGateway + ?Sized>(
    gateway: &mut G,
    sources: &[PathBuf],
    mode: RunMode,
    events: &dyn ImportEvents,
) -> RunSummary {
    let mut totals = RunAccumulator::default();

    for path in sources {
        let source = path.display().to_string();
        events.on_file_start(&source);

        match import_file(gateway, path, mode, events) {
            Ok(result) => {
                if !mode.is_preview()
                    && let Err(e) = gateway.record_import(&result)
                {
                    log::warn!("Failed to log import of {}: {}", source, e);
                }
                events.on_file_complete(&result);
                totals.add(result);
            }
            Err(e) => {
                events.on_file_error(&source, &e);
                totals.record_failure(&source, &e);
            }
        }
    }

    totals.finalize()
}
