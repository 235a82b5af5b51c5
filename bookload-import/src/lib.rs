//! Import book records from CSV files into the library catalog.
//!
//! This crate owns the import logic: reading header-keyed rows, normalizing
//! fields, reconciling each row against the catalog (add, update, or skip),
//! and accumulating per-file and per-run statistics. Catalog access goes
//! through the [`CatalogGateway`] trait so the engine can run against SQLite
//! or an in-memory fake.

pub mod discover;
pub mod engine;
pub mod error;
pub mod events;
pub mod gateway;
pub mod memory;
pub mod normalize;
pub mod row;
pub mod summary;

pub use discover::{collect_sources, scan_folder};
pub use engine::{
    Action, BookField, FieldChange, RowOutcome, RunMode, diff_fields, import_file, process_rows,
    reconcile_row, run_import,
};
pub use error::ImportError;
pub use events::{ImportEvents, LogEvents, SilentEvents};
pub use gateway::{CatalogGateway, SqliteCatalog};
pub use memory::MemoryCatalog;
pub use normalize::{Normalized, NormalizedBook, SkipCause, SkippedRow, normalize, parse_copies};
pub use row::{Row, RowReader};
pub use summary::{FailedSource, FileResult, RunAccumulator, RunSummary};
