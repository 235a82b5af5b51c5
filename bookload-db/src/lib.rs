//! SQLite persistence layer for the book catalog.
//!
//! Provides schema creation, CRUD operations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, find_category_by_name, get_or_create_category, insert_book,
    insert_import_log, upsert_book,
};
pub use queries::{
    CatalogStats, CategoryRow, catalog_stats, find_book_by_code, list_books, list_categories,
    list_import_logs,
};
pub use rusqlite::Connection;
pub use schema::{SchemaError, open_database, open_memory};
