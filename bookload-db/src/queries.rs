//! Read queries for the catalog database.
//!
//! Provides lookup by book code, listing, and summary statistics.

use bookload_catalog::types::*;
use rusqlite::{Connection, OptionalExtension, params};

use crate::operations::OperationError;

const BOOK_COLUMNS: &str = "b.id, b.book_code, b.title, b.authors, b.number_of_copies,
                c.id, c.name";

// ── Book Lookups ────────────────────────────────────────────────────────────

/// Find a book by its unique code.
pub fn find_book_by_code(
    conn: &Connection,
    book_code: &str,
) -> Result<Option<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOOK_COLUMNS}
         FROM books b JOIN categories c ON b.category_id = c.id
         WHERE b.book_code = ?1"
    ))?;
    let book = stmt.query_row(params![book_code], row_to_book).optional()?;
    Ok(book)
}

/// List books in storage order, optionally limited to one category.
pub fn list_books(
    conn: &Connection,
    category: Option<&str>,
) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOOK_COLUMNS}
         FROM books b JOIN categories c ON b.category_id = c.id
         WHERE ?1 IS NULL OR c.name = ?1
         ORDER BY b.id"
    ))?;
    let rows = stmt.query_map(params![category], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Category Queries ────────────────────────────────────────────────────────

/// A category with the number of books filed under it.
#[derive(Debug)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub book_count: i64,
}

/// List all categories by name, including empty ones.
pub fn list_categories(conn: &Connection) -> Result<Vec<CategoryRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.name, COUNT(b.id)
         FROM categories c LEFT JOIN books b ON b.category_id = c.id
         GROUP BY c.id ORDER BY c.name",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(CategoryRow {
            id: row.get(0)?,
            name: row.get(1)?,
            book_count: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get summary statistics for the catalog.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let categories: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
    let books: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?;
    let copies: i64 = conn.query_row(
        "SELECT COALESCE(SUM(number_of_copies), 0) FROM books",
        [],
        |r| r.get(0),
    )?;
    let unavailable: i64 = conn.query_row(
        "SELECT COUNT(*) FROM books WHERE number_of_copies = 0",
        [],
        |r| r.get(0),
    )?;
    let imports: i64 = conn.query_row("SELECT COUNT(*) FROM import_log", [], |r| r.get(0))?;

    Ok(CatalogStats {
        categories,
        books,
        copies,
        unavailable,
        imports,
    })
}

/// Summary statistics for the catalog.
#[derive(Debug)]
pub struct CatalogStats {
    pub categories: i64,
    pub books: i64,
    pub copies: i64,
    pub unavailable: i64,
    pub imports: i64,
}

// ── Import Log Queries ──────────────────────────────────────────────────────

/// List recent import logs, newest first.
pub fn list_import_logs(
    conn: &Connection,
    limit: Option<u32>,
) -> Result<Vec<ImportLog>, OperationError> {
    let limit = limit.unwrap_or(20);
    let mut stmt = conn.prepare(&format!(
        "SELECT id, source_name, imported_at,
                records_created, records_updated, records_skipped
         FROM import_log ORDER BY imported_at DESC, id DESC LIMIT {limit}"
    ))?;
    let rows = stmt.query_map([], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_name: row.get(1)?,
            imported_at: row.get(2)?,
            records_created: row.get(3)?,
            records_updated: row.get(4)?,
            records_skipped: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        book_code: row.get(1)?,
        title: row.get(2)?,
        authors: row.get(3)?,
        number_of_copies: row.get(4)?,
        category: Category {
            id: row.get(5)?,
            name: row.get(6)?,
        },
    })
}
