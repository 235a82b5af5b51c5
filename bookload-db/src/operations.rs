//! Write operations for categories, books, and the import log.

use bookload_catalog::types::*;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::queries;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
    #[error("Entity already exists: {entity_type} with id '{id}'")]
    AlreadyExists { entity_type: String, id: String },
}

// ── Category Operations ─────────────────────────────────────────────────────

/// Find a category by exact name.
pub fn find_category_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<Category>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name FROM categories WHERE name = ?1")?;
    let category = stmt
        .query_row(params![name], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .optional()?;
    Ok(category)
}

/// Return the category with this name, creating it if it doesn't exist yet.
pub fn get_or_create_category(conn: &Connection, name: &str) -> Result<Category, OperationError> {
    conn.execute(
        "INSERT OR IGNORE INTO categories (name) VALUES (?1)",
        params![name],
    )?;
    find_category_by_name(conn, name)?.ok_or_else(|| OperationError::NotFound {
        entity_type: "category".to_string(),
        id: name.to_string(),
    })
}

// ── Book Operations ─────────────────────────────────────────────────────────

/// Insert a new book under an already-resolved category.
///
/// Fails with a constraint error if `book_code` is already taken.
pub fn insert_book(
    conn: &Connection,
    book_code: &str,
    category: &Category,
    fields: &BookFields,
) -> Result<Book, OperationError> {
    conn.execute(
        "INSERT INTO books (category_id, book_code, title, authors, number_of_copies)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            category.id,
            book_code,
            fields.title,
            fields.authors,
            fields.number_of_copies,
        ],
    )?;
    Ok(Book {
        id: conn.last_insert_rowid(),
        book_code: book_code.to_string(),
        title: fields.title.clone(),
        authors: fields.authors.clone(),
        category: category.clone(),
        number_of_copies: fields.number_of_copies,
    })
}

/// Insert or fully replace a book by its code.
///
/// All fields are overwritten on conflict. Returns the stored book and
/// whether it was newly created.
pub fn upsert_book(
    conn: &Connection,
    book_code: &str,
    category: &Category,
    fields: &BookFields,
) -> Result<(Book, bool), OperationError> {
    let existed: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM books WHERE book_code = ?1)",
        params![book_code],
        |row| row.get(0),
    )?;

    conn.execute(
        "INSERT INTO books (category_id, book_code, title, authors, number_of_copies)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(book_code) DO UPDATE SET
             category_id = excluded.category_id,
             title = excluded.title,
             authors = excluded.authors,
             number_of_copies = excluded.number_of_copies,
             updated_at = datetime('now')",
        params![
            category.id,
            book_code,
            fields.title,
            fields.authors,
            fields.number_of_copies,
        ],
    )?;

    let book = queries::find_book_by_code(conn, book_code)?.ok_or_else(|| {
        OperationError::NotFound {
            entity_type: "book".to_string(),
            id: book_code.to_string(),
        }
    })?;
    Ok((book, !existed))
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Insert an import log entry. Returns the generated ID.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_name, imported_at,
             records_created, records_updated, records_skipped)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            log.source_name,
            log.imported_at,
            log.records_created,
            log.records_updated,
            log.records_skipped,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
