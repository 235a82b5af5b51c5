//! The narrow catalog interface the import engine talks to.
//!
//! The engine decides ADD / UPDATE / UNCHANGED itself; implementations only
//! look things up and write what they are told to.

use bookload_catalog::types::*;
use bookload_db::{OperationError, operations, queries};
use rusqlite::Connection;

use crate::summary::FileResult;

/// Keyed access to categories and books.
pub trait CatalogGateway {
    /// Return the named category, creating it if needed.
    fn get_or_create_category(&mut self, name: &str) -> Result<Category, OperationError>;

    /// Look up a book by its code.
    fn find_book(&self, book_code: &str) -> Result<Option<Book>, OperationError>;

    /// Create a book that does not exist yet.
    fn create_book(
        &mut self,
        book_code: &str,
        category: &Category,
        fields: &BookFields,
    ) -> Result<Book, OperationError>;

    /// Create or fully replace a book by code. Returns `(book, created)`.
    fn upsert_book(
        &mut self,
        book_code: &str,
        category: &Category,
        fields: &BookFields,
    ) -> Result<(Book, bool), OperationError>;

    /// Record a completed file import. Catalogs without an import log ignore this.
    fn record_import(&mut self, _result: &FileResult) -> Result<(), OperationError> {
        Ok(())
    }
}

/// [`CatalogGateway`] over a SQLite catalog database.
pub struct SqliteCatalog<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteCatalog<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl CatalogGateway for SqliteCatalog<'_> {
    fn get_or_create_category(&mut self, name: &str) -> Result<Category, OperationError> {
        operations::get_or_create_category(self.conn, name)
    }

    fn find_book(&self, book_code: &str) -> Result<Option<Book>, OperationError> {
        queries::find_book_by_code(self.conn, book_code)
    }

    fn create_book(
        &mut self,
        book_code: &str,
        category: &Category,
        fields: &BookFields,
    ) -> Result<Book, OperationError> {
        operations::insert_book(self.conn, book_code, category, fields)
    }

    fn upsert_book(
        &mut self,
        book_code: &str,
        category: &Category,
        fields: &BookFields,
    ) -> Result<(Book, bool), OperationError> {
        operations::upsert_book(self.conn, book_code, category, fields)
    }

    fn record_import(&mut self, result: &FileResult) -> Result<(), OperationError> {
        let entry = ImportLog {
            id: 0,
            source_name: result.source.clone(),
            imported_at: chrono::Utc::now().to_rfc3339(),
            records_created: result.added as i64,
            records_updated: result.updated as i64,
            records_skipped: result.skipped as i64,
        };
        operations::insert_import_log(self.conn, &entry)?;
        Ok(())
    }
}
