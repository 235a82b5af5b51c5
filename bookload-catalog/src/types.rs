//! Data model types for the book catalog.
//!
//! These types represent the persistent catalog schema: categories, books,
//! and import tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Category ────────────────────────────────────────────────────────────────

/// A book category. Names are unique and compared exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A book in the catalog, identified by its unique `book_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub book_code: String,
    pub title: String,
    pub authors: Option<String>,
    pub category: Category,
    pub number_of_copies: u32,
}

impl Book {
    /// A book is available when at least one copy is held.
    pub fn available(&self) -> bool {
        self.number_of_copies > 0
    }

    /// The reconcilable fields of this book, in the same shape an import row
    /// normalizes to.
    pub fn fields(&self) -> BookFields {
        BookFields {
            category: self.category.name.clone(),
            title: self.title.clone(),
            authors: self.authors.clone(),
            number_of_copies: self.number_of_copies,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.book_code, self.title)
    }
}

/// The fields an import is allowed to set on a book.
///
/// `category` is the category name; the storage layer resolves it to an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub category: String,
    pub title: String,
    pub authors: Option<String>,
    pub number_of_copies: u32,
}

/// Serializable view of a book, including the derived availability flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: i64,
    pub category: String,
    pub book_code: String,
    pub title: String,
    pub authors: Option<String>,
    pub number_of_copies: u32,
    pub available: bool,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            category: book.category.name.clone(),
            book_code: book.book_code.clone(),
            title: book.title.clone(),
            authors: book.authors.clone(),
            number_of_copies: book.number_of_copies,
            available: book.available(),
        }
    }
}

// ── Import Tracking ─────────────────────────────────────────────────────────

/// A record of one file imported into the catalog.
#[derive(Debug, Clone)]
pub struct ImportLog {
    pub id: i64,
    pub source_name: String,
    pub imported_at: String,
    pub records_created: i64,
    pub records_updated: i64,
    pub records_skipped: i64,
}
