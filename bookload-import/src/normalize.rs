//! Field normalization for import rows.
//!
//! Trims the text columns, defaults the copy count, and sorts each row into
//! a reconcilable book or a skipped row with its cause.

use std::fmt;

use bookload_catalog::BookFields;

use crate::error::ImportError;
use crate::row::Row;

pub const CATEGORY: &str = "CATEGORY";
pub const BOOK_CODE: &str = "BOOK CODE";
pub const BOOK_TITLE: &str = "BOOK TITLE";
pub const BOOK_AUTHOR: &str = "BOOK AUTHOR";
pub const NO_OF_COPIES: &str = "NO. OF COPIES";

/// Columns every source must declare. Names are matched exactly.
pub const REQUIRED_COLUMNS: [&str; 5] = [CATEGORY, BOOK_CODE, BOOK_TITLE, BOOK_AUTHOR, NO_OF_COPIES];

/// Copy count used when the column is empty or not a non-negative integer.
pub const DEFAULT_COPIES: u32 = 1;

/// A validated row, ready for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBook {
    pub book_code: String,
    pub fields: BookFields,
}

/// Why a row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipCause {
    MissingTitle,
}

impl fmt::Display for SkipCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipCause::MissingTitle => f.write_str("missing title"),
        }
    }
}

/// A rejected row, keeping enough identity to find it in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub category: String,
    pub book_code: String,
    pub cause: SkipCause,
}

/// The normalizer's verdict for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Valid(NormalizedBook),
    Invalid(SkippedRow),
}

/// Normalize one row.
///
/// A missing column is an error for the whole source, not just this row.
pub fn normalize(row: &Row) -> Result<Normalized, ImportError> {
    let category = column(row, CATEGORY)?.trim().to_string();
    let book_code = column(row, BOOK_CODE)?.trim().to_string();
    let title = column(row, BOOK_TITLE)?.trim().to_string();
    let authors = normalize_authors(column(row, BOOK_AUTHOR)?);
    let number_of_copies = parse_copies(column(row, NO_OF_COPIES)?);

    if title.is_empty() {
        return Ok(Normalized::Invalid(SkippedRow {
            category,
            book_code,
            cause: SkipCause::MissingTitle,
        }));
    }

    Ok(Normalized::Valid(NormalizedBook {
        book_code,
        fields: BookFields {
            category,
            title,
            authors,
            number_of_copies,
        },
    }))
}

/// Parse a copy count, falling back to [`DEFAULT_COPIES`].
///
/// Negative numbers fall back too, so storage never sees one.
pub fn parse_copies(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(DEFAULT_COPIES)
}

/// Trim an author list; blank means unknown.
pub fn normalize_authors(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn column<'a>(row: &'a Row, name: &str) -> Result<&'a str, ImportError> {
    row.get(name).ok_or_else(|| ImportError::missing_column(name))
}
