use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookload_catalog::{BookSummary, pluralize};

use crate::CliError;

use super::{open_existing_catalog, truncate_str};

/// List books, optionally filtered to one category.
pub(crate) fn run_list(
    db: Option<PathBuf>,
    category: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let Some((conn, _)) = open_existing_catalog(db)? else {
        return Ok(());
    };

    let books = bookload_db::list_books(&conn, category.as_deref())
        .map_err(|e| CliError::database(format!("Failed to list books: {}", e)))?;

    if json {
        let summaries: Vec<BookSummary> = books.iter().map(BookSummary::from).collect();
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| CliError::other(format!("Failed to serialize books: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if books.is_empty() {
        match &category {
            Some(name) => log::info!("No books in category '{}'.", name),
            None => log::info!("The catalog is empty."),
        }
        return Ok(());
    }

    log::info!(
        "{}",
        format!(
            "  {:<10} {:<40} {:<24} {:<16} {:>6}",
            "Code", "Title", "Authors", "Category", "Copies"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for book in &books {
        let copies = format!("{:>6}", book.number_of_copies);
        log::info!(
            "  {:<10} {:<40} {:<24} {:<16} {}",
            truncate_str(&book.book_code, 10),
            truncate_str(&book.title, 40),
            truncate_str(book.authors.as_deref().unwrap_or("-"), 24),
            truncate_str(&book.category.name, 16),
            if book.available() {
                copies.if_supports_color(Stdout, |t| t.green()).to_string()
            } else {
                copies.if_supports_color(Stdout, |t| t.red()).to_string()
            },
        );
    }
    crate::log_blank();
    let n = books.len() as u64;
    log::info!("{} {}", n, pluralize("book", n));

    Ok(())
}

/// List categories with their book counts.
pub(crate) fn run_categories(db: Option<PathBuf>) -> Result<(), CliError> {
    let Some((conn, _)) = open_existing_catalog(db)? else {
        return Ok(());
    };

    let categories = bookload_db::list_categories(&conn)
        .map_err(|e| CliError::database(format!("Failed to list categories: {}", e)))?;

    if categories.is_empty() {
        log::info!("No categories yet.");
        return Ok(());
    }

    log::info!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
    for c in &categories {
        log::info!(
            "  {:<30} {:>6} {}",
            c.name.if_supports_color(Stdout, |t| t.cyan()),
            c.book_count,
            pluralize("book", c.book_count as u64),
        );
    }

    Ok(())
}
