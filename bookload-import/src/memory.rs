//! In-memory [`CatalogGateway`], for tests and dry experiments.

use std::collections::BTreeMap;

use bookload_catalog::types::*;
use bookload_db::OperationError;

use crate::gateway::CatalogGateway;
use crate::summary::FileResult;

/// A catalog held in ordered maps. Ids are assigned sequentially from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCatalog {
    categories: BTreeMap<String, Category>,
    books: BTreeMap<String, Book>,
    imports: Vec<String>,
    next_category_id: i64,
    next_book_id: i64,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self, book_code: &str) -> Option<&Book> {
        self.books.get(book_code)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Sources passed to [`CatalogGateway::record_import`], in order.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    fn build_book(
        &mut self,
        id: Option<i64>,
        book_code: &str,
        category: &Category,
        fields: &BookFields,
    ) -> Book {
        let id = id.unwrap_or_else(|| {
            self.next_book_id += 1;
            self.next_book_id
        });
        Book {
            id,
            book_code: book_code.to_string(),
            title: fields.title.clone(),
            authors: fields.authors.clone(),
            category: category.clone(),
            number_of_copies: fields.number_of_copies,
        }
    }
}

impl CatalogGateway for MemoryCatalog {
    fn get_or_create_category(&mut self, name: &str) -> Result<Category, OperationError> {
        if let Some(category) = self.categories.get(name) {
            return Ok(category.clone());
        }
        self.next_category_id += 1;
        let category = Category {
            id: self.next_category_id,
            name: name.to_string(),
        };
        self.categories.insert(name.to_string(), category.clone());
        Ok(category)
    }

    fn find_book(&self, book_code: &str) -> Result<Option<Book>, OperationError> {
        Ok(self.books.get(book_code).cloned())
    }

    fn create_book(
        &mut self,
        book_code: &str,
        category: &Category,
        fields: &BookFields,
    ) -> Result<Book, OperationError> {
        if self.books.contains_key(book_code) {
            return Err(OperationError::AlreadyExists {
                entity_type: "book".to_string(),
                id: book_code.to_string(),
            });
        }
        let book = self.build_book(None, book_code, category, fields);
        self.books.insert(book_code.to_string(), book.clone());
        Ok(book)
    }

    fn upsert_book(
        &mut self,
        book_code: &str,
        category: &Category,
        fields: &BookFields,
    ) -> Result<(Book, bool), OperationError> {
        let existing_id = self.books.get(book_code).map(|b| b.id);
        let book = self.build_book(existing_id, book_code, category, fields);
        self.books.insert(book_code.to_string(), book.clone());
        Ok((book, existing_id.is_none()))
    }

    fn record_import(&mut self, result: &FileResult) -> Result<(), OperationError> {
        self.imports.push(result.source.clone());
        Ok(())
    }
}
