//! Library catalog data model types and small reporting helpers.
//!
//! This crate defines the persistent data model for the book catalog without
//! any database dependencies. Consumers can use these types directly for
//! serialization, display, or passing to `bookload-db` for persistence.

pub mod types;
pub mod util;

pub use types::*;
pub use util::pluralize;
