//! Repository layer for document store operations

pub mod books;

use mongodb::Database;

use crate::config::DatabaseConfig;

/// Main repository struct holding the store handles
#[derive(Clone)]
pub struct Repository {
    pub database: Database,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository scoped to the configured collection
    pub fn new(database: Database, config: &DatabaseConfig) -> Self {
        Self {
            books: books::BooksRepository::new(database.collection(&config.collection)),
            database,
        }
    }
}
