//! Repository layer for database operations
//!
//! A single [`Repository`] wraps the connection pool; the domain methods
//! live in per-record-type modules as `impl Repository` blocks.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod languages;

use sqlx::SqlitePool;

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
