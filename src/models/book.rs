//! Book model and related types.
//!
//! A Book is the catalog entry, not a physical copy; copies are
//! [`BookInstance`](super::book_instance::BookInstance) records. Reference
//! fields serialize under their relation names (`author`, `genre`) so the
//! payloads line up with the admin projection's field catalog.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::genre::Genre;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Referenced author id; nulled when the author is deleted.
    #[serde(rename = "author")]
    pub author_id: Option<i64>,
    pub summary: String,
    pub isbn: String,
    // Relation (loaded separately, in association order)
    #[sqlx(skip)]
    #[serde(rename = "genre", default)]
    pub genres: Vec<Genre>,
}

impl Book {
    /// Comma-joined names of up to the first 3 associated genres, in
    /// association order.
    pub fn display_genre(&self) -> String {
        self.genres
            .iter()
            .take(3)
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Short book representation for lists
#[derive(Debug, Clone, Serialize)]
pub struct BookShort {
    pub id: i64,
    pub title: String,
    /// Author display string ("last_name, first_name"), if any
    pub author: Option<String>,
    /// First genre names, pre-joined for the list column
    pub display_genre: String,
    /// Number of copies referencing this book
    pub copy_count: i64,
}

/// Create book request. Only the ISBN's length is checked, never its
/// shape or checksum.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[serde(rename = "author", default)]
    pub author_id: Option<i64>,
    #[validate(length(min = 1, max = 1000, message = "Summary must be 1-1000 characters"))]
    pub summary: String,
    #[validate(length(min = 1, max = 13, message = "ISBN must be 1-13 characters"))]
    pub isbn: String,
    /// Genre ids to associate, in order; may be empty.
    #[serde(rename = "genre", default)]
    pub genre_ids: Vec<i64>,
}

/// Update book request (full replacement, genre set included)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[serde(rename = "author", default)]
    pub author_id: Option<i64>,
    #[validate(length(min = 1, max = 1000, message = "Summary must be 1-1000 characters"))]
    pub summary: String,
    #[validate(length(min = 1, max = 13, message = "ISBN must be 1-13 characters"))]
    pub isbn: String,
    #[serde(rename = "genre", default)]
    pub genre_ids: Vec<i64>,
}
