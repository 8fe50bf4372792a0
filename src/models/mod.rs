//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;
pub mod language;

// Re-export commonly used types
pub use author::{Author, CreateAuthor, UpdateAuthor};
pub use book::{Book, BookShort, CreateBook, UpdateBook};
pub use book_instance::{
    BookInstance, BookInstanceQuery, CreateBookInstance, LoanStatus, UpdateBookInstance,
};
pub use genre::{CreateGenre, Genre, UpdateGenre};
pub use language::{CreateLanguage, Language, UpdateLanguage};
