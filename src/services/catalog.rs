//! Catalog service
//!
//! The operation surface an admin front end drives. Requests are
//! validated here before they reach the store; reads pass straight
//! through.

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        book::{Book, BookShort, CreateBook, UpdateBook},
        book_instance::{
            BookInstance, BookInstanceQuery, CreateBookInstance, UpdateBookInstance,
        },
        genre::{CreateGenre, Genre, UpdateGenre},
        language::{CreateLanguage, Language, UpdateLanguage},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // GENRES
    // =========================================================================

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres_list().await
    }

    pub async fn get_genre(&self, id: i64) -> AppResult<Genre> {
        self.repository.genres_get(id).await
    }

    pub async fn create_genre(&self, data: &CreateGenre) -> AppResult<Genre> {
        data.validate()?;
        let genre = self.repository.genres_create(data).await?;
        tracing::info!("Catalog create: genre id={}", genre.id);
        Ok(genre)
    }

    pub async fn update_genre(&self, id: i64, data: &UpdateGenre) -> AppResult<Genre> {
        data.validate()?;
        self.repository.genres_update(id, data).await
    }

    pub async fn delete_genre(&self, id: i64) -> AppResult<()> {
        self.repository.genres_delete(id).await?;
        tracing::info!("Catalog delete: genre id={}", id);
        Ok(())
    }

    // =========================================================================
    // LANGUAGES
    // =========================================================================

    pub async fn list_languages(&self) -> AppResult<Vec<Language>> {
        self.repository.languages_list().await
    }

    pub async fn get_language(&self, id: i64) -> AppResult<Language> {
        self.repository.languages_get(id).await
    }

    pub async fn create_language(&self, data: &CreateLanguage) -> AppResult<Language> {
        data.validate()?;
        let language = self.repository.languages_create(data).await?;
        tracing::info!("Catalog create: language id={}", language.id);
        Ok(language)
    }

    pub async fn update_language(&self, id: i64, data: &UpdateLanguage) -> AppResult<Language> {
        data.validate()?;
        self.repository.languages_update(id, data).await
    }

    pub async fn delete_language(&self, id: i64) -> AppResult<()> {
        self.repository.languages_delete(id).await?;
        tracing::info!("Catalog delete: language id={}", id);
        Ok(())
    }

    // =========================================================================
    // AUTHORS
    // =========================================================================

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors_list().await
    }

    pub async fn get_author(&self, id: i64) -> AppResult<Author> {
        self.repository.authors_get(id).await
    }

    pub async fn create_author(&self, data: &CreateAuthor) -> AppResult<Author> {
        data.validate()?;
        let author = self.repository.authors_create(data).await?;
        tracing::info!("Catalog create: author id={}", author.id);
        Ok(author)
    }

    pub async fn update_author(&self, id: i64, data: &UpdateAuthor) -> AppResult<Author> {
        data.validate()?;
        self.repository.authors_update(id, data).await
    }

    pub async fn delete_author(&self, id: i64) -> AppResult<()> {
        self.repository.authors_delete(id).await?;
        tracing::info!("Catalog delete: author id={}", id);
        Ok(())
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    pub async fn list_books(&self) -> AppResult<Vec<BookShort>> {
        self.repository.books_list().await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books_get(id).await
    }

    /// Books of one author, for the author detail page
    pub async fn list_books_for_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        self.repository.books_for_author(author_id).await
    }

    /// Number of copies of one book
    pub async fn copy_count(&self, book_id: i64) -> AppResult<i64> {
        self.repository.books_copy_count(book_id).await
    }

    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books_create(data).await?;
        tracing::info!("Catalog create: book id={}", book.id);
        Ok(book)
    }

    pub async fn update_book(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        data.validate()?;
        self.repository.books_update(id, data).await
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!("Catalog delete: book id={}", id);
        Ok(())
    }

    // =========================================================================
    // BOOK INSTANCES
    // =========================================================================

    pub async fn list_book_instances(&self, query: &BookInstanceQuery) -> AppResult<Vec<BookInstance>> {
        self.repository.book_instances_list(query).await
    }

    pub async fn get_book_instance(&self, id: Uuid) -> AppResult<BookInstance> {
        self.repository.book_instances_get(id).await
    }

    pub async fn create_book_instance(&self, data: &CreateBookInstance) -> AppResult<BookInstance> {
        data.validate()?;
        let instance = self.repository.book_instances_create(data).await?;
        tracing::info!("Catalog create: book instance id={}", instance.id);
        Ok(instance)
    }

    pub async fn update_book_instance(&self, id: Uuid, data: &UpdateBookInstance) -> AppResult<BookInstance> {
        data.validate()?;
        self.repository.book_instances_update(id, data).await
    }

    pub async fn delete_book_instance(&self, id: Uuid) -> AppResult<()> {
        self.repository.book_instances_delete(id).await?;
        tracing::info!("Catalog delete: book instance id={}", id);
        Ok(())
    }
}
