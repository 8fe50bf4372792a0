//! Book domain methods on Repository
//!
//! Books own an ordered genre association kept in the book_genres junction
//! table; the junction id carries the association order. Writes touching
//! both tables run in one transaction: a rejected genre reference rolls
//! back the book row with it.

use std::collections::HashMap;

use sqlx::{Row, SqliteConnection};

use super::Repository;
use crate::{
    error::{constraint_violation, AppError, AppResult},
    models::book::{Book, BookShort, CreateBook, UpdateBook},
    models::genre::Genre,
};

impl Repository {
    // =========================================================================
    // READ
    // =========================================================================

    /// List all books as list rows: author display string, joined genre
    /// names and copy count included.
    pub async fn books_list(&self) -> AppResult<Vec<BookShort>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.title,
                   a.last_name || ', ' || a.first_name AS author,
                   (SELECT COUNT(*) FROM book_instances bi WHERE bi.book_id = b.id) AS copy_count
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut genre_names = self.genre_names_by_book().await?;

        let mut result = Vec::new();
        for row in rows {
            let id: i64 = row.get("id");
            let names = genre_names.remove(&id).unwrap_or_default();
            let display_genre = names
                .iter()
                .take(3)
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            result.push(BookShort {
                id,
                title: row.get("title"),
                // NULL author propagates through the concat
                author: row.get("author"),
                display_genre,
                copy_count: row.get("copy_count"),
            });
        }

        Ok(result)
    }

    /// Get book by ID, genres loaded in association order
    pub async fn books_get(&self, id: i64) -> AppResult<Book> {
        let mut book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        book.genres = self.books_genres(id).await?;
        Ok(book)
    }

    /// List the books of one author, oldest record first
    pub async fn books_for_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let mut books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author_id = ? ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        for book in &mut books {
            book.genres = self.books_genres(book.id).await?;
        }
        Ok(books)
    }

    /// Count the copies of one book
    pub async fn books_copy_count(&self, id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM book_instances WHERE book_id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Genres of one book, in association order
    pub async fn books_genres(&self, book_id: i64) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = ?
            ORDER BY bg.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Genre names for every book in one query, grouped by book id
    async fn genre_names_by_book(&self) -> AppResult<HashMap<i64, Vec<String>>> {
        let rows = sqlx::query(
            r#"
            SELECT bg.book_id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            ORDER BY bg.book_id, bg.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut map: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            map.entry(row.get("book_id")).or_default().push(row.get("name"));
        }
        Ok(map)
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Create book with its genre associations in one transaction
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO books (title, author_id, summary, isbn)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(data.author_id)
        .bind(&data.summary)
        .bind(&data.isbn)
        .fetch_one(&mut *tx)
        .await
        .map_err(constraint_violation)?;
        let id: i64 = row.get("id");

        self.books_set_genres(&mut tx, id, &data.genre_ids).await?;
        tx.commit().await?;

        self.books_get(id).await
    }

    /// Update book (full replacement, genre set included) in one transaction
    pub async fn books_update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author_id = ?, summary = ?, isbn = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.title)
        .bind(data.author_id)
        .bind(&data.summary)
        .bind(&data.isbn)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(constraint_violation)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        self.books_set_genres(&mut tx, id, &data.genre_ids).await?;
        tx.commit().await?;

        self.books_get(id).await
    }

    /// Delete book. Copies survive with their book reference nulled;
    /// the genre associations are removed.
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    /// Replace all genres for a book: delete existing rows then insert the
    /// new set in the submitted order. Repeated ids keep their first slot.
    /// Runs on the caller's transaction.
    async fn books_set_genres(
        &self,
        tx: &mut SqliteConnection,
        book_id: i64,
        genre_ids: &[i64],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = ?")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        let mut seen: Vec<i64> = Vec::new();
        for &genre_id in genre_ids {
            if seen.contains(&genre_id) {
                continue;
            }
            seen.push(genre_id);

            sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES (?, ?)")
                .bind(book_id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await
                .map_err(constraint_violation)?;
        }
        Ok(())
    }
}
