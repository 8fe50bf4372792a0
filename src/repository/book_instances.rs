//! Book instance domain methods on Repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::{constraint_violation, AppError, AppResult},
    models::book_instance::{
        BookInstance, BookInstanceQuery, CreateBookInstance, UpdateBookInstance,
    },
};

const SELECT_WITH_TITLE: &str = r#"
    SELECT bi.id, bi.book_id, bi.imprint, bi.due_back, bi.language_id,
           bi.status, bi.borrower, b.title AS book_title
    FROM book_instances bi
    LEFT JOIN books b ON b.id = bi.book_id
"#;

impl Repository {
    /// List book instances with optional filters, copies without a due
    /// date first, then by due date ascending
    pub async fn book_instances_list(&self, query: &BookInstanceQuery) -> AppResult<Vec<BookInstance>> {
        let mut conditions: Vec<&str> = Vec::new();

        if query.book_id.is_some() {
            conditions.push("bi.book_id = ?");
        }
        if query.status.is_some() {
            conditions.push("bi.status = ?");
        }
        if query.due_back.is_some() {
            conditions.push("bi.due_back = ?");
        }
        if query.due_before.is_some() {
            conditions.push("bi.due_back <= ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!("{} {} ORDER BY bi.due_back", SELECT_WITH_TITLE, where_clause);

        let mut builder = sqlx::query_as::<_, BookInstance>(&select_q);
        if let Some(book_id) = query.book_id { builder = builder.bind(book_id); }
        if let Some(status) = query.status { builder = builder.bind(status); }
        if let Some(due_back) = query.due_back { builder = builder.bind(due_back); }
        if let Some(due_before) = query.due_before { builder = builder.bind(due_before); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get book instance by ID
    pub async fn book_instances_get(&self, id: Uuid) -> AppResult<BookInstance> {
        let select_q = format!("{} WHERE bi.id = ?", SELECT_WITH_TITLE);
        sqlx::query_as::<_, BookInstance>(&select_q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    /// Create book instance with a fresh UUID
    pub async fn book_instances_create(&self, data: &CreateBookInstance) -> AppResult<BookInstance> {
        let id = Uuid::new_v4();
        let status = data.status.unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, due_back, language_id, status, borrower)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(data.due_back)
        .bind(data.language_id)
        .bind(status)
        .bind(&data.borrower)
        .execute(&self.pool)
        .await
        .map_err(constraint_violation)?;

        self.book_instances_get(id).await
    }

    /// Update book instance (full replacement)
    pub async fn book_instances_update(&self, id: Uuid, data: &UpdateBookInstance) -> AppResult<BookInstance> {
        let result = sqlx::query(
            r#"
            UPDATE book_instances
            SET book_id = ?, imprint = ?, due_back = ?, language_id = ?, status = ?, borrower = ?
            WHERE id = ?
            "#,
        )
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(data.due_back)
        .bind(data.language_id)
        .bind(data.status)
        .bind(&data.borrower)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(constraint_violation)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book instance {} not found", id)));
        }

        self.book_instances_get(id).await
    }

    /// Delete book instance
    pub async fn book_instances_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book instance {} not found", id)));
        }
        Ok(())
    }
}
