//! Language domain methods on Repository

use super::Repository;
use crate::{
    error::{constraint_violation, AppError, AppResult},
    models::language::{CreateLanguage, Language, UpdateLanguage},
};

impl Repository {
    /// List all languages
    pub async fn languages_list(&self) -> AppResult<Vec<Language>> {
        let rows = sqlx::query_as::<_, Language>(
            "SELECT * FROM languages ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get language by ID
    pub async fn languages_get(&self, id: i64) -> AppResult<Language> {
        sqlx::query_as::<_, Language>("SELECT * FROM languages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))
    }

    /// Create language
    pub async fn languages_create(&self, data: &CreateLanguage) -> AppResult<Language> {
        let row = sqlx::query_as::<_, Language>(
            "INSERT INTO languages (name) VALUES (?) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(constraint_violation)?;
        Ok(row)
    }

    /// Update language (full replacement)
    pub async fn languages_update(&self, id: i64, data: &UpdateLanguage) -> AppResult<Language> {
        sqlx::query_as::<_, Language>(
            "UPDATE languages SET name = ? WHERE id = ? RETURNING *",
        )
        .bind(&data.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(constraint_violation)?
        .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))
    }

    /// Delete language. Copies referencing it keep going with a null
    /// language reference.
    pub async fn languages_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM languages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Language {} not found", id)));
        }
        Ok(())
    }
}
