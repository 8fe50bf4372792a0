//! Genre domain methods on Repository

use super::Repository;
use crate::{
    error::{constraint_violation, AppError, AppResult},
    models::genre::{CreateGenre, Genre, UpdateGenre},
};

impl Repository {
    /// List all genres
    pub async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>(
            "SELECT * FROM genres ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get genre by ID
    pub async fn genres_get(&self, id: i64) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Create genre
    pub async fn genres_create(&self, data: &CreateGenre) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name) VALUES (?) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(constraint_violation)?;
        Ok(row)
    }

    /// Update genre (full replacement)
    pub async fn genres_update(&self, id: i64, data: &UpdateGenre) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = ? WHERE id = ? RETURNING *",
        )
        .bind(&data.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(constraint_violation)?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Delete genre. Its book associations go with it; the books stay.
    pub async fn genres_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Genre {} not found", id)));
        }
        Ok(())
    }
}
