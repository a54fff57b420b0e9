//! Question repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// A row of the `questions` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Database access for questions
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    pool: PgPool,
}

impl QuestionRepository {
    /// Creates a new QuestionRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every question ordered by id
    pub async fn get_all(&self) -> Result<Vec<QuestionRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, user_id, text, created_at
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Retrieves a question by id
    pub async fn get_by_id(&self, id: i64) -> Result<QuestionRow, DatabaseError> {
        sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, user_id, text, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Question", id))
    }

    /// Inserts a question and returns the stored row with its generated id
    pub async fn insert(
        &self,
        user_id: Uuid,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<QuestionRow, DatabaseError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (user_id, text, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, text, created_at
            "#,
        )
        .bind(user_id)
        .bind(text)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes a question; its answers go with it through `ON DELETE CASCADE`
    ///
    /// Returns `NotFound` when no row was deleted.
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Question", id));
        }
        Ok(())
    }
}
