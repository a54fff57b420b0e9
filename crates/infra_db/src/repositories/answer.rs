//! Answer repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// A row of the `answers` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AnswerRow {
    pub id: i64,
    pub question_id: i64,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Database access for answers
#[derive(Debug, Clone)]
pub struct AnswerRepository {
    pool: PgPool,
}

impl AnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every answer ordered by id
    pub async fn get_all(&self) -> Result<Vec<AnswerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Returns the answers to one question, oldest first
    pub async fn find_by_question(&self, question_id: i64) -> Result<Vec<AnswerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Retrieves an answer by id
    pub async fn get_by_id(&self, id: i64) -> Result<AnswerRow, DatabaseError> {
        sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Answer", id))
    }

    /// Inserts an answer
    ///
    /// A `question_id` with no matching question fails with
    /// `ForeignKeyViolation`.
    pub async fn insert(
        &self,
        question_id: i64,
        user_id: Uuid,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<AnswerRow, DatabaseError> {
        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            INSERT INTO answers (question_id, user_id, text, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question_id, user_id, text, created_at
            "#,
        )
        .bind(question_id)
        .bind(user_id)
        .bind(text)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes an answer, returning `NotFound` when no row was deleted
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Answer", id));
        }
        Ok(())
    }
}
