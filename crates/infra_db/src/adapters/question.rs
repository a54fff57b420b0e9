//! PostgreSQL Question Adapter
//!
//! Implements [`QuestionPort`] on top of [`QuestionRepository`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError, QuestionId, UserId};
use domain_question::{NewQuestion, Question, QuestionPort};

use crate::repositories::question::{QuestionRepository, QuestionRow};

/// PostgreSQL-backed implementation of the QuestionPort trait
///
/// Deleting a question removes its answers through the `ON DELETE CASCADE`
/// foreign key on `answers.question_id`.
#[derive(Debug, Clone)]
pub struct PostgresQuestionAdapter {
    repository: QuestionRepository,
    pool: PgPool,
}

impl PostgresQuestionAdapter {
    /// Creates a new PostgreSQL question adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: QuestionRepository::new(pool.clone()),
            pool,
        }
    }
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: QuestionId::new(row.id),
            user_id: UserId::from_uuid(row.user_id),
            text: row.text,
            created_at: row.created_at,
        }
    }
}

impl DomainPort for PostgresQuestionAdapter {}

#[async_trait]
impl HealthCheckable for PostgresQuestionAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-question-adapter").await
    }
}

#[async_trait]
impl QuestionPort for PostgresQuestionAdapter {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Question>, PortError> {
        let rows = self.repository.get_all().await?;
        debug!(count = rows.len(), "loaded questions");
        Ok(rows.into_iter().map(Question::from).collect())
    }

    #[instrument(skip(self), fields(question_id = %id))]
    async fn get_by_id(&self, id: QuestionId) -> Result<Question, PortError> {
        let row = self.repository.get_by_id(id.value()).await?;
        Ok(row.into())
    }

    #[instrument(skip(self, question), fields(user_id = %question.user_id))]
    async fn save(&self, question: NewQuestion) -> Result<Question, PortError> {
        let row = self
            .repository
            .insert(*question.user_id.as_uuid(), &question.text, question.created_at)
            .await?;
        debug!(question_id = row.id, "inserted question");
        Ok(row.into())
    }

    #[instrument(skip(self), fields(question_id = %id))]
    async fn delete(&self, id: QuestionId) -> Result<(), PortError> {
        self.repository.delete(id.value()).await?;
        Ok(())
    }
}
