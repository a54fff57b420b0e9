//! PostgreSQL Answer Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use core_kernel::{AnswerId, DomainPort, HealthCheckResult, HealthCheckable, PortError, QuestionId, UserId};
use domain_answer::{Answer, AnswerPort, NewAnswer};

use crate::error::DatabaseError;
use crate::repositories::answer::{AnswerRepository, AnswerRow};

/// PostgreSQL-backed implementation of the AnswerPort trait
///
/// An insert whose question no longer exists fails the foreign key; that is
/// reported as `PortError::NotFound` for the question.
#[derive(Debug, Clone)]
pub struct PostgresAnswerAdapter {
    repository: AnswerRepository,
    pool: PgPool,
}

impl PostgresAnswerAdapter {
    /// Creates a new PostgreSQL answer adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AnswerRepository::new(pool.clone()),
            pool,
        }
    }

    /// Answers attached to one question, oldest first
    #[instrument(skip(self), fields(question_id = %question_id))]
    pub async fn find_by_question(&self, question_id: QuestionId) -> Result<Vec<Answer>, PortError> {
        let rows = self.repository.find_by_question(question_id.value()).await?;
        Ok(rows.into_iter().map(Answer::from).collect())
    }
}

impl From<AnswerRow> for Answer {
    fn from(row: AnswerRow) -> Self {
        Answer {
            id: AnswerId::new(row.id),
            question_id: QuestionId::new(row.question_id),
            user_id: UserId::from_uuid(row.user_id),
            text: row.text,
            created_at: row.created_at,
        }
    }
}

impl DomainPort for PostgresAnswerAdapter {}

#[async_trait]
impl HealthCheckable for PostgresAnswerAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-answer-adapter").await
    }
}

#[async_trait]
impl AnswerPort for PostgresAnswerAdapter {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Answer>, PortError> {
        let rows = self.repository.get_all().await?;
        debug!(count = rows.len(), "loaded answers");
        Ok(rows.into_iter().map(Answer::from).collect())
    }

    #[instrument(skip(self), fields(answer_id = %id))]
    async fn get_by_id(&self, id: AnswerId) -> Result<Answer, PortError> {
        let row = self.repository.get_by_id(id.value()).await?;
        Ok(row.into())
    }

    #[instrument(skip(self, answer), fields(question_id = %answer.question_id, user_id = %answer.user_id))]
    async fn save(&self, answer: NewAnswer) -> Result<Answer, PortError> {
        let result = self
            .repository
            .insert(
                answer.question_id.value(),
                *answer.user_id.as_uuid(),
                &answer.text,
                answer.created_at,
            )
            .await;

        match result {
            Ok(row) => {
                debug!(answer_id = row.id, "inserted answer");
                Ok(row.into())
            }
            Err(DatabaseError::ForeignKeyViolation(msg)) => {
                warn!(error = %msg, "answer insert lost its question");
                Err(PortError::not_found("Question", answer.question_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self), fields(answer_id = %id))]
    async fn delete(&self, id: AnswerId) -> Result<(), PortError> {
        self.repository.delete(id.value()).await?;
        Ok(())
    }
}
