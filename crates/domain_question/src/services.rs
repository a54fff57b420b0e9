//! Question domain service
//!
//! Validates question text and delegates storage to a [`QuestionPort`].

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::{QuestionId, TextBounds, UserId};

use crate::error::QuestionError;
use crate::ports::QuestionPort;
use crate::question::{NewQuestion, Question};

/// Service for creating, listing, fetching and deleting questions
#[derive(Clone)]
pub struct QuestionService {
    port: Arc<dyn QuestionPort>,
    bounds: TextBounds,
}

impl QuestionService {
    /// Creates a service backed by the given port
    pub fn new(port: Arc<dyn QuestionPort>) -> Self {
        Self {
            port,
            bounds: TextBounds::standard(),
        }
    }

    /// Returns the underlying port
    ///
    /// The answer service shares it to confirm parent questions exist.
    pub fn port(&self) -> Arc<dyn QuestionPort> {
        Arc::clone(&self.port)
    }

    /// Validates and persists a new question
    ///
    /// # Errors
    ///
    /// - `TextTooShort` / `TextTooLong` if the text is outside 5..=200
    ///   characters; nothing is persisted in that case
    /// - `Storage` if the port fails
    #[instrument(skip(self, text), fields(user_id = %user_id))]
    pub async fn save(
        &self,
        user_id: UserId,
        text: impl Into<String>,
    ) -> Result<Question, QuestionError> {
        let text = text.into();
        if let Err(e) = self.bounds.check(&text) {
            warn!(error = %e, "rejected question text");
            return Err(e.into());
        }

        let question = self
            .port
            .save(NewQuestion::new(user_id, text))
            .await
            .map_err(QuestionError::Storage)?;

        info!(question_id = %question.id, "question saved");
        Ok(question)
    }

    /// Returns all questions
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Question>, QuestionError> {
        let questions = self.port.get_all().await.map_err(QuestionError::Storage)?;
        debug!(count = questions.len(), "retrieved questions");
        Ok(questions)
    }

    /// Retrieves a question by ID
    #[instrument(skip(self), fields(question_id = %id))]
    pub async fn get_by_id(&self, id: QuestionId) -> Result<Question, QuestionError> {
        self.port
            .get_by_id(id)
            .await
            .map_err(|e| QuestionError::from_port(e, id))
    }

    /// Deletes a question together with its answers
    #[instrument(skip(self), fields(question_id = %id))]
    pub async fn delete(&self, id: QuestionId) -> Result<(), QuestionError> {
        self.port
            .delete(id)
            .await
            .map_err(|e| QuestionError::from_port(e, id))?;
        info!("question deleted");
        Ok(())
    }
}
