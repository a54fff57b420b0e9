//! Answer domain service

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::{AnswerId, QuestionId, TextBounds, UserId};
use domain_question::{QuestionPort, QuestionPortExt};

use crate::answer::{Answer, NewAnswer};
use crate::error::AnswerError;
use crate::ports::AnswerPort;

/// Service for creating, fetching and deleting answers
#[derive(Clone)]
pub struct AnswerService {
    answers: Arc<dyn AnswerPort>,
    questions: Arc<dyn QuestionPort>,
    bounds: TextBounds,
}

impl AnswerService {
    /// Creates a service that stores answers in `answers` and checks parent
    /// questions against `questions`
    pub fn new(answers: Arc<dyn AnswerPort>, questions: Arc<dyn QuestionPort>) -> Self {
        Self {
            answers,
            questions,
            bounds: TextBounds::standard(),
        }
    }

    /// Returns the underlying answer port
    pub fn port(&self) -> Arc<dyn AnswerPort> {
        Arc::clone(&self.answers)
    }

    /// Validates and persists an answer to an existing question
    ///
    /// Text is checked first, then the parent question. Either failure
    /// leaves the store untouched.
    ///
    /// # Errors
    ///
    /// - `TextTooShort` / `TextTooLong` for text outside 5..=200 characters
    /// - `QuestionNotFound` if `question_id` does not reference a question
    /// - `Storage` if either port fails
    #[instrument(skip(self, text), fields(question_id = %question_id, user_id = %user_id))]
    pub async fn save(
        &self,
        question_id: QuestionId,
        user_id: UserId,
        text: impl Into<String>,
    ) -> Result<Answer, AnswerError> {
        let text = text.into();
        if let Err(e) = self.bounds.check(&text) {
            warn!(error = %e, "rejected answer text");
            return Err(e.into());
        }

        let exists = self
            .questions
            .exists(question_id)
            .await
            .map_err(AnswerError::Storage)?;
        if !exists {
            warn!("answer references missing question");
            return Err(AnswerError::QuestionNotFound(question_id));
        }

        let answer = self
            .answers
            .save(NewAnswer::new(question_id, user_id, text))
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    // question deleted between the check and the insert
                    AnswerError::QuestionNotFound(question_id)
                } else {
                    AnswerError::Storage(e)
                }
            })?;

        info!(answer_id = %answer.id, "answer saved");
        Ok(answer)
    }

    /// Returns all answers
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Answer>, AnswerError> {
        let answers = self.answers.get_all().await.map_err(AnswerError::Storage)?;
        debug!(count = answers.len(), "retrieved answers");
        Ok(answers)
    }

    /// Retrieves an answer by ID
    #[instrument(skip(self), fields(answer_id = %id))]
    pub async fn get_by_id(&self, id: AnswerId) -> Result<Answer, AnswerError> {
        self.answers
            .get_by_id(id)
            .await
            .map_err(|e| AnswerError::from_port(e, id))
    }

    /// Deletes an answer
    #[instrument(skip(self), fields(answer_id = %id))]
    pub async fn delete(&self, id: AnswerId) -> Result<(), AnswerError> {
        self.answers
            .delete(id)
            .await
            .map_err(|e| AnswerError::from_port(e, id))?;
        info!("answer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockAnswerPort;
    use chrono::Utc;
    use domain_question::{MockQuestionPort, NewQuestion, Question};
    use proptest::prelude::*;

    struct Fixture {
        service: AnswerService,
        answers: Arc<MockAnswerPort>,
        questions: Arc<MockQuestionPort>,
    }

    fn fixture() -> Fixture {
        let answers = Arc::new(MockAnswerPort::new());
        let questions = Arc::new(MockQuestionPort::new());
        Fixture {
            service: AnswerService::new(answers.clone(), questions.clone()),
            answers,
            questions,
        }
    }

    async fn seed_question(questions: &MockQuestionPort) -> Question {
        questions
            .save(NewQuestion::new(UserId::new(), "What is a borrow?"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_valid_answer() {
        let f = fixture();
        let question = seed_question(&f.questions).await;
        let user_id = UserId::new();
        let before = Utc::now();

        let answer = f.service.save(question.id, user_id, "Valid answer").await.unwrap();

        assert_eq!(answer.question_id, question.id);
        assert_eq!(answer.user_id, user_id);
        assert_eq!(answer.text, "Valid answer");
        assert!(answer.id.value() > 0);
        assert!(answer.created_at >= before);
    }

    #[tokio::test]
    async fn test_save_missing_question() {
        let f = fixture();

        let err = f
            .service
            .save(QuestionId::new(999), UserId::new(), "Valid answer")
            .await
            .unwrap_err();

        assert!(matches!(err, AnswerError::QuestionNotFound(id) if id == QuestionId::new(999)));
        assert!(f.answers.is_empty().await);
    }

    #[tokio::test]
    async fn test_text_checked_before_parent() {
        let f = fixture();

        let err = f
            .service
            .save(QuestionId::new(999), UserId::new(), "Hi")
            .await
            .unwrap_err();

        assert!(matches!(err, AnswerError::TextTooShort { .. }));
    }

    #[tokio::test]
    async fn test_save_long_text_rejected() {
        let f = fixture();
        let question = seed_question(&f.questions).await;

        let err = f
            .service
            .save(question.id, UserId::new(), "a".repeat(201))
            .await
            .unwrap_err();

        assert!(matches!(err, AnswerError::TextTooLong { max: 200, actual: 201 }));
        assert!(f.answers.is_empty().await);
    }

    #[tokio::test]
    async fn test_question_store_failure_is_storage_error() {
        let f = fixture();
        f.questions.set_unavailable(true);

        let err = f
            .service
            .save(QuestionId::new(1), UserId::new(), "Valid answer")
            .await
            .unwrap_err();

        assert!(matches!(err, AnswerError::Storage(_)));
        assert!(f.answers.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_by_id_and_delete() {
        let f = fixture();
        let question = seed_question(&f.questions).await;
        let answer = f.service.save(question.id, UserId::new(), "Valid answer").await.unwrap();

        assert_eq!(f.service.get_by_id(answer.id).await.unwrap(), answer);

        f.service.delete(answer.id).await.unwrap();
        assert!(f.service.get_by_id(answer.id).await.unwrap_err().is_not_found());
        assert!(f.service.delete(answer.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_all() {
        let f = fixture();
        let question = seed_question(&f.questions).await;
        f.service.save(question.id, UserId::new(), "First answer").await.unwrap();
        f.service.save(question.id, UserId::new(), "Second answer").await.unwrap();

        assert_eq!(f.service.get_all().await.unwrap().len(), 2);
        assert_eq!(f.answers.for_question(question.id).await.len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_storage_failure() {
        let f = fixture();
        f.answers.set_unavailable(true);

        assert!(matches!(f.service.get_all().await, Err(AnswerError::Storage(_))));
    }

    proptest! {
        #[test]
        fn prop_out_of_range_text_never_persisted(
            len in prop_oneof![0usize..5, 201usize..400]
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let f = fixture();
                let question = seed_question(&f.questions).await;
                let result = f.service.save(question.id, UserId::new(), "a".repeat(len)).await;
                assert!(result.unwrap_err().is_validation());
                assert!(f.answers.is_empty().await);
            });
        }
    }
}
