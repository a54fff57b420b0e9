//! Answer Domain Ports
//!
//! `AnswerPort` mirrors the question port: list, fetch, save, delete. An
//! adapter backed by a relational store must enforce the foreign key to the
//! question table; when an insert loses a race with a question delete it
//! reports `PortError::NotFound` for the question.

use async_trait::async_trait;

use core_kernel::{AnswerId, DomainPort, HealthCheckable, PortError};

use crate::answer::{Answer, NewAnswer};

/// Storage capability for answers
#[async_trait]
pub trait AnswerPort: DomainPort + HealthCheckable {
    /// Returns every stored answer in store-defined order
    async fn get_all(&self) -> Result<Vec<Answer>, PortError>;

    /// Retrieves an answer by ID
    async fn get_by_id(&self, id: AnswerId) -> Result<Answer, PortError>;

    /// Persists a new answer and returns it with its assigned ID
    async fn save(&self, answer: NewAnswer) -> Result<Answer, PortError>;

    /// Deletes an answer; zero affected rows is `PortError::NotFound`
    async fn delete(&self, id: AnswerId) -> Result<(), PortError>;
}

/// Mock implementation of AnswerPort for testing
///
/// The mock does not know about questions; parent checks happen in the
/// service against the question port.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use tokio::sync::RwLock;

    use core_kernel::{HealthCheckResult, QuestionId};

    /// In-memory mock implementation of AnswerPort
    #[derive(Debug, Default)]
    pub struct MockAnswerPort {
        answers: RwLock<BTreeMap<AnswerId, Answer>>,
        last_id: AtomicI64,
        unavailable: AtomicBool,
    }

    impl MockAnswerPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every subsequent call fail with a connection error
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        /// Number of stored answers
        pub async fn len(&self) -> usize {
            self.answers.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }

        /// Answers attached to the given question
        pub async fn for_question(&self, question_id: QuestionId) -> Vec<Answer> {
            self.answers
                .read()
                .await
                .values()
                .filter(|a| a.question_id == question_id)
                .cloned()
                .collect()
        }

        fn check_available(&self) -> Result<(), PortError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock answer store unavailable"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockAnswerPort {}

    #[async_trait]
    impl HealthCheckable for MockAnswerPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-answer-port")
        }
    }

    #[async_trait]
    impl AnswerPort for MockAnswerPort {
        async fn get_all(&self) -> Result<Vec<Answer>, PortError> {
            self.check_available()?;
            Ok(self.answers.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: AnswerId) -> Result<Answer, PortError> {
            self.check_available()?;
            self.answers
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Answer", id))
        }

        async fn save(&self, answer: NewAnswer) -> Result<Answer, PortError> {
            self.check_available()?;
            let id = AnswerId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
            let answer = answer.into_answer(id);
            self.answers.write().await.insert(id, answer.clone());
            Ok(answer)
        }

        async fn delete(&self, id: AnswerId) -> Result<(), PortError> {
            self.check_available()?;
            self.answers
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Answer", id))
        }
    }
}
