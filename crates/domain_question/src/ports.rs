//! Question Domain Ports
//!
//! The `QuestionPort` trait is everything the question domain needs from its
//! data source. Implementations:
//!
//! - **PostgreSQL Adapter**: `infra_db::adapters::PostgresQuestionAdapter`
//! - **In-memory Store**: `infra_db::memory::InMemoryStore`, shared with answers
//! - **Mock Adapter**: [`mock::MockQuestionPort`] for unit tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_question::{QuestionPort, QuestionService};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn QuestionPort> = Arc::new(PostgresQuestionAdapter::new(pool));
//! let service = QuestionService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError, QuestionId};

use crate::question::{NewQuestion, Question};

/// Storage capability for questions
///
/// Adapters must report a missing row as `PortError::NotFound`, including a
/// delete that affected zero rows, so the service can distinguish it from
/// infrastructure failures.
#[async_trait]
pub trait QuestionPort: DomainPort + HealthCheckable {
    /// Returns every stored question in store-defined order
    async fn get_all(&self) -> Result<Vec<Question>, PortError>;

    /// Retrieves a question by ID
    async fn get_by_id(&self, id: QuestionId) -> Result<Question, PortError>;

    /// Persists a new question and returns it with its assigned ID
    async fn save(&self, question: NewQuestion) -> Result<Question, PortError>;

    /// Deletes a question and, through the store, its answers
    async fn delete(&self, id: QuestionId) -> Result<(), PortError>;
}

/// Convenience operations built on [`QuestionPort`]
#[async_trait]
pub trait QuestionPortExt: QuestionPort {
    /// True if a question with this ID exists
    async fn exists(&self, id: QuestionId) -> Result<bool, PortError> {
        match self.get_by_id(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<T: QuestionPort + ?Sized> QuestionPortExt for T {}

/// Mock implementation of QuestionPort for testing
///
/// Stores questions in memory and hands out increasing IDs starting at 1.
/// It can be switched into an unavailable state to exercise storage failures.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// In-memory mock implementation of QuestionPort
    #[derive(Debug, Default)]
    pub struct MockQuestionPort {
        questions: Arc<RwLock<BTreeMap<QuestionId, Question>>>,
        last_id: AtomicI64,
        unavailable: AtomicBool,
    }

    impl MockQuestionPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with questions for testing
        pub async fn with_questions(questions: Vec<Question>) -> Self {
            let port = Self::new();
            for question in questions {
                port.last_id.fetch_max(question.id.value(), Ordering::SeqCst);
                port.questions.write().await.insert(question.id, question);
            }
            port
        }

        /// Makes every subsequent call fail with a connection error
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        /// Number of stored questions
        pub async fn len(&self) -> usize {
            self.questions.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }

        fn check_available(&self) -> Result<(), PortError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock question store unavailable"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockQuestionPort {}

    #[async_trait]
    impl HealthCheckable for MockQuestionPort {
        async fn health_check(&self) -> HealthCheckResult {
            let mut result = HealthCheckResult::healthy("mock-question-port");
            if self.unavailable.load(Ordering::SeqCst) {
                result.status = core_kernel::AdapterHealth::Unhealthy;
                result.message = Some("Mock adapter marked unavailable".to_string());
            }
            result
        }
    }

    #[async_trait]
    impl QuestionPort for MockQuestionPort {
        async fn get_all(&self) -> Result<Vec<Question>, PortError> {
            self.check_available()?;
            Ok(self.questions.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: QuestionId) -> Result<Question, PortError> {
            self.check_available()?;
            self.questions
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Question", id))
        }

        async fn save(&self, question: NewQuestion) -> Result<Question, PortError> {
            self.check_available()?;
            let id = QuestionId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
            let question = question.into_question(id);
            self.questions.write().await.insert(id, question.clone());
            Ok(question)
        }

        async fn delete(&self, id: QuestionId) -> Result<(), PortError> {
            self.check_available()?;
            self.questions
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Question", id))
        }
    }
}
