//! In-memory storage
//!
//! [`InMemoryStore`] implements both [`QuestionPort`] and [`AnswerPort`] over
//! one shared state, so it behaves like the relational schema:
//!
//! - ids come from per-table counters and are never reused
//! - saving an answer requires the question to exist
//! - deleting a question removes its answers in the same critical section
//!
//! Used by the HTTP tests and by the server when `API_STORAGE=memory`.
//! Because the store implements both ports, calls on a concrete value need
//! qualifying, e.g. `QuestionPort::get_all(&store)`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{AnswerId, DomainPort, HealthCheckResult, HealthCheckable, PortError, QuestionId};
use domain_answer::{Answer, AnswerPort, NewAnswer};
use domain_question::{NewQuestion, Question, QuestionPort};

#[derive(Debug, Default)]
struct State {
    questions: BTreeMap<QuestionId, Question>,
    answers: BTreeMap<AnswerId, Answer>,
    last_question_id: i64,
    last_answer_id: i64,
}

/// Shared in-memory store for questions and answers
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored questions
    pub async fn question_count(&self) -> usize {
        self.state.read().await.questions.len()
    }

    /// Number of stored answers
    pub async fn answer_count(&self) -> usize {
        self.state.read().await.answers.len()
    }

    /// Answers attached to one question, oldest first
    pub async fn answers_for(&self, question_id: QuestionId) -> Vec<Answer> {
        self.state
            .read()
            .await
            .answers
            .values()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect()
    }
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl HealthCheckable for InMemoryStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-store")
    }
}

#[async_trait]
impl QuestionPort for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<Question>, PortError> {
        Ok(self.state.read().await.questions.values().cloned().collect())
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Question, PortError> {
        self.state
            .read()
            .await
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Question", id))
    }

    async fn save(&self, question: NewQuestion) -> Result<Question, PortError> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;
        let question = question.into_question(QuestionId::new(state.last_question_id));
        state.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: QuestionId) -> Result<(), PortError> {
        let mut state = self.state.write().await;
        if state.questions.remove(&id).is_none() {
            return Err(PortError::not_found("Question", id));
        }

        let before = state.answers.len();
        state.answers.retain(|_, a| a.question_id != id);
        debug!(question_id = %id, removed_answers = before - state.answers.len(), "cascaded question delete");
        Ok(())
    }
}

#[async_trait]
impl AnswerPort for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<Answer>, PortError> {
        Ok(self.state.read().await.answers.values().cloned().collect())
    }

    async fn get_by_id(&self, id: AnswerId) -> Result<Answer, PortError> {
        self.state
            .read()
            .await
            .answers
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Answer", id))
    }

    async fn save(&self, answer: NewAnswer) -> Result<Answer, PortError> {
        let mut state = self.state.write().await;
        if !state.questions.contains_key(&answer.question_id) {
            return Err(PortError::not_found("Question", answer.question_id));
        }

        state.last_answer_id += 1;
        let answer = answer.into_answer(AnswerId::new(state.last_answer_id));
        state.answers.insert(answer.id, answer.clone());
        Ok(answer)
    }

    async fn delete(&self, id: AnswerId) -> Result<(), PortError> {
        self.state
            .write()
            .await
            .answers
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Answer", id))
    }
}
