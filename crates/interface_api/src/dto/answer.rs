//! Answer DTOs
//!
//! The question id of a new answer comes from the path, not the body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_answer::Answer;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAnswerRequest {
    pub user_id: Uuid,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub id: i64,
    pub question_id: i64,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id.value(),
            question_id: answer.question_id.value(),
            user_id: *answer.user_id.as_uuid(),
            text: answer.text,
            created_at: answer.created_at,
        }
    }
}
