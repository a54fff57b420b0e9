//! Question DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_question::Question;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub user_id: Uuid,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.value(),
            user_id: *question.user_id.as_uuid(),
            text: question.text,
            created_at: question.created_at,
        }
    }
}
