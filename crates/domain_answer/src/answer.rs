//! Answer entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AnswerId, QuestionId, UserId};

/// A stored answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Store-assigned identifier
    pub id: AnswerId,
    /// The question this answer belongs to
    pub question_id: QuestionId,
    /// Owner of the answer
    pub user_id: UserId,
    /// Answer text, 5 to 200 characters
    pub text: String,
    /// When the answer was created
    pub created_at: DateTime<Utc>,
}

/// A validated answer that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewAnswer {
    /// Stamps the current time as the creation timestamp
    pub fn new(question_id: QuestionId, user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            question_id,
            user_id,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Attaches the store-assigned identifier
    pub fn into_answer(self, id: AnswerId) -> Answer {
        Answer {
            id,
            question_id: self.question_id,
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}
