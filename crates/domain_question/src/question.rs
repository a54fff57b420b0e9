//! Question entity
//!
//! A question is immutable once stored: it has no update path, and the only
//! lifecycle transition after creation is deletion (which cascades to its
//! answers in the store).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{QuestionId, UserId};

/// A stored question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier
    pub id: QuestionId,
    /// Owner of the question
    pub user_id: UserId,
    /// Question text, 5 to 200 characters
    pub text: String,
    /// When the question was created
    pub created_at: DateTime<Utc>,
}

/// A validated question that has not been persisted yet
///
/// Produced by [`crate::QuestionService::save`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub user_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewQuestion {
    /// Stamps the current time as the creation timestamp
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Attaches the store-assigned identifier
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}
