//! Test Data Builders
//!
//! Builders for the port inputs, so tests only spell out the fields they care
//! about.

use chrono::{DateTime, Utc};
use core_kernel::{QuestionId, UserId};
use domain_answer::NewAnswer;
use domain_question::NewQuestion;

use crate::fixtures::TextFixtures;

/// Builder for `NewQuestion`
pub struct NewQuestionBuilder {
    user_id: UserId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Default for NewQuestionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewQuestionBuilder {
    /// Creates a builder with a random user, a valid text and the current time
    pub fn new() -> Self {
        Self {
            user_id: UserId::new(),
            text: TextFixtures::question().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> NewQuestion {
        NewQuestion {
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// Builder for `NewAnswer`
///
/// The question id is required because every answer has a parent.
pub struct NewAnswerBuilder {
    question_id: QuestionId,
    user_id: UserId,
    text: String,
    created_at: DateTime<Utc>,
}

impl NewAnswerBuilder {
    /// Creates a builder for an answer to `question_id`
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            question_id,
            user_id: UserId::new(),
            text: TextFixtures::answer().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> NewAnswer {
        NewAnswer {
            question_id: self.question_id,
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{IdFixtures, TemporalFixtures};

    #[test]
    fn test_question_builder_overrides() {
        let user_id = IdFixtures::fixed_user_id();
        let question = NewQuestionBuilder::new()
            .with_user_id(user_id)
            .with_text("Custom question")
            .with_created_at(TemporalFixtures::created_at())
            .build();

        assert_eq!(question.user_id, user_id);
        assert_eq!(question.text, "Custom question");
        assert_eq!(question.created_at, TemporalFixtures::created_at());
    }

    #[test]
    fn test_answer_builder_keeps_parent() {
        let answer = NewAnswerBuilder::new(QuestionId::new(3)).build();
        assert_eq!(answer.question_id, QuestionId::new(3));
        assert_eq!(answer.text, TextFixtures::answer());
    }
}
