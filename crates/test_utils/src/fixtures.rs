//! Pre-built Test Fixtures
//!
//! Ready-to-use test data. Text fixtures are either fixed strings at the
//! interesting boundaries or lorem sentences from `fake` that always fall
//! inside the accepted length range.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{QuestionId, TextBounds, UserId};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use uuid::Uuid;

/// Fixture for question and answer text
pub struct TextFixtures;

impl TextFixtures {
    /// A typical question
    pub fn question() -> &'static str {
        "What is the difference between String and &str?"
    }

    /// A typical answer
    pub fn answer() -> &'static str {
        "String owns its buffer, &str borrows one."
    }

    /// Two characters, below the minimum
    pub fn too_short() -> &'static str {
        "Hi"
    }

    /// Exactly the minimum length
    pub fn min_length() -> String {
        "a".repeat(TextBounds::MIN)
    }

    /// Exactly the maximum length
    pub fn max_length() -> String {
        "a".repeat(TextBounds::MAX)
    }

    /// One character over the maximum
    pub fn too_long() -> String {
        "a".repeat(TextBounds::MAX + 1)
    }

    /// A random lorem sentence trimmed into the accepted range
    pub fn random() -> String {
        let sentence: String = Sentence(3..10).fake();
        let mut text: String = sentence.chars().take(TextBounds::MAX).collect();
        while text.chars().count() < TextBounds::MIN {
            text.push('.');
        }
        text
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// A stable user id for assertions across calls
    pub fn fixed_user_id() -> UserId {
        UserId::from_uuid(Uuid::from_u128(0x5a1e_0000_0000_4000_8000_0000_0000_0001))
    }

    /// A question id no test ever creates
    pub fn missing_question_id() -> QuestionId {
        QuestionId::new(999)
    }
}

/// Fixture for timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A fixed creation time (Jan 1, 2024)
    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}
