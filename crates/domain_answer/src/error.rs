//! Answer domain errors

use thiserror::Error;

use core_kernel::{AnswerId, PortError, QuestionId, TextLengthError};

/// Errors that can occur in the answer domain
///
/// `QuestionNotFound` (the parent is missing) is kept apart from `NotFound`
/// (the answer itself is missing) and from the text length errors, even
/// though the HTTP layer reports all of them as bad requests.
#[derive(Debug, Error)]
pub enum AnswerError {
    /// Text has fewer characters than allowed
    #[error("answer text too short: {actual} characters, minimum is {min}")]
    TextTooShort { min: usize, actual: usize },

    /// Text has more characters than allowed
    #[error("answer text too long: {actual} characters, maximum is {max}")]
    TextTooLong { max: usize, actual: usize },

    /// The referenced question does not exist
    #[error("question {0} does not exist")]
    QuestionNotFound(QuestionId),

    /// No answer with the given ID exists
    #[error("answer {0} not found")]
    NotFound(AnswerId),

    /// The store failed for a reason other than a missing row
    #[error("answer storage failed: {0}")]
    Storage(#[source] PortError),
}

impl AnswerError {
    /// Translates a port failure for the given answer
    pub fn from_port(error: PortError, id: AnswerId) -> Self {
        if error.is_not_found() {
            AnswerError::NotFound(id)
        } else {
            AnswerError::Storage(error)
        }
    }

    /// True for text length violations
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnswerError::TextTooShort { .. } | AnswerError::TextTooLong { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AnswerError::NotFound(_))
    }
}

impl From<TextLengthError> for AnswerError {
    fn from(error: TextLengthError) -> Self {
        match error {
            TextLengthError::TooShort { min, actual } => AnswerError::TextTooShort { min, actual },
            TextLengthError::TooLong { max, actual } => AnswerError::TextTooLong { max, actual },
        }
    }
}
