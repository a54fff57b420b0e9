//! Question domain errors

use thiserror::Error;

use core_kernel::{PortError, QuestionId, TextLengthError};

/// Errors that can occur in the question domain
#[derive(Debug, Error)]
pub enum QuestionError {
    /// Text has fewer characters than allowed
    #[error("question text too short: {actual} characters, minimum is {min}")]
    TextTooShort { min: usize, actual: usize },

    /// Text has more characters than allowed
    #[error("question text too long: {actual} characters, maximum is {max}")]
    TextTooLong { max: usize, actual: usize },

    /// No question with the given ID exists
    #[error("question {0} not found")]
    NotFound(QuestionId),

    /// The store failed for a reason other than a missing row
    #[error("question storage failed: {0}")]
    Storage(#[source] PortError),
}

impl QuestionError {
    /// Translates a port failure for the given question
    pub fn from_port(error: PortError, id: QuestionId) -> Self {
        if error.is_not_found() {
            QuestionError::NotFound(id)
        } else {
            QuestionError::Storage(error)
        }
    }

    /// True for text length violations
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuestionError::TextTooShort { .. } | QuestionError::TextTooLong { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QuestionError::NotFound(_))
    }
}

impl From<TextLengthError> for QuestionError {
    fn from(error: TextLengthError) -> Self {
        match error {
            TextLengthError::TooShort { min, actual } => QuestionError::TextTooShort { min, actual },
            TextLengthError::TooLong { max, actual } => QuestionError::TextTooLong { max, actual },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_port_not_found() {
        let error = QuestionError::from_port(PortError::not_found("Question", 9), QuestionId::new(9));
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "question 9 not found");
    }

    #[test]
    fn test_from_port_storage() {
        let error = QuestionError::from_port(PortError::connection("refused"), QuestionId::new(9));
        assert!(matches!(error, QuestionError::Storage(_)));
        assert!(!error.is_validation());
    }

    #[test]
    fn test_from_text_length_error() {
        let error: QuestionError = TextLengthError::TooShort { min: 5, actual: 2 }.into();
        assert!(error.is_validation());
        assert!(error.to_string().contains("too short"));

        let error: QuestionError = TextLengthError::TooLong { max: 200, actual: 201 }.into();
        assert!(error.is_validation());
        assert!(error.to_string().contains("too long"));
    }
}
