//! Text length validation
//!
//! Questions and answers share one rule: the text must contain between
//! [`TextBounds::MIN`] and [`TextBounds::MAX`] characters inclusive. Length is
//! counted in Unicode scalar values, not bytes.

use thiserror::Error;

/// Inclusive character bounds for user-submitted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub min: usize,
    pub max: usize,
}

impl TextBounds {
    pub const MIN: usize = 5;
    pub const MAX: usize = 200;

    /// Bounds applied to question and answer text
    pub const fn standard() -> Self {
        Self {
            min: Self::MIN,
            max: Self::MAX,
        }
    }

    /// Checks `text` against these bounds
    pub fn check(&self, text: &str) -> Result<(), TextLengthError> {
        let actual = text.chars().count();
        if actual < self.min {
            return Err(TextLengthError::TooShort { min: self.min, actual });
        }
        if actual > self.max {
            return Err(TextLengthError::TooLong { max: self.max, actual });
        }
        Ok(())
    }
}

impl Default for TextBounds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text fell outside the allowed length range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextLengthError {
    #[error("text too short: {actual} characters, minimum is {min}")]
    TooShort { min: usize, actual: usize },

    #[error("text too long: {actual} characters, maximum is {max}")]
    TooLong { max: usize, actual: usize },
}

/// Validates text against the standard bounds
pub fn validate_text(text: &str) -> Result<(), TextLengthError> {
    TextBounds::standard().check(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(validate_text("abcde").is_ok());
        assert!(validate_text(&"a".repeat(200)).is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_text("Hi"),
            Err(TextLengthError::TooShort { min: 5, actual: 2 })
        );
        assert!(matches!(validate_text(""), Err(TextLengthError::TooShort { .. })));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_text(&"a".repeat(201)),
            Err(TextLengthError::TooLong { max: 200, actual: 201 })
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert!(validate_text("привет").is_ok());
        // four characters, eight bytes
        assert!(validate_text("ёжик").is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_lengths_accepted(len in 5usize..=200) {
            prop_assert!(validate_text(&"x".repeat(len)).is_ok());
        }

        #[test]
        fn prop_short_lengths_rejected(len in 0usize..5) {
            let is_too_short = matches!(
                validate_text(&"x".repeat(len)),
                Err(TextLengthError::TooShort { .. })
            );
            prop_assert!(is_too_short);
        }

        #[test]
        fn prop_long_lengths_rejected(len in 201usize..1000) {
            let is_too_long = matches!(
                validate_text(&"x".repeat(len)),
                Err(TextLengthError::TooLong { .. })
            );
            prop_assert!(is_too_long);
        }
    }
}
