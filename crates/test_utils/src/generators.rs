//! Property-Based Test Generators
//!
//! Proptest strategies for text on either side of the length bounds. Lengths
//! are counted in characters, so the strategies mix in multi-byte characters.

use core_kernel::{QuestionId, TextBounds, UserId};
use proptest::prelude::*;
use uuid::Uuid;

/// Strategy for a single character, ASCII or multi-byte
pub fn text_char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => proptest::char::range('a', 'z'),
        1 => proptest::char::range('а', 'я'),
        1 => Just('ü'),
        1 => Just(' '),
    ]
}

fn text_of_len(len: impl Strategy<Value = usize>) -> impl Strategy<Value = String> {
    len.prop_flat_map(|n| proptest::collection::vec(text_char_strategy(), n))
        .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for text that passes validation (5..=200 characters)
pub fn valid_text_strategy() -> impl Strategy<Value = String> {
    text_of_len(TextBounds::MIN..=TextBounds::MAX)
}

/// Strategy for text below the minimum length
pub fn short_text_strategy() -> impl Strategy<Value = String> {
    text_of_len(0..TextBounds::MIN)
}

/// Strategy for text above the maximum length
pub fn long_text_strategy() -> impl Strategy<Value = String> {
    text_of_len((TextBounds::MAX + 1)..(TextBounds::MAX * 2))
}

/// Strategy for text that fails validation
pub fn invalid_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![short_text_strategy(), long_text_strategy()]
}

/// Strategy for user ids
pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
    any::<u128>().prop_map(|n| UserId::from_uuid(Uuid::from_u128(n)))
}

/// Strategy for positive question ids
pub fn question_id_strategy() -> impl Strategy<Value = QuestionId> {
    (1i64..1_000_000).prop_map(QuestionId::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::validate_text;

    proptest! {
        #[test]
        fn valid_text_passes(text in valid_text_strategy()) {
            prop_assert!(validate_text(&text).is_ok());
        }

        #[test]
        fn invalid_text_fails(text in invalid_text_strategy()) {
            prop_assert!(validate_text(&text).is_err());
        }
    }
}
