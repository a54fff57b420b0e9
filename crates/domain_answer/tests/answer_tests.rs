//! Public API tests for domain_answer

use serde_json::json;

use core_kernel::{AnswerId, PortError, QuestionId, TextLengthError, UserId};
use domain_answer::{Answer, AnswerError, NewAnswer};

#[test]
fn test_answer_json_carries_question_id() {
    let answer = NewAnswer::new(QuestionId::new(3), UserId::new(), "Use Arc<Mutex<T>>.")
        .into_answer(AnswerId::new(9));

    let value = serde_json::to_value(&answer).unwrap();

    assert_eq!(value["id"], json!(9));
    assert_eq!(value["question_id"], json!(3));
    assert_eq!(value["text"], json!("Use Arc<Mutex<T>>."));
}

#[test]
fn test_error_kinds() {
    let parent = AnswerError::QuestionNotFound(QuestionId::new(999));
    assert_eq!(parent.to_string(), "question 999 does not exist");
    assert!(!parent.is_not_found());
    assert!(!parent.is_validation());

    let missing = AnswerError::from_port(PortError::not_found("Answer", 5), AnswerId::new(5));
    assert!(missing.is_not_found());
}

#[test]
fn test_answer_round_trips_through_wire_form() {
    let value = json!({
        "id": 2,
        "question_id": 1,
        "user_id": "550e8400-e29b-41d4-a716-446655440000",
        "text": "Clone the Arc, not the data.",
        "created_at": "2024-01-01T12:00:00Z"
    });

    let answer: Answer = serde_json::from_value(value).unwrap();

    assert_eq!(answer.id, AnswerId::new(2));
    assert_eq!(answer.question_id, QuestionId::new(1));
}

#[test]
fn test_length_error_conversion() {
    let err: AnswerError = TextLengthError::TooShort { min: 5, actual: 0 }.into();
    assert!(err.is_validation());
    assert!(err.to_string().starts_with("answer text too short"));
}
