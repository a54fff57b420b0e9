//! Answer Domain
//!
//! An answer responds to exactly one question. This crate defines
//!
//! - the [`Answer`] entity and its creation input [`NewAnswer`],
//! - the [`AnswerPort`] storage capability,
//! - the [`AnswerService`], which validates text and refuses to attach an
//!   answer to a question that does not exist.
//!
//! The service reads questions through `domain_question::QuestionPort`, so an
//! answer store and a question store can be wired independently.

pub mod answer;
pub mod error;
pub mod ports;
pub mod services;

pub use answer::{Answer, NewAnswer};
pub use error::AnswerError;
pub use ports::AnswerPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockAnswerPort;
pub use services::AnswerService;
