//! Repository implementations for the question and answer tables
//!
//! Repositories own the SQL and map rows to plain row structs; the adapters
//! turn those into domain entities. Queries are checked at runtime via
//! `sqlx::query_as` with `FromRow` rows, so no database is needed at build time.

pub mod question;
pub mod answer;

pub use question::{QuestionRepository, QuestionRow};
pub use answer::{AnswerRepository, AnswerRow};
