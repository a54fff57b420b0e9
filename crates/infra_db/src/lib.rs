//! Infrastructure Database Layer
//!
//! Storage adapters for the question and answer ports.
//!
//! # Architecture
//!
//! - `repositories`: row types and SQL against PostgreSQL, one repository per table
//! - `adapters`: `QuestionPort` / `AnswerPort` implementations on top of the
//!   repositories, translating rows to domain entities and database errors to
//!   `PortError`
//! - `memory`: a single in-memory store implementing both ports, with the same
//!   cascade and id semantics as the database schema
//! - `migrations`: the embedded schema, applied, reverted and inspected
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseSettings, create_pool, run_migrations};
//! use infra_db::adapters::{PostgresQuestionAdapter, PostgresAnswerAdapter};
//!
//! let pool = create_pool(&DatabaseSettings::from_url("postgres://localhost/qa")).await?;
//! run_migrations(&pool).await?;
//! let questions = PostgresQuestionAdapter::new(pool.clone());
//! let answers = PostgresAnswerAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;
pub mod memory;
pub mod migrations;

pub use pool::{DatabasePool, DatabaseSettings, create_pool};
pub use migrations::{MigrationStatus, migration_status, revert_last_migration, run_migrations};
pub use error::DatabaseError;
pub use adapters::{PostgresQuestionAdapter, PostgresAnswerAdapter};
pub use memory::InMemoryStore;
