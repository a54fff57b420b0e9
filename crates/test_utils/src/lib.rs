//! Test Utilities Crate
//!
//! Shared test infrastructure, fixtures, and helpers for the question and
//! answer service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data (texts, ids, timestamps)
//! - `builders`: Builders for `NewQuestion` / `NewAnswer`
//! - `database`: PostgreSQL testcontainer management with migrations applied
//! - `assertions`: Assertion helpers for port results and timestamps
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
