//! Core Kernel - Foundational types shared by the Q&A service crates
//!
//! This crate provides the building blocks used across the domain and
//! infrastructure layers:
//! - Strongly-typed identifiers for questions, answers and users
//! - Text length validation shared by both entity types
//! - Port infrastructure (errors, marker traits, health checks)

pub mod identifiers;
pub mod validation;
pub mod ports;
pub mod error;

pub use identifiers::{QuestionId, AnswerId, UserId, IdParseError};
pub use validation::{TextBounds, TextLengthError, validate_text};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use error::CoreError;
