//! Question Domain
//!
//! This crate owns the top-level entity of the service: a user-submitted
//! question. It defines
//!
//! - the [`Question`] entity and its creation input [`NewQuestion`],
//! - the [`QuestionPort`] storage capability that adapters implement,
//! - the [`QuestionService`] that validates text before anything is persisted.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use core_kernel::UserId;
//! use domain_question::{MockQuestionPort, QuestionService};
//!
//! let service = QuestionService::new(Arc::new(MockQuestionPort::new()));
//!
//! let question = service.save(UserId::new(), "What is ownership?").await?;
//! assert_eq!(question.text, "What is ownership?");
//!
//! // rejected before reaching the port
//! assert!(service.save(UserId::new(), "Hi").await.is_err());
//! ```

pub mod question;
pub mod error;
pub mod ports;
pub mod services;

pub use question::{Question, NewQuestion};
pub use error::QuestionError;
pub use ports::{QuestionPort, QuestionPortExt};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockQuestionPort;
pub use services::QuestionService;
