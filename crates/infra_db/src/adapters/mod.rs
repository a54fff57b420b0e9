//! Domain Adapters
//!
//! PostgreSQL implementations of the domain ports. Each adapter:
//! - implements the domain's port trait on top of a repository
//! - converts row types to domain entities
//! - translates `DatabaseError` into `PortError`
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresQuestionAdapter;
//! use domain_question::QuestionPort;
//!
//! let adapter = PostgresQuestionAdapter::new(pool);
//! let question = adapter.get_by_id(QuestionId::new(1)).await?;
//! ```

pub mod question;
pub mod answer;

pub use question::PostgresQuestionAdapter;
pub use answer::PostgresAnswerAdapter;

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult};

/// Runs `SELECT 1` against the pool and reports the outcome under `adapter_id`
pub(crate) async fn ping(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = std::time::Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    let (status, message) = match result {
        Ok(_) => (AdapterHealth::Healthy, None),
        Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
    };

    HealthCheckResult {
        adapter_id: adapter_id.to_string(),
        status,
        latency_ms,
        message,
        checked_at: Utc::now(),
    }
}
