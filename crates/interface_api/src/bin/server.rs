//! Q&A API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # PostgreSQL on localhost with defaults
//! cargo run --bin qa-api
//!
//! # No database
//! API_STORAGE=memory cargo run --bin qa-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` / `API_PORT` - Listen address (default: 0.0.0.0:8080)
//! * `API_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! * `API_LOG_FORMAT` - `pretty` or `json`
//! * `API_STORAGE` - `postgres` or `memory` (default: postgres)
//! * `API_RUN_MIGRATIONS` - Apply migrations on startup (default: true)
//! * `API_DATABASE__URL` - Full connection string, overrides the parts below
//! * `API_DATABASE__HOST`, `__PORT`, `__USER`, `__PASSWORD`, `__NAME`
//! * `API_DATABASE__MAX_CONNECTIONS`, `__MIN_CONNECTIONS`, `__CONNECT_TIMEOUT_SECS`

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use domain_answer::AnswerPort;
use domain_question::QuestionPort;
use infra_db::{create_pool, run_migrations, InMemoryStore, PostgresAnswerAdapter, PostgresQuestionAdapter};
use interface_api::config::{ApiConfig, StorageBackend};
use interface_api::create_router;
use interface_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("failed to load configuration")?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = ?config.storage,
        "Starting Q&A API server"
    );

    let (questions, answers) = build_ports(&config).await?;

    let app = create_router(questions, answers, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_addr()))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Builds the question and answer ports for the configured backend
async fn build_ports(
    config: &ApiConfig,
) -> anyhow::Result<(Arc<dyn QuestionPort>, Arc<dyn AnswerPort>)> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            let store = Arc::new(InMemoryStore::new());
            let questions: Arc<dyn QuestionPort> = store.clone();
            let answers: Arc<dyn AnswerPort> = store;
            Ok((questions, answers))
        }
        StorageBackend::Postgres => {
            tracing::info!(database = %config.database.display_target(), "Connecting to database");
            let pool = create_pool(&config.database)
                .await
                .context("failed to connect to database")?;

            if config.run_migrations {
                run_migrations(&pool).await.context("failed to run migrations")?;
            }

            let questions: Arc<dyn QuestionPort> = Arc::new(PostgresQuestionAdapter::new(pool.clone()));
            let answers: Arc<dyn AnswerPort> = Arc::new(PostgresAnswerAdapter::new(pool));
            Ok((questions, answers))
        }
    }
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can finish
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
