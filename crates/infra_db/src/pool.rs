//! PostgreSQL connection settings and pool creation
//!
//! [`DatabaseSettings`] deserializes straight out of the service
//! configuration, so the same struct drives the server and the migration
//! tool. A full `url` wins over the individual parts.

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the PostgreSQL connection pool
pub type DatabasePool = PgPool;

/// Where the database lives and how many connections to keep open
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "qa".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
        }
    }
}

impl DatabaseSettings {
    /// Settings for an explicit connection string
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }

    /// Target for log lines; never includes the password
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(_) => "configured url".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.name),
        }
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

/// Opens a connection pool and waits for the first connection
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the server cannot be reached
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabasePool, DatabaseError> {
    info!(
        target_db = %settings.display_target(),
        max_connections = settings.max_connections,
        "Creating database pool"
    );

    settings
        .pool_options()
        .connect(&settings.connection_url())
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}
