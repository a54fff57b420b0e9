//! Schema migrations embedded from the workspace `migrations/` directory
//!
//! Every migration ships with a `.down.sql`, so the schema can be stepped
//! back one version at a time.

use std::collections::HashSet;

use sqlx::migrate::{Migrate, Migrator};
use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// A known migration and whether the database has applied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// Applies every pending migration; already-applied ones are skipped
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");
    MIGRATOR.run(pool).await?;
    info!("Database migrations complete");
    Ok(())
}

/// Reverts the most recently applied migration
///
/// Returns the reverted version, or `None` when nothing was applied.
pub async fn revert_last_migration(pool: &DatabasePool) -> Result<Option<i64>, DatabaseError> {
    let status = migration_status(pool).await?;
    let Some(latest) = status.iter().rev().find(|m| m.applied).map(|m| m.version) else {
        info!("No applied migrations to revert");
        return Ok(None);
    };

    let target = previous_version(&status, latest);
    info!(version = latest, down_to = target, "Reverting migration");
    MIGRATOR.undo(pool, target).await?;
    Ok(Some(latest))
}

/// Lists every embedded migration, oldest first
pub async fn migration_status(pool: &DatabasePool) -> Result<Vec<MigrationStatus>, DatabaseError> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let applied: HashSet<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|m| m.version)
        .collect();

    Ok(MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}

/// Version to undo down to so that exactly `version` is reverted
fn previous_version(status: &[MigrationStatus], version: i64) -> i64 {
    status
        .iter()
        .map(|m| m.version)
        .filter(|v| *v < version)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(versions: &[i64]) -> Vec<MigrationStatus> {
        versions
            .iter()
            .map(|v| MigrationStatus {
                version: *v,
                description: format!("m{}", v),
                applied: true,
            })
            .collect()
    }

    #[test]
    fn test_previous_version() {
        let known = status(&[10, 20, 30]);
        assert_eq!(previous_version(&known, 30), 20);
        assert_eq!(previous_version(&known, 10), 0);
    }

    #[test]
    fn test_every_migration_is_reversible() {
        let ups = MIGRATOR.iter().filter(|m| m.migration_type.is_up_migration());
        for up in ups {
            assert!(
                MIGRATOR
                    .iter()
                    .any(|m| m.version == up.version && m.migration_type.is_down_migration()),
                "migration {} has no down script",
                up.version
            );
        }
    }
}
